use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("\"{0}\" doesn't look like an email address")]
    InvalidEmail(String),
    #[error("Message should be at least {min} characters", min = MIN_MESSAGE_LEN)]
    MessageTooShort,
}

impl ContactForm {
    /// Checks the fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(ContactError::MessageTooShort);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !domain.contains('@')
}
