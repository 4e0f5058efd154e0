use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Vec2};
use super::GateConfig;

/// Everything the card view renders: translation, tilt and the lanyard's
/// lagging curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: Vec2,
    pub lanyard: Vec2,
}

impl Pose {
    pub const REST: Pose = Pose {
        position: Vec2::ZERO,
        rotation: Vec2::ZERO,
        lanyard: Vec2::ZERO,
    };

    pub fn is_rest(&self) -> bool {
        self.position.is_zero() && self.rotation.is_zero() && self.lanyard.is_zero()
    }

    /// Every component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Pose {
        Pose {
            position: self.position * factor,
            rotation: self.rotation * factor,
            lanyard: self.lanyard * factor,
        }
    }

    /// CSS transform for the card.
    pub fn card_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.position.x, self.position.y, self.rotation.x, self.rotation.y
        )
    }

    /// CSS transform for the lanyard. The strap hangs from the top edge, so
    /// a downward pull stretches it instead of moving it.
    pub fn lanyard_transform(&self) -> String {
        format!(
            "translateX({:.2}px) scaleY({:.3})",
            self.lanyard.x,
            1.0 + self.lanyard.y / 160.0
        )
    }
}

/// Derives tilt and lanyard offset from the card's offset inside
/// `container`. A degenerate container axis produces no tilt on that axis.
pub fn map_offset(config: &GateConfig, offset: Vec2, container: &Rect) -> Pose {
    // min/max instead of clamp: an unvalidated bound must not panic
    let max_tilt = config.max_tilt.abs();
    let tilt = |num: f64, den: f64| {
        if den <= 0.0 {
            0.0
        } else {
            (num / den * config.tilt_range).max(-max_tilt).min(max_tilt)
        }
    };
    Pose {
        position: offset,
        rotation: Vec2::new(
            tilt(offset.y, container.height()),
            tilt(-offset.x, container.width()),
        ),
        lanyard: Vec2::new(
            offset.x * config.lanyard_x_factor,
            (offset.y * config.lanyard_y_factor).max(0.0),
        ),
    }
}
