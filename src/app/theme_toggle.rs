use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_KEY;
use crate::theme::Theme;

/// Provides the site-wide theme signal. In the browser the theme is restored
/// from local storage (or the system preference) once hydrated, and every
/// later change is persisted and mirrored onto the `dark` class of `<html>`.
pub fn provide_theme() {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) = use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_KEY);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let resolved = Theme::resolve(stored.get_untracked(), prefers_dark());
            apply_theme(resolved);
            theme.set(resolved);
        },
        true,
    );

    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || theme.get(),
        move |theme, prev, _| {
            if prev.is_some_and(|prev| prev == theme) {
                return;
            }
            apply_theme(*theme);
            let stored = stored.get_untracked();
            // following the system preference is not an explicit choice
            if stored.is_none() && *theme == Theme::resolve(None, prefers_dark()) {
                return;
            }
            if stored != Some(*theme) {
                set_stored.set(Some(*theme));
            }
        },
        false,
    );
}

#[cfg(feature = "hydrate")]
fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches())
}

#[cfg(feature = "hydrate")]
fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("couldn't apply theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            class="relative overflow-hidden px-3 py-1.5 rounded-md border border-border bg-background transition-all duration-300 hover:scale-105"
            aria-label="Toggle dark mode"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <div class=move || {
                if theme.get().is_dark() {
                    "transition-transform duration-300 rotate-180"
                } else {
                    "transition-transform duration-300 rotate-0"
                }
            }>{move || theme.get().icon()}</div>
        </button>
    }
}
