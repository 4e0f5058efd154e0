mod about;
mod contact;
mod hero;
mod id_card;
mod index;
mod portfolio;
mod services;
mod testimonials;
mod theme_toggle;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use index::IndexPage;
use theme_toggle::provide_theme;
use toast::{provide_toaster, ToastSlot};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("Anand S - {title}") />
        <Meta
            name="description"
            content="Full-stack freelancer helping brands and individuals shine online."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=IndexPage />
            </Routes>
        </Router>
        <ToastSlot />
    }
}
