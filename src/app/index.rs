use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::hero::HeroSection;
use super::id_card::IdCardEntry;
use super::portfolio::{ClientsSection, PortfolioSection};
use super::services::ServicesSection;
use super::testimonials::TestimonialsSection;
use super::theme_toggle::ThemeToggle;
use super::toast::use_toaster;

/// Time the card's unlock animation gets before the gate is swapped out.
const UNLOCK_TRANSITION: Duration = Duration::from_millis(800);
const BRAND: &str = "ANAND S";

fn copyright_year() -> &'static str {
    // BUILD_TIME is RFC 3339, so the year leads
    env!("BUILD_TIME").get(..4).unwrap_or("2024")
}

const PAGE_BACKGROUND: &str = "min-h-screen bg-gradient-to-br from-primary-50 via-background to-accent-purple/5 dark:from-background dark:via-gray-900 dark:to-accent-purple/10 relative";

#[component]
pub fn IndexPage() -> impl IntoView {
    let (is_unlocked, set_is_unlocked) = signal(false);
    let (show_portfolio, set_show_portfolio) = signal(false);
    let toaster = use_toaster();

    let on_unlock = Callback::new(move |_: ()| {
        if is_unlocked.get_untracked() {
            return;
        }
        log::info!("portfolio unlocked");
        set_is_unlocked(true);
        set_timeout(
            move || {
                set_show_portfolio(true);
                toaster.show("Welcome to my portfolio! 🎉");
            },
            UNLOCK_TRANSITION,
        );
    });

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || show_portfolio.get()
            fallback=move || {
                view! {
                    <div class=format!("{PAGE_BACKGROUND} overflow-hidden")>
                        <div class="absolute top-6 right-6 z-50">
                            <ThemeToggle />
                        </div>
                        <IdCardEntry on_unlock is_unlocked />
                    </div>
                }
            }
        >
            <div class=PAGE_BACKGROUND>
                <NavBar />
                <main class="pt-20">
                    <HeroSection />
                    <AboutSection />
                    <ServicesSection />
                    <PortfolioSection />
                    <ClientsSection />
                    <TestimonialsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </Show>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let links = [
        ("#about", "About"),
        ("#services", "Services"),
        ("#portfolio", "Portfolio"),
        ("#contact", "Contact"),
    ];
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-lg border-b border-border">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <a href="#" class="text-2xl font-bold text-primary">
                    {BRAND}
                </a>
                <div class="flex items-center gap-6">
                    {links
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="hidden md:inline text-foreground hover:text-primary transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let socials = [
        ("https://linkedin.com", "LinkedIn"),
        ("https://github.com", "GitHub"),
        ("https://twitter.com", "Twitter"),
    ];
    view! {
        <footer class="bg-card border-t border-border py-12">
            <div class="container mx-auto px-6 text-center">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-2xl font-bold text-primary">{BRAND}</div>
                    <div class="text-muted-foreground">
                        {format!("© {} Anand S. All rights reserved.", copyright_year())}
                    </div>
                    <div class="flex gap-4">
                        {socials
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
