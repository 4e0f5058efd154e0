use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center px-6 relative">
            <div class="text-center max-w-4xl mx-auto">
                <h1 class="text-5xl md:text-7xl font-bold text-foreground mb-6 leading-tight">
                    "Helping Brands & "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary-500 to-accent-purple">
                        "Individuals"
                    </span> " Shine Online"
                </h1>
                <p class="text-xl md:text-2xl text-muted-foreground mb-12 leading-relaxed">
                    "From LinkedIn growth to clean websites — I blend strategy, writing, and code."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#portfolio"
                        class="text-lg px-8 py-4 rounded-md text-white bg-gradient-to-r from-primary-500 to-primary-600 hover:from-primary-600 hover:to-primary-700 transform hover:scale-105 transition-all duration-300"
                    >
                        "View Portfolio"
                    </a>
                    <a
                        href="#contact"
                        class="text-lg px-8 py-4 rounded-md border-2 border-border hover:bg-primary-50 dark:hover:bg-primary-950 transform hover:scale-105 transition-all duration-300"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>

            <div class="absolute top-1/4 left-10 w-20 h-20 bg-gradient-to-br from-primary-400 to-accent-purple rounded-full opacity-20 animate-float" />
            <div
                class="absolute bottom-1/4 right-10 w-16 h-16 bg-gradient-to-br from-accent-emerald to-primary-400 rounded-full opacity-20 animate-float"
                style="animation-delay: 1s"
            />
            <div
                class="absolute top-1/2 left-1/4 w-12 h-12 bg-gradient-to-br from-accent-warm to-primary-500 rounded-full opacity-20 animate-float"
                style="animation-delay: 2s"
            />
        </section>
    }
}
