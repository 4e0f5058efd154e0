use leptos::prelude::*;

static SKILLS: [&str; 8] = [
    "HTML",
    "SEO",
    "LinkedIn",
    "WordPress",
    "Python",
    "React",
    "TypeScript",
    "Node.js",
];

static STATS: [(&str, &str); 2] = [("50+", "Projects Completed"), ("3+", "Years Experience")];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">"Who Am I?"</h2>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center">
                        <div class="relative">
                            <div class="w-80 h-80 bg-gradient-to-br from-primary-200 to-primary-400 rounded-2xl flex items-center justify-center shadow-2xl">
                                <div class="w-64 h-64 bg-gradient-to-br from-gray-300 to-gray-400 rounded-xl flex items-center justify-center">
                                    <span class="text-gray-600 text-2xl font-semibold">
                                        "ANAND S"
                                    </span>
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-12 h-12 bg-accent-warm rounded-full animate-glow" />
                            <div class="absolute -bottom-4 -left-4 w-8 h-8 bg-accent-purple rounded-full animate-float" />
                        </div>
                    </div>

                    <div>
                        <p class="text-lg md:text-xl text-muted-foreground leading-relaxed mb-8">
                            "I'm a full-stack freelancer who helps professionals and startups grow online through smart branding, content, and tech. I'm passionate about delivering clean, scalable digital results."
                        </p>

                        <div class="mb-8">
                            <h3 class="text-xl font-semibold mb-4">"Skills & Technologies"</h3>
                            <div class="flex flex-wrap gap-3">
                                {SKILLS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <span
                                                class="skill-tag px-4 py-2 text-sm font-medium rounded-full bg-secondary text-secondary-foreground"
                                                style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                                            >
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="grid grid-cols-2 gap-6">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="text-center p-4 bg-card rounded-lg border">
                                            <div class="text-2xl font-bold text-primary mb-2">
                                                {*value}
                                            </div>
                                            <div class="text-sm text-muted-foreground">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
