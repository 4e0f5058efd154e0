use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        icon: "👤",
        title: "LinkedIn Profile Optimization",
        description: "Transform your LinkedIn presence with strategic profile optimization and compelling content.",
        details: "Complete profile makeover, keyword optimization, compelling headlines, and professional summary writing.",
    },
    Service {
        icon: "📈",
        title: "LinkedIn Branding & Management",
        description: "Build your personal brand and grow your network with consistent, engaging content.",
        details: "Content strategy, post scheduling, engagement management, and network growth tactics.",
    },
    Service {
        icon: "✍️",
        title: "Technical Writing",
        description: "High-quality blogs, documentation, and ghostwriting for technical and business content.",
        details: "Blog posts, technical documentation, whitepapers, case studies, and thought leadership articles.",
    },
    Service {
        icon: "💻",
        title: "Website Development & Maintenance",
        description: "Modern, responsive websites built with the latest technologies and best practices.",
        details: "Custom web development, responsive design, performance optimization, and ongoing maintenance.",
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="py-20 px-6 bg-muted/30">
            <div class="container mx-auto max-w-6xl">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">"Services"</h2>

                <div class="grid md:grid-cols-2 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <div
                                    class="service-card p-8 group cursor-pointer rounded-xl border border-border bg-card"
                                    style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                                >
                                    <div class="text-4xl mb-4 group-hover:animate-bounce">
                                        {service.icon}
                                    </div>
                                    <h3 class="text-xl font-semibold mb-3">{service.title}</h3>
                                    <p class="text-muted-foreground mb-4">{service.description}</p>

                                    <div class="opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                        <div class="border-t border-border pt-4 mt-4">
                                            <p class="text-sm text-muted-foreground mb-4">
                                                {service.details}
                                            </p>
                                            <a
                                                href="#contact"
                                                class="inline-block text-sm px-3 py-1.5 rounded-md border border-border hover:bg-muted"
                                            >
                                                "Learn More"
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
