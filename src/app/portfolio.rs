use leptos::prelude::*;

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    link: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "SaaS Founder Personal Brand",
        summary: "Rebuilt a founder's LinkedIn presence and content calendar, tripling inbound leads in one quarter.",
        tags: &["LinkedIn", "Content Strategy"],
        link: "#contact",
    },
    Project {
        title: "Boutique Agency Website",
        summary: "Responsive marketing site with a headless CMS so the team can publish without a developer.",
        tags: &["React", "TypeScript", "CMS"],
        link: "#contact",
    },
    Project {
        title: "Developer Docs Overhaul",
        summary: "Restructured API documentation and wrote getting-started guides for an open-source SDK.",
        tags: &["Technical Writing", "Docs"],
        link: "#contact",
    },
    Project {
        title: "E-commerce SEO Audit",
        summary: "Technical SEO fixes and content rewrites that lifted organic traffic for a WordPress store.",
        tags: &["SEO", "WordPress"],
        link: "#contact",
    },
];

static CLIENTS: [&str; 6] = [
    "Northwind",
    "Brightpath",
    "Lumen Labs",
    "Cedar & Co",
    "Orbitly",
    "Pixelcraft",
];

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id="portfolio" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">"Portfolio"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="portfolio-card rounded-xl border border-border bg-card overflow-hidden group">
                                    <div class="h-40 bg-gradient-to-br from-primary-200 to-accent-purple/40 group-hover:scale-105 transition-transform duration-500" />
                                    <div class="p-6">
                                        <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                                        <p class="text-muted-foreground mb-4">{project.summary}</p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-3 py-1 text-xs rounded-full bg-secondary text-secondary-foreground">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a
                                            href=project.link
                                            class="text-primary hover:underline font-medium"
                                        >
                                            "Start a similar project →"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ClientsSection() -> impl IntoView {
    view! {
        <section class="py-12 px-6 bg-muted/30">
            <div class="container mx-auto max-w-6xl text-center">
                <h3 class="text-sm uppercase tracking-widest text-muted-foreground mb-8">
                    "Trusted by teams at"
                </h3>
                <div class="flex flex-wrap justify-center gap-x-12 gap-y-6">
                    {CLIENTS
                        .iter()
                        .map(|client| {
                            view! {
                                <span class="text-xl font-semibold text-muted-foreground/70 hover:text-primary transition-colors">
                                    {*client}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
