use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Anand rewrote my LinkedIn profile in a week and I started getting recruiter messages the next Monday.",
        name: "Priya R.",
        role: "Product Manager",
    },
    Testimonial {
        quote: "Clear communication, fast turnaround, and a website our whole team is proud to share.",
        name: "Marcus L.",
        role: "Agency Founder",
    },
    Testimonial {
        quote: "Our docs finally answer the questions users actually ask. Support tickets dropped noticeably.",
        name: "Elena K.",
        role: "Developer Advocate",
    },
];

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">"What Clients Say"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="p-8 rounded-xl border border-border bg-card shadow-sm">
                                    <blockquote class="text-muted-foreground italic mb-6">
                                        "“" {t.quote} "”"
                                    </blockquote>
                                    <figcaption>
                                        <div class="font-semibold">{t.name}</div>
                                        <div class="text-sm text-muted-foreground">{t.role}</div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
