use leptos::{ev::SubmitEvent, prelude::*};

use super::toast::use_toaster;
use crate::contact::ContactForm;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<String>);
    let toaster = use_toaster();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::validate) {
            Ok(()) => {
                log::info!("contact form submitted");
                set_error(None);
                form.set(ContactForm::default());
                toaster.show("Thanks for reaching out! I'll get back to you soon.");
            }
            Err(e) => set_error(Some(e.to_string())),
        }
    };

    let input_class = "w-full px-4 py-3 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary";

    view! {
        <section id="contact" class="py-20 px-6 bg-muted/30">
            <div class="container mx-auto max-w-2xl">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-4">"Let's Work Together"</h2>
                <p class="text-center text-muted-foreground mb-12">
                    "Have a project in mind? Send me a message and I'll reply within two business days."
                </p>
                <form class="space-y-6" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Your name"
                        class=input_class
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        inputmode="email"
                        placeholder="you@example.com"
                        class=input_class
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <textarea
                        rows="5"
                        placeholder="Tell me about your project"
                        class=input_class
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    {move || {
                        error
                            .get()
                            .map(|e| {
                                view! {
                                    <p role="alert" class="text-sm text-red-500">
                                        {e}
                                    </p>
                                }
                            })
                    }}
                    <button
                        type="submit"
                        class="w-full py-3 rounded-md text-white font-medium bg-gradient-to-r from-primary-500 to-primary-600 hover:from-primary-600 hover:to-primary-700 transition-all duration-300"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
