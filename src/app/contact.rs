use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    analytics::{track, AnalyticsEvent},
    config::SIMULATED_SEND_DELAY,
    contact::{ContactForm, Field},
    content::{self, ContactMethod},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{Glyph, SectionFallback, SectionHeader},
};

#[component]
pub fn Contact() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::SLOW;

    view! {
        <section id="contact" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible delay=stagger.delay(0)>
                        <SectionHeader
                            title="Get In Touch"
                            subtitle="Ready to discuss blockchain security, potential collaborations, or have questions about my work? I'd love to hear from you!"
                        />
                    </Reveal>
                    <div class="grid lg:grid-cols-2 gap-12">
                        <Reveal visible delay=stagger.delay(1)>
                            <h3 class="text-2xl font-bold mb-4">"Let's Connect"</h3>
                            <p class="mb-6">
                                "Whether you're looking for security auditing services, want to discuss research opportunities, or just want to connect with a fellow blockchain security enthusiast, feel free to reach out through any of these channels."
                            </p>
                            <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                                {content::contact_methods()
                                    .map(|methods| {
                                        view! {
                                            <div class="space-y-4 mb-8">
                                                {methods
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(i, method)| {
                                                        view! {
                                                            <Reveal visible delay=stagger.delay(i + 2)>
                                                                <ContactMethodRow method />
                                                            </Reveal>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })}
                            </ErrorBoundary>
                            <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-green">
                                <h4 class="font-medium text-green mb-2">"Availability"</h4>
                                <p class="text-sm">
                                    "Currently open for consulting opportunities, security audits, and speaking engagements. Response time is typically within 24-48 hours."
                                </p>
                            </div>
                        </Reveal>
                        <Reveal visible delay=stagger.delay(2)>
                            <ContactFormView />
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactMethodRow(method: &'static ContactMethod) -> impl IntoView {
    let value = match method.link.as_deref() {
        Some(link) => {
            let external = content::is_external(link);
            view! {
                <a
                    href=link
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="hover:text-cyan transition-colors"
                    on:click=move |_| {
                        if external {
                            track(AnalyticsEvent::SocialMediaClick {
                                platform: method.label.clone(),
                            })
                        }
                    }
                >
                    {method.value.as_str()}
                </a>
            }
            .into_any()
        }
        None => view! { <span>{method.value.as_str()}</span> }.into_any(),
    };
    view! {
        <div class="flex items-center gap-4 hover:-translate-y-0.5 transition-transform" title=method.value.as_str()>
            <span class="w-10 h-10 flex items-center justify-center rounded-full bg-cyan/20 text-cyan text-lg">
                <Glyph icon=method.icon />
            </span>
            <div>
                <div class="text-sm text-muted">{method.label.as_str()}</div>
                {value}
            </div>
        </div>
    }
}

/// The message form. Delivery is simulated: after a fixed delay the send is
/// treated as successful and the form resets.
#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => {
                track(AnalyticsEvent::ContactFormSubmit);
                log::info!("sending contact message from {} <{}>", message.name, message.email);
                set_timeout(
                    move || {
                        form.update(|f| f.complete(Ok(())));
                        if let Err(e) = window()
                            .alert_with_message("Thank you for your message! I'll get back to you soon.")
                        {
                            log::warn!("couldn't show confirmation: {e:?}");
                        }
                    },
                    SIMULATED_SEND_DELAY,
                );
            }
            // the form keeps the error and shows it below the inputs
            Some(Err(e)) => log::debug!("contact form not submitted: {e}"),
            None => {}
        }
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form class="p-6 rounded-lg bg-brightBlack/30 border border-muted/30 space-y-4" on:submit=on_submit>
            <h3 class="text-2xl font-bold mb-2">"Send a Message"</h3>
            <div class="grid md:grid-cols-2 gap-4">
                <FormInput form field=Field::Name kind="text" placeholder="Your full name" />
                <FormInput
                    form
                    field=Field::Email
                    kind="email"
                    placeholder="your.email@example.com"
                />
            </div>
            <FormInput
                form
                field=Field::Subject
                kind="text"
                placeholder="What would you like to discuss?"
            />
            <div class="flex flex-col gap-1">
                <label for="message" class="text-sm font-medium">
                    "Message *"
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    required=true
                    placeholder="Tell me more about your project or question..."
                    class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground"
                    prop:value=move || form.with(|f| f.fields().get(Field::Message).to_string())
                    on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            {move || {
                form.with(|f| f.last_error().map(ToString::to_string))
                    .map(|msg| view! { <p role="alert" class="text-sm text-red">{msg}</p> })
            }}
            <button
                type="submit"
                disabled=submitting
                class="w-full px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-60"
            >
                {move || if submitting() { "⏳ Sending..." } else { "✈ Send Message" }}
            </button>
        </form>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.label().to_lowercase();
    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium">
                {field.label()}
                " *"
            </label>
            <input
                type=kind
                id=id.clone()
                name=id
                required=true
                placeholder=placeholder
                class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground"
                prop:value=move || form.with(|f| f.fields().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
