use leptos::{html, prelude::*};

use crate::{
    analytics::{track, AnalyticsEvent},
    config::{PROFILE_IMAGE_PATH, RESUME_PATH},
    content::{self, Profile},
};

use super::section::{Glyph, SectionFallback};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex flex-col justify-center relative pt-24">
            <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                {content::profile().map(|profile| view! { <HeroContent profile /> })}
            </ErrorBoundary>
            <div class="absolute bottom-8 inset-x-0 flex flex-col items-center text-sm text-muted enter-fade delay-1500">
                <div class="w-6 h-10 rounded-full border-2 border-muted flex justify-center animate-bounce">
                    <div class="w-1 h-2 mt-2 rounded-full bg-muted"></div>
                </div>
                <p class="mt-2">"Scroll to explore"</p>
            </div>
        </section>
    }
}

#[component]
fn HeroContent(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="mx-auto max-w-7xl px-4 grid lg:grid-cols-2 gap-12 items-center">
            <div class="enter-up">
                <h1 class="text-4xl lg:text-5xl font-bold mb-4 enter-up delay-200">
                    "Hi, I'm " <span class="text-cyan">{profile.name.as_str()}</span>
                </h1>
                <h2 class="text-2xl text-purple mb-6 enter-up delay-400">{profile.role.as_str()}</h2>
                <p class="text-lg leading-relaxed mb-8 enter-up delay-600">
                    {profile.summary.as_str()}
                </p>
                <div class="flex flex-wrap gap-4 mb-8 enter-up delay-800">
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=RESUME_PATH
                        download=""
                        class="px-6 py-3 rounded-md font-medium border border-muted hover:border-foreground transition-all duration-200"
                        on:click=|_| track(AnalyticsEvent::ResumeDownload)
                    >
                        "⬇ Download Resume"
                    </a>
                </div>
                <div class="flex gap-4 text-2xl enter-up delay-1000">
                    {profile
                        .socials
                        .iter()
                        .map(|link| {
                            let external = link.is_external();
                            view! {
                                <a
                                    href=link.url.as_str()
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    aria-label=link.label.as_str()
                                    class="hover:text-cyan transition-colors"
                                    on:click=move |_| {
                                        track(AnalyticsEvent::SocialMediaClick {
                                            platform: link.label.clone(),
                                        })
                                    }
                                >
                                    <Glyph icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex justify-center enter-right delay-400">
                <ProfileImage alt=format!("{} - {}", profile.name, profile.role) />
            </div>
        </div>
    }
}

/// Profile photo that swaps to a decorative placeholder when the image is
/// missing, including failures that happened before hydration.
#[component]
fn ProfileImage(alt: String) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                log::warn!("profile image failed to load before hydration");
                set_failed.set(true);
            }
        }
    });

    view! {
        <div class="w-72 h-72 lg:w-96 lg:h-96 rounded-full overflow-hidden border-4 border-cyan/30 shadow-2xl">
            <Show
                when=move || !failed.get()
                fallback=|| {
                    view! {
                        <div class="w-full h-full flex items-center justify-center gap-6 text-6xl bg-brightBlack/30">
                            <span class="animate-float">"🔐"</span>
                            <span class="animate-float delay-1000">"⛓️"</span>
                            <span class="animate-float delay-2000">"🛡️"</span>
                        </div>
                    }
                }
            >
                <img
                    node_ref=img_ref
                    src=PROFILE_IMAGE_PATH
                    alt=alt.clone()
                    class="w-full h-full object-cover hover:scale-105 transition-transform duration-300"
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}
