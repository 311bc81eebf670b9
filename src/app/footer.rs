use leptos::prelude::*;

use crate::{
    analytics::{track, AnalyticsEvent},
    config::copyright_year,
    content,
};

use super::{scroll::scroll_to_top, section::Glyph};

const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

const SERVICES: [&str; 4] = [
    "Smart Contract Audits",
    "Security Consulting",
    "Protocol Reviews",
    "Formal Verification",
];

const EXPERTISE: [&str; 4] = [
    "Zero Knowledge Proofs",
    "DeFi Security",
    "Layer 2 Solutions",
    "Cryptography",
];

#[component]
pub fn Footer() -> impl IntoView {
    let profile = content::profile().ok();
    let name = profile.map(|p| p.name.as_str()).unwrap_or_default();

    view! {
        <footer class="mt-16 border-t border-muted/30 bg-brightBlack/20">
            <div class="mx-auto max-w-7xl px-4 py-12">
                <div class="grid lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-1">
                        <h3 class="text-xl font-bold mb-3">{name}</h3>
                        {profile
                            .map(|p| {
                                view! {
                                    <p class="text-sm mb-4">{p.tagline.as_str()}</p>
                                    <div class="flex gap-4 text-xl">
                                        {p
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
                                                        class="hover:text-cyan hover:-translate-y-1 transition-all"
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
                                }
                            })}
                    </div>
                    <FooterList title="Quick Links">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <li>
                                        <a href=*href class="hover:text-cyan">
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </FooterList>
                    <FooterList title="Services">
                        {SERVICES.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </FooterList>
                    <FooterList title="Expertise">
                        {EXPERTISE.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </FooterList>
                </div>
                <div class="flex items-center justify-between mt-10 pt-6 border-t border-muted/30 text-sm">
                    <p>
                        "© " {copyright_year()} " " {name} ". Made with "
                        <span class="inline-block text-red animate-pulse">"♥"</span>
                        " for blockchain security."
                    </p>
                    <button
                        class="w-10 h-10 rounded-full border border-muted hover:-translate-y-0.5 transition-transform"
                        aria-label="Back to top"
                        on:click=|_| scroll_to_top()
                    >
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterList(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-bold mb-3">{title}</h4>
            <ul class="space-y-2 text-sm">{children()}</ul>
        </div>
    }
}
