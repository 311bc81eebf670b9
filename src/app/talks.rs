use leptos::prelude::*;

use crate::{
    content::{self, TalkEntry},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{SectionFallback, SectionHeader, Tag},
};

const SPEAKING_TOPICS: [&str; 8] = [
    "Smart Contract Security",
    "Zero-Knowledge Proofs",
    "DeFi Security",
    "Formal Verification",
    "Blockchain Architecture",
    "Security Auditing",
    "CTF & Education",
    "Cryptography",
];

#[component]
pub fn Talks() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::SLOW;
    // after the header, the stats row and every card
    let cta_delay = stagger.delay(content::talks().map(|t| t.len()).unwrap_or(0) + 2);

    view! {
        <section id="talks" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible delay=stagger.delay(0)>
                        <SectionHeader
                            title="Professional Talks & Speaking"
                            subtitle="Sharing knowledge and insights with the global blockchain security community through conferences, workshops, and educational events"
                        />
                    </Reveal>
                    <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                        {content::talks()
                            .map(|talks| {
                                let stats = [
                                    (format!("{}+", talks.len()), "Speaking Engagements"),
                                    ("1000+".to_string(), "Audience Reached"),
                                    ("5".to_string(), "Countries"),
                                    ("10+".to_string(), "Topics Covered"),
                                ];
                                view! {
                                    <Reveal
                                        visible
                                        delay=stagger.delay(1)
                                        class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12"
                                    >
                                        {stats
                                            .into_iter()
                                            .map(|(number, label)| {
                                                view! {
                                                    <div class="text-center p-4 rounded-lg bg-brightBlack/30">
                                                        <div class="text-3xl font-bold text-cyan">{number}</div>
                                                        <div class="text-sm text-muted">{label}</div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </Reveal>
                                    <div class="grid md:grid-cols-2 gap-6">
                                        {talks
                                            .iter()
                                            .enumerate()
                                            .map(|(i, talk)| {
                                                view! {
                                                    <Reveal
                                                        visible
                                                        motion=Motion::Zoom
                                                        delay=stagger.delay(i + 2)
                                                    >
                                                        <TalkCard talk />
                                                    </Reveal>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    </ErrorBoundary>
                    <Reveal visible delay=cta_delay class="mt-16">
                        <SpeakingCta />
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn TalkCard(talk: &'static TalkEntry) -> impl IntoView {
    let color = talk.category.color();
    view! {
        <article class=if talk.featured {
            "talk-card featured h-full p-6 rounded-lg bg-brightBlack/30 border-2 border-yellow/60 hover:-translate-y-1 transition-transform"
        } else {
            "talk-card h-full p-6 rounded-lg bg-brightBlack/30 border border-muted/30 hover:-translate-y-1 transition-transform"
        }>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-2">
                    <span class="text-xl" aria-hidden="true">"🎤"</span>
                    <span class="text-sm font-medium" style=format!("color: {color};")>
                        {talk.category.label()}
                    </span>
                </div>
                {talk
                    .featured
                    .then(|| {
                        view! {
                            <span class="px-2 py-0.5 text-xs rounded-full bg-yellow/20 text-yellow border border-yellow/30">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <h3 class="text-xl font-bold mb-2">{talk.title.as_str()}</h3>
            <div class="mb-3">
                <strong>{talk.event.as_str()}</strong>
                <div class="text-sm text-muted flex gap-4">
                    <span>"📅 " {talk.date.as_str()}</span>
                    <span>"📍 " {talk.location.as_str()}</span>
                </div>
            </div>
            <p class="text-sm leading-relaxed mb-4">{talk.description.as_str()}</p>
            <div class="mb-3">
                <h4 class="text-sm font-medium mb-2">"Topics Covered:"</h4>
                <div>
                    {talk.topics.iter().map(|t| view! { <Tag text=t.as_str() /> }).collect_view()}
                </div>
            </div>
            {talk
                .audience
                .as_deref()
                .map(|audience| {
                    view! {
                        <div class="text-sm mb-3">
                            <strong>"Audience:"</strong>
                            " "
                            {audience}
                        </div>
                    }
                })}
            <div class="flex gap-4 text-sm">
                {talk
                    .video_url
                    .as_deref()
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="text-cyan hover:underline">
                                "↗ Watch Recording"
                            </a>
                        }
                    })}
                {talk
                    .slides_url
                    .as_deref()
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="text-cyan hover:underline">
                                "↗ View Slides"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[component]
fn SpeakingCta() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto text-center bg-brightBlack/30 p-8 rounded-lg border border-muted/30">
            <h3 class="text-2xl font-bold mb-4">"Speaking Opportunities"</h3>
            <p class="mb-6">
                "Interested in having me speak at your conference, workshop, or event? I'm passionate about sharing knowledge on blockchain security, smart contract auditing, and zero-knowledge proofs."
            </p>
            <h4 class="font-medium mb-3">"Available Speaking Topics:"</h4>
            <div class="mb-6">
                {SPEAKING_TOPICS.iter().map(|t| view! { <Tag text=*t /> }).collect_view()}
            </div>
            <a
                href="#contact"
                class="inline-block px-6 py-3 rounded-md font-medium bg-purple/20 hover:bg-purple/30 text-purple border border-purple/30 transition-all duration-200"
            >
                "🎤 Invite Me to Speak"
            </a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_talks_render_with_badges_and_count() {
        let html = Owner::new().with(|| view! { <Talks /> }.to_html());
        let talks = content::talks().unwrap();
        for talk in talks {
            assert!(html.contains(talk.title.as_str()), "missing {}", talk.title);
            assert!(html.contains(talk.event.as_str()));
        }
        assert_eq!(html.matches(">Featured<").count(), 2);
        assert!(html.contains(&format!("{}+", talks.len())));
        assert!(html.contains("color: #f093fb;"));
    }

    #[test]
    fn test_cta_follows_last_card() {
        let html = Owner::new().with(|| view! { <Talks /> }.to_html());
        let talks = content::talks().unwrap();
        let last_card = format!(
            "transition-delay: {}ms;",
            Stagger::SLOW.delay(talks.len() + 1).as_millis()
        );
        let cta = format!(
            "transition-delay: {}ms;",
            Stagger::SLOW.delay(talks.len() + 2).as_millis()
        );
        let card_at = html.find(&last_card).expect("last card delay");
        let cta_at = html.find(&cta).expect("cta delay");
        assert!(cta_at > card_at);
        assert!(html[cta_at..].contains("Invite Me to Speak"));
    }
}
