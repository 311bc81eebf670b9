use leptos::prelude::*;

use crate::{
    content::{self, SkillCategory},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{Glyph, SectionFallback, SectionHeader},
};

#[component]
pub fn Skills() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::FAST;

    view! {
        <section id="skills" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible motion=Motion::Pop delay=stagger.delay(0)>
                        <SectionHeader
                            title="Skills & Expertise"
                            subtitle="Technical skills, certifications, and areas of expertise in blockchain security and beyond"
                        />
                    </Reveal>
                    <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                        {content::skills()
                            .map(|categories| {
                                let count = categories.len();
                                view! {
                                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                        {categories
                                            .iter()
                                            .enumerate()
                                            .map(|(i, category)| {
                                                view! {
                                                    <Reveal
                                                        visible
                                                        motion=Motion::Pop
                                                        delay=stagger.delay(i + 1)
                                                    >
                                                        <SkillCard category index=i visible />
                                                    </Reveal>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <Reveal
                                        visible
                                        motion=Motion::Pop
                                        delay=stagger.delay(count + 1)
                                        class="mt-12"
                                    >
                                        <div class="max-w-3xl mx-auto text-center bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                                            <h3 class="text-xl font-bold mb-3">"Continuous Learning"</h3>
                                            <p>
                                                "Currently expanding expertise in advanced cryptography, ZK-STARKs, and cutting-edge blockchain security research. Always exploring new vulnerabilities, attack vectors, and defensive strategies to stay ahead in the rapidly evolving blockchain security landscape."
                                            </p>
                                        </div>
                                    </Reveal>
                                }
                            })}
                    </ErrorBoundary>
                </Reveal>
            </div>
        </section>
    }
}

/// Skill items cascade within their card, offset by the card's own position.
#[component]
fn SkillCard(category: &'static SkillCategory, index: usize, visible: Signal<bool>) -> impl IntoView {
    view! {
        <article class="h-full p-6 rounded-lg bg-brightBlack/30 border border-muted/30 hover:-translate-y-1 transition-transform">
            <div
                class="flex items-center gap-3 mb-4 pb-3 border-b-2"
                style=format!("border-color: {};", category.color)
            >
                <span class="text-2xl">
                    <Glyph icon=category.icon />
                </span>
                <h3 class="text-lg font-bold">{category.title.as_str()}</h3>
            </div>
            <div class="space-y-2">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        view! {
                            <Reveal
                                visible
                                motion=Motion::Nudge
                                delay=Stagger::nested((Stagger::FAST, index), (Stagger::SKILL, j))
                                class="flex items-center gap-2 text-sm hover:translate-x-1 transition-transform"
                            >
                                <span
                                    class="inline-block w-2 h-2 rounded-full"
                                    style=format!("background-color: {};", category.color)
                                ></span>
                                {skill.as_str()}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
