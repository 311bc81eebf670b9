use leptos::prelude::*;

use crate::{
    content::{self, ExperienceEntry},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{SectionFallback, SectionHeader},
};

#[component]
pub fn Experience() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::SLOW;

    view! {
        <section id="experience" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-4xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible motion=Motion::SlideRight delay=stagger.delay(0)>
                        <SectionHeader
                            title="Professional Experience"
                            subtitle="My journey through various roles in blockchain security and cybersecurity education"
                        />
                    </Reveal>
                    <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                        {content::experience()
                            .map(|entries| {
                                view! {
                                    <div class="relative border-l-2 border-muted/40 ml-4 space-y-10">
                                        {entries
                                            .iter()
                                            .enumerate()
                                            .map(|(i, entry)| {
                                                view! {
                                                    <Reveal
                                                        visible
                                                        motion=Motion::SlideRight
                                                        delay=stagger.delay(i + 1)
                                                    >
                                                        <TimelineItem entry />
                                                    </Reveal>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    </ErrorBoundary>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <article class=if entry.current {
            "timeline-item current relative pl-8"
        } else {
            "timeline-item relative pl-8"
        }>
            <span
                class="absolute -left-3 top-1 w-6 h-6 rounded-full bg-background border-2 border-cyan flex items-center justify-center text-xs"
                aria-hidden="true"
            >
                "💼"
            </span>
            <div class="mb-3">
                <h3 class="text-xl font-bold">{entry.title.as_str()}</h3>
                <div class="text-purple font-medium">{entry.company.as_str()}</div>
                <div class="text-sm text-muted flex items-center gap-2">
                    "📅 " {entry.period.as_str()}
                    {entry
                        .current
                        .then(|| {
                            view! {
                                <span class="px-2 py-0.5 text-xs rounded-full bg-green/20 text-green border border-green/30">
                                    "Current"
                                </span>
                            }
                        })}
                </div>
            </div>
            <ul class="list-disc pl-5 space-y-1 text-base">
                {entry
                    .responsibilities
                    .iter()
                    .map(|item| view! { <li>{item.as_str()}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
