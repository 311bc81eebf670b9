use leptos::prelude::*;

use crate::{
    content::{self, CertificationEntry, EducationEntry},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{SectionFallback, SectionHeader},
};

const LEARNING_AREAS: [(&str, &str); 4] = [
    (
        "Research & Publications",
        "Active research in zero-knowledge proofs, formal verification, and novel attack vectors",
    ),
    (
        "Conference Participation",
        "Regular attendance at security conferences, workshops, and blockchain summits",
    ),
    (
        "Open Source Contributions",
        "Contributing to security tools, educational resources, and blockchain protocols",
    ),
    (
        "Community Engagement",
        "Creating CTF challenges, mentoring, and sharing knowledge through professional talks",
    ),
];

#[component]
pub fn Education() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::SLOW;

    view! {
        <section id="education" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible delay=stagger.delay(0)>
                        <SectionHeader
                            title="Education & Certifications"
                            subtitle="Academic background and professional certifications in cybersecurity and blockchain technology"
                        />
                    </Reveal>
                    <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                        {content::education()
                            .map(|data| {
                                view! {
                                    <Reveal visible delay=stagger.delay(1) class="mb-16">
                                        <h3 class="text-2xl font-bold mb-6">"🎓 Formal Education"</h3>
                                        <div class="space-y-6">
                                            {data
                                                .education
                                                .iter()
                                                .enumerate()
                                                .map(|(i, entry)| {
                                                    view! {
                                                        <Reveal
                                                            visible
                                                            motion=Motion::Zoom
                                                            delay={stagger.delay(1) + stagger.delay(i)}
                                                        >
                                                            <EducationCard entry />
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                    <Reveal visible delay=stagger.delay(2) class="mb-16">
                                        <h3 class="text-2xl font-bold mb-6">
                                            "🏅 Professional Certifications"
                                        </h3>
                                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                            {data
                                                .certifications
                                                .iter()
                                                .enumerate()
                                                .map(|(i, cert)| {
                                                    view! {
                                                        <Reveal
                                                            visible
                                                            motion=Motion::Zoom
                                                            delay={stagger.delay(2) + Stagger::FAST.delay(i)}
                                                        >
                                                            <CertificationCard cert />
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                }
                            })}
                    </ErrorBoundary>
                    <Reveal visible delay=stagger.delay(3)>
                        <h3 class="text-2xl font-bold mb-4">"📚 Continuous Learning"</h3>
                        <p class="mb-6">
                            "Committed to staying current with the rapidly evolving cybersecurity and blockchain landscape through:"
                        </p>
                        <div class="grid md:grid-cols-2 gap-4">
                            {LEARNING_AREAS
                                .iter()
                                .map(|(title, text)| {
                                    view! {
                                        <div class="bg-brightBlack/30 p-4 rounded-md">
                                            <h5 class="font-medium text-green mb-1">{*title}</h5>
                                            <p class="text-sm">{*text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <article class="p-6 rounded-lg bg-brightBlack/30 border border-muted/30 hover:-translate-y-1 transition-transform">
            <div class="flex flex-wrap justify-between gap-2 mb-2">
                <h4 class="text-xl font-bold">{entry.degree.as_str()}</h4>
                <span class="text-sm text-muted">{entry.period.as_str()}</span>
            </div>
            <div class="mb-3">
                <h5 class="text-purple font-medium">{entry.institution.as_str()}</h5>
                <span class="text-sm text-muted">{entry.location.as_str()}</span>
            </div>
            {entry
                .score
                .as_deref()
                .map(|score| {
                    view! {
                        <div class="mb-3 text-sm">
                            <span class="text-muted mr-2">"CGPA:"</span>
                            <span class="font-bold text-cyan">{score}</span>
                        </div>
                    }
                })}
            <p class="mb-3">{entry.description.as_str()}</p>
            {entry
                .achievements
                .as_deref()
                .map(|achievements| {
                    view! {
                        <div>
                            <h6 class="font-medium mb-1">"Key Highlights:"</h6>
                            <ul class="list-disc pl-5 text-sm space-y-1">
                                {achievements
                                    .iter()
                                    .map(|a| view! { <li>{a.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
        </article>
    }
}

#[component]
fn CertificationCard(cert: &'static CertificationEntry) -> impl IntoView {
    view! {
        <article class="h-full p-5 rounded-lg bg-brightBlack/30 border border-muted/30 hover:-translate-y-1 transition-transform">
            <div class="text-2xl mb-2" aria-hidden="true">"🏅"</div>
            <h4 class="font-bold mb-1">{cert.name.as_str()}</h4>
            <div class="flex justify-between text-sm text-muted mb-2">
                <span>{cert.issuer.as_str()}</span>
                <span>{cert.date.as_str()}</span>
            </div>
            <p class="text-sm">{cert.description.as_str()}</p>
            {cert
                .credential_id
                .as_deref()
                .map(|id| view! { <div class="mt-2 text-xs text-muted">"ID: " {id}</div> })}
        </article>
    }
}
