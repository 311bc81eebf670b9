use leptos::prelude::*;

use crate::{
    analytics::{track, AnalyticsEvent},
    content::{self, ProjectEntry},
    motion::{Motion, SensorOptions, Stagger},
};

use super::{
    reveal::{use_reveal, Reveal},
    section::{Glyph, SectionFallback, SectionHeader, Tag},
};

#[component]
pub fn Projects() -> impl IntoView {
    let (node_ref, visible) = use_reveal(SensorOptions::default());
    let stagger = Stagger::FAST;

    view! {
        <section id="projects" class="py-24">
            <div node_ref=node_ref class="mx-auto max-w-7xl px-4">
                <Reveal visible motion=Motion::Fade>
                    <Reveal visible delay=stagger.delay(0)>
                        <SectionHeader
                            title="Featured Work & Projects"
                            subtitle="Selected security audits, research projects, and contributions to the blockchain security ecosystem"
                        />
                    </Reveal>
                    <ErrorBoundary fallback=|errors| view! { <SectionFallback errors /> }>
                        {content::projects()
                            .map(|projects| {
                                view! {
                                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                        {projects
                                            .iter()
                                            .enumerate()
                                            .map(|(i, project)| {
                                                view! {
                                                    <Reveal visible delay=stagger.delay(i + 1)>
                                                        <ProjectCard project />
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
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <article class=if project.featured {
            "project-card featured h-full flex flex-col p-6 rounded-lg bg-brightBlack/30 border-2 border-cyan/50"
        } else {
            "project-card h-full flex flex-col p-6 rounded-lg bg-brightBlack/30 border border-muted/30"
        }>
            <div class="flex items-center gap-3 mb-4">
                <span class="text-2xl">
                    <Glyph icon=project.category.icon() />
                </span>
                <span class="text-xs uppercase tracking-wide text-purple">
                    {project.category.label()}
                </span>
            </div>
            <div class="flex-grow">
                <h3 class="text-xl font-bold mb-2">{project.title.as_str()}</h3>
                <p class="text-sm leading-relaxed mb-4">{project.description.as_str()}</p>
                <div class="mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <Tag text=tech.as_str() /> })
                        .collect_view()}
                </div>
            </div>
            <div class="flex flex-wrap gap-4 text-sm">
                {project
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-cyan hover:underline"
                                on:click=move |_| {
                                    track(AnalyticsEvent::ProjectClick {
                                        project: project.title.clone(),
                                    })
                                }
                            >
                                "↗ "
                                {link.label.as_str()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    fn render() -> String {
        Owner::new().with(|| view! { <Projects /> }.to_html())
    }

    #[test]
    fn test_projects_render_in_source_order() {
        let html = render();
        let projects = content::projects().expect("projects should load");

        let mut cursor = 0;
        for project in projects {
            let title = escaped(&project.title);
            let at = html[cursor..]
                .find(&title)
                .unwrap_or_else(|| panic!("{} missing or out of order", project.title));
            cursor += at + title.len();
        }
    }

    #[test]
    fn test_project_cards_are_complete() {
        let html = render();
        for project in content::projects().unwrap() {
            assert!(html.contains(&escaped(&project.description)));
            for tech in &project.technologies {
                assert!(html.contains(&escaped(tech)), "missing tag {tech}");
            }
            for link in &project.links {
                assert!(html.contains(&link.url), "missing link {}", link.url);
                assert!(html.contains(&escaped(&link.label)));
            }
        }
    }

    #[test]
    fn test_content_present_while_hidden() {
        let html = render();
        // nothing has intersected on the server, so every card is in its hidden pose
        assert!(html.contains("opacity: 0;"));
        assert!(!html.contains("opacity: 1;"));
        assert!(html.contains("PLONKish Verifiers Research"));
    }
}
