mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod scroll;
mod section;
mod skills;
mod talks;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    analytics::{gtag_bootstrap, gtag_src},
    config::analytics_id,
    content,
};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use scroll::{provide_scroll_tracker, BackToTop};
use skills::Skills;
use talks::Talks;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/razzor-portfolio.css" />
                // without scripts nothing ever intersects, so show every section as is
                <noscript>
                    <style>"[data-reveal] { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_scroll_tracker();

    let (title, description) = content::profile()
        .map(|p| (format!("{} - {}", p.name, p.role), p.summary.clone()))
        .unwrap_or_else(|_| ("Portfolio".to_string(), String::new()));

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Analytics />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
        </Router>
    }
}

/// Every section of the page, in reading order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Experience />
        <Education />
        <Projects />
        <Skills />
        <Talks />
        <Contact />
    }
}

/// gtag loader. The scripts live in `<head>` for as long as the app is mounted
/// and are only emitted when a measurement id was configured.
#[component]
fn Analytics() -> impl IntoView {
    analytics_id().map(|id| {
        view! {
            <Script async_="true" src=gtag_src(id) />
            <Script>{gtag_bootstrap(id)}</Script>
        }
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    fn assert_has(html: &str, text: &str) {
        assert!(html.contains(&escaped(text)), "missing {text:?}");
    }

    #[test]
    fn test_home_page_has_all_content_before_reveal() {
        let html = Owner::new().with(|| view! { <HomePage /> }.to_html());

        // nothing has been revealed on the server
        assert!(html.matches("opacity: 0;").count() > 50);
        assert!(!html.contains("opacity: 1;"));

        for anchor in [
            "home",
            "about",
            "experience",
            "education",
            "projects",
            "skills",
            "talks",
            "contact",
        ] {
            assert!(html.contains(&format!(r#"id="{anchor}""#)), "missing #{anchor}");
        }

        let profile = content::profile().unwrap();
        assert_has(&html, &profile.name);
        assert_has(&html, &profile.summary);

        for role in content::experience().unwrap() {
            assert_has(&html, &role.title);
            assert_has(&html, &role.company);
            for item in &role.responsibilities {
                assert_has(&html, item);
            }
        }

        let education = content::education().unwrap();
        for entry in &education.education {
            assert_has(&html, &entry.degree);
            for achievement in entry.achievements.iter().flatten() {
                assert_has(&html, achievement);
            }
        }
        for cert in &education.certifications {
            assert_has(&html, &cert.name);
        }

        for category in content::skills().unwrap() {
            assert_has(&html, &category.title);
            for skill in &category.skills {
                assert_has(&html, skill);
            }
        }

        for method in content::contact_methods().unwrap() {
            assert_has(&html, &method.value);
        }
        assert_has(&html, "Companies Founded");
        assert_has(&html, "Send Message");
    }
}
