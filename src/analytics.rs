//! Fire-and-forget analytics events.
//!
//! Events are handed to `window.gtag` when the tag script is loaded. Nothing
//! here may fail loudly: a blocked or missing tracker is logged and ignored.

use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    ResumeDownload,
    ProjectClick { project: String },
    ContactFormSubmit,
    SocialMediaClick { platform: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::ResumeDownload => "resume_download",
            AnalyticsEvent::ProjectClick { .. } => "project_click",
            AnalyticsEvent::ContactFormSubmit => "contact_form_submit",
            AnalyticsEvent::SocialMediaClick { .. } => "social_media_click",
        }
    }

    pub fn params(&self) -> Value {
        let (category, label) = match self {
            AnalyticsEvent::ResumeDownload => ("engagement", "CV Download"),
            AnalyticsEvent::ProjectClick { project } => ("engagement", project.as_str()),
            AnalyticsEvent::ContactFormSubmit => ("lead_generation", "Contact Form"),
            AnalyticsEvent::SocialMediaClick { platform } => ("engagement", platform.as_str()),
        };
        json!({
            "event_category": category,
            "event_label": label,
        })
    }

    /// Parameters as the JSON text handed to the browser.
    pub fn payload(&self) -> String {
        self.params().to_string()
    }
}

/// Loader and bootstrap for the gtag snippet.
pub fn gtag_src(id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={id}")
}

pub fn gtag_bootstrap(id: &str) -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];
function gtag(){{dataLayer.push(arguments);}}
gtag('js', new Date());
gtag('config', '{id}', {{ page_title: document.title, page_location: window.location.href }});"
    )
}

pub fn track(event: AnalyticsEvent) {
    #[cfg(feature = "hydrate")]
    if let Err(e) = dispatch::send(&event) {
        log::debug!("analytics event {} dropped: {e}", event.name());
        return;
    }
    log::debug!("analytics event {}", event.name());
}

#[cfg(feature = "hydrate")]
mod dispatch {
    use wasm_bindgen::prelude::*;

    use super::AnalyticsEvent;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = window, js_name = gtag)]
        fn gtag(command: &str, name: &str, params: JsValue) -> Result<(), JsValue>;
    }

    pub fn send(event: &AnalyticsEvent) -> Result<(), String> {
        let params =
            js_sys::JSON::parse(&event.payload()).map_err(|e| format!("{e:?}"))?;
        gtag("event", event.name(), params).map_err(|e| format!("{e:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(AnalyticsEvent::ResumeDownload.name(), "resume_download");
        assert_eq!(
            AnalyticsEvent::ProjectClick {
                project: "YoloRekt".to_string()
            }
            .name(),
            "project_click"
        );
        assert_eq!(AnalyticsEvent::ContactFormSubmit.name(), "contact_form_submit");
        assert_eq!(
            AnalyticsEvent::SocialMediaClick {
                platform: "GitHub".to_string()
            }
            .name(),
            "social_media_click"
        );
    }

    #[test]
    fn test_event_params() {
        let params = AnalyticsEvent::SocialMediaClick {
            platform: "LinkedIn".to_string(),
        }
        .params();
        assert_eq!(params["event_category"], "engagement");
        assert_eq!(params["event_label"], "LinkedIn");

        let params = AnalyticsEvent::ContactFormSubmit.params();
        assert_eq!(params["event_category"], "lead_generation");
        assert_eq!(params["event_label"], "Contact Form");
    }

    #[test]
    fn test_payload_escapes_labels() {
        let event = AnalyticsEvent::ProjectClick {
            project: r#"Nord "v2" </script>"#.to_string(),
        };
        let payload = event.payload();
        assert!(payload.contains(r#"\"v2\""#));
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["event_label"], r#"Nord "v2" </script>"#);
        assert_eq!(parsed["event_category"], "engagement");
    }

    #[test]
    fn test_track_without_tracker_is_silent() {
        track(AnalyticsEvent::ResumeDownload);
    }

    #[test]
    fn test_gtag_snippets() {
        assert_eq!(
            gtag_src("G-TEST"),
            "https://www.googletagmanager.com/gtag/js?id=G-TEST"
        );
        let boot = gtag_bootstrap("G-TEST");
        assert!(boot.contains("gtag('config', 'G-TEST'"));
        assert!(boot.contains("function gtag(){dataLayer.push(arguments);}"));
    }
}
