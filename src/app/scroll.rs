use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::motion::{ScrollThreshold, BACK_TO_TOP_THRESHOLD};

/// Page scroll offset as seen by the components.
///
/// Reads `0.0` until the page has hydrated. The server always renders at the
/// top of the page, and a deep link or restored scroll position must not make
/// the first client render differ from that HTML.
#[derive(Debug, Clone, Copy)]
struct ScrollOffset(Signal<f64>);

impl ScrollOffset {
    fn gated(raw: Signal<f64>, mounted: Signal<bool>) -> Self {
        Self(Signal::derive(move || if mounted.get() { raw.get() } else { 0.0 }))
    }
}

/// Installs the page-wide scroll listener. Call once from the root component;
/// the listener is removed when that owner is disposed.
pub fn provide_scroll_tracker() {
    let (_, y) = use_window_scroll();
    let mounted = RwSignal::new(false);
    // effects only run in the browser, after hydration
    Effect::new(move |_| mounted.set(true));
    provide_context(ScrollOffset::gated(y, mounted.into()));
}

/// `true` while the vertical scroll offset is strictly past `threshold`.
pub fn use_scrolled_past(threshold: ScrollThreshold) -> Signal<bool> {
    let ScrollOffset(offset) = use_context::<ScrollOffset>().unwrap_or_else(|| {
        log::warn!("no scroll tracker in context, attaching a local listener");
        let (_, y) = use_window_scroll();
        let mounted = RwSignal::new(false);
        Effect::new(move |_| mounted.set(true));
        ScrollOffset::gated(y, mounted.into())
    });
    Memo::new(move |_| threshold.is_past(offset.get())).into()
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let shown = use_scrolled_past(BACK_TO_TOP_THRESHOLD);
    view! {
        <Show when=move || shown.get()>
            <button
                class="fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 shadow-lg transition-all duration-200 enter-fade"
                aria-label="Back to top"
                on:click=|_| scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::motion::HEADER_SCROLL_THRESHOLD;

    #[test]
    fn test_offset_held_at_top_until_mounted() {
        Owner::new().with(|| {
            // deep link: the window is already far down when the page loads
            let raw = RwSignal::new(2000.0);
            let mounted = RwSignal::new(false);
            provide_context(ScrollOffset::gated(raw.into(), mounted.into()));

            let back_to_top = use_scrolled_past(BACK_TO_TOP_THRESHOLD);
            let header = use_scrolled_past(HEADER_SCROLL_THRESHOLD);
            assert!(!back_to_top.get_untracked());
            assert!(!header.get_untracked());

            mounted.set(true);
            assert!(back_to_top.get_untracked());
            assert!(header.get_untracked());
        });
    }

    #[test]
    fn test_back_to_top_follows_context_offset() {
        Owner::new().with(|| {
            let raw = RwSignal::new(0.0);
            let mounted = RwSignal::new(true);
            provide_context(ScrollOffset::gated(raw.into(), mounted.into()));
            let shown = use_scrolled_past(BACK_TO_TOP_THRESHOLD);

            assert!(!shown.get_untracked());
            raw.set(500.0);
            assert!(shown.get_untracked());
            raw.set(399.0);
            assert!(!shown.get_untracked());
            raw.set(0.0);
            assert!(!shown.get_untracked());
        });
    }

    #[test]
    fn test_back_to_top_not_rendered_on_server() {
        let html = Owner::new().with(|| {
            let raw = RwSignal::new(2000.0);
            provide_context(ScrollOffset::gated(raw.into(), Signal::stored(false)));
            view! { <BackToTop /> }.to_html()
        });
        assert!(!html.contains("Back to top"));
    }
}
