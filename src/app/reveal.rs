use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{reveal_style, Motion, SensorOptions, VisibilityLatch};

/// Attaches a visibility sensor to the returned node.
///
/// The signal starts `false` and follows the latch rules in
/// [`VisibilityLatch`]. Once a trigger-once sensor fires, the observer is
/// disconnected. Browsers without `IntersectionObserver` get `true` right away.
pub fn use_reveal(options: SensorOptions) -> (NodeRef<html::Div>, Signal<bool>) {
    let target = NodeRef::<html::Div>::new();
    let latch = StoredValue::new(VisibilityLatch::new(options));
    let (visible, set_visible) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let changed = latch
                    .try_update_value(|l| {
                        l.observe(entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .unwrap_or(false);
                if changed {
                    set_visible.set(latch.with_value(VisibilityLatch::is_visible));
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![options.threshold]),
    );

    Effect::new(move |_| {
        if !intersection_observer_supported() {
            log::debug!("IntersectionObserver unavailable, showing content");
            latch.update_value(VisibilityLatch::force_visible);
            set_visible.set(true);
        }
    });

    Effect::new(move |_| {
        if visible.get() && latch.with_value(VisibilityLatch::is_settled) {
            stop();
        }
    });

    (target, visible.into())
}

#[cfg(feature = "hydrate")]
fn intersection_observer_supported() -> bool {
    window().get("IntersectionObserver").is_some()
}

#[cfg(not(feature = "hydrate"))]
fn intersection_observer_supported() -> bool {
    true
}

/// Wraps children in an element that animates from the hidden to the visible
/// pose of `motion` whenever `visible` flips. The children are always rendered.
#[component]
pub fn Reveal(
    visible: Signal<bool>,
    #[prop(default = Motion::FadeUp)] motion: Motion,
    #[prop(optional)] delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class
            data-reveal=""
            style=move || reveal_style(motion, visible.get(), delay)
        >
            {children()}
        </div>
    }
}
