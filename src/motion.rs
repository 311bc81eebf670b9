//! Scroll-driven reveal logic shared by the section components.
//!
//! Everything here is plain data so it behaves the same on the server, in the
//! browser, and in tests. The components in `app::reveal` and `app::scroll`
//! feed it viewport and scroll measurements.

use std::time::Duration;

/// Header switches to its compact style past this offset.
pub const HEADER_SCROLL_THRESHOLD: ScrollThreshold = ScrollThreshold::new(50.0);
/// The floating back-to-top button appears past this offset.
pub const BACK_TO_TOP_THRESHOLD: ScrollThreshold = ScrollThreshold::new(400.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorOptions {
    pub trigger_once: bool,
    /// Fraction of the element that must be inside the viewport, `0.0..=1.0`.
    pub threshold: f64,
}

impl Default for SensorOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            threshold: 0.1,
        }
    }
}

impl SensorOptions {
    pub fn continuous(threshold: f64) -> Self {
        Self {
            trigger_once: false,
            threshold,
        }
    }
}

/// Visibility state of one observed element.
///
/// With `trigger_once` the state is a latch: it starts hidden, flips to visible
/// the first time the element crosses the threshold and then ignores every
/// later observation.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    options: SensorOptions,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(options: SensorOptions) -> Self {
        Self {
            options,
            visible: false,
        }
    }

    pub fn options(&self) -> SensorOptions {
        self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// No further observations can change the state.
    pub fn is_settled(&self) -> bool {
        self.options.trigger_once && self.visible
    }

    /// Feeds one intersection measurement. Returns `true` when the visible
    /// state changed.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        let now = is_intersecting && ratio >= self.options.threshold;
        let changed = now != self.visible;
        self.visible = now;
        changed
    }

    /// Used when the browser has no intersection observer.
    pub fn force_visible(&mut self) {
        self.visible = true;
    }
}

/// Two-state motion description for the reveal transition. `visible` is always
/// full opacity with no transform, so only the hidden pose varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Fade only, used for section containers.
    Fade,
    /// Rise 50px into place.
    FadeUp,
    /// Slide in from 50px to the left.
    SlideRight,
    /// Grow from 90%.
    Zoom,
    /// Grow from 80%.
    Pop,
    /// Slide in from 20px to the left.
    Nudge,
}

impl Motion {
    pub fn hidden_transform(self) -> &'static str {
        match self {
            Motion::Fade => "none",
            Motion::FadeUp => "translateY(50px)",
            Motion::SlideRight => "translateX(-50px)",
            Motion::Zoom => "scale(0.9)",
            Motion::Pop => "scale(0.8)",
            Motion::Nudge => "translateX(-20px)",
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Motion::Fade | Motion::FadeUp | Motion::SlideRight | Motion::Pop => {
                Duration::from_millis(600)
            }
            Motion::Zoom => Duration::from_millis(500),
            Motion::Nudge => Duration::from_millis(300),
        }
    }
}

/// Fixed per-child delay for a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    pub const NONE: Stagger = Stagger::millis(0);
    pub const SLOW: Stagger = Stagger::millis(200);
    pub const FAST: Stagger = Stagger::millis(100);
    pub const SKILL: Stagger = Stagger::millis(50);

    pub const fn millis(step: u64) -> Self {
        Self {
            step: Duration::from_millis(step),
        }
    }

    pub fn delay(self, index: usize) -> Duration {
        self.step * index as u32
    }

    /// Delay of child `inner` of group `outer`, each level with its own step.
    pub fn nested(outer: (Stagger, usize), inner: (Stagger, usize)) -> Duration {
        outer.0.delay(outer.1) + inner.0.delay(inner.1)
    }
}

/// Inline style for an element in the given reveal state. Content is never
/// removed or hidden from layout, only faded and offset.
pub fn reveal_style(motion: Motion, visible: bool, delay: Duration) -> String {
    let (opacity, transform) = if visible {
        (1, "none")
    } else {
        (0, motion.hidden_transform())
    };
    format!(
        "opacity: {opacity}; transform: {transform}; transition-property: opacity, transform; transition-duration: {}ms; transition-delay: {}ms;",
        motion.duration().as_millis(),
        delay.as_millis(),
    )
}

/// Vertical scroll offset threshold in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(f64);

impl ScrollThreshold {
    pub const fn new(px: f64) -> Self {
        Self(px)
    }

    pub fn px(self) -> f64 {
        self.0
    }

    pub fn is_past(self, offset: f64) -> bool {
        offset > self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let latch = VisibilityLatch::new(SensorOptions::default());
        assert!(!latch.is_visible());
        assert!(!latch.is_settled());
    }

    #[test]
    fn test_latch_flips_once_and_never_reverts() {
        let mut latch = VisibilityLatch::new(SensorOptions::default());

        // below threshold
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.1));
        assert!(latch.is_visible());
        assert!(latch.is_settled());

        // scrolling away and back again changes nothing
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 1.0));
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_not_intersecting_never_counts() {
        let mut latch = VisibilityLatch::new(SensorOptions {
            trigger_once: true,
            threshold: 0.0,
        });
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.is_visible());
        assert!(latch.observe(true, 0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_continuous_latch_tracks_entry_and_exit() {
        let mut latch = VisibilityLatch::new(SensorOptions::continuous(0.5));
        assert!(latch.observe(true, 0.6));
        assert!(latch.is_visible());
        assert!(!latch.is_settled());
        assert!(latch.observe(true, 0.2));
        assert!(!latch.is_visible());
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 0.9));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_force_visible_settles_trigger_once() {
        let mut latch = VisibilityLatch::new(SensorOptions::default());
        latch.force_visible();
        assert!(latch.is_visible());
        assert!(latch.is_settled());
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::SLOW.delay(0), Duration::ZERO);
        assert_eq!(Stagger::SLOW.delay(3), Duration::from_millis(600));
        assert_eq!(Stagger::FAST.delay(7), Duration::from_millis(700));
        assert_eq!(Stagger::NONE.delay(5), Duration::ZERO);
        assert_eq!(
            Stagger::nested((Stagger::FAST, 2), (Stagger::SKILL, 3)),
            Duration::from_millis(350)
        );
    }

    #[test]
    fn test_reveal_style_states() {
        let hidden = reveal_style(Motion::FadeUp, false, Duration::from_millis(200));
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(50px)"));
        assert!(hidden.contains("transition-delay: 200ms;"));
        assert!(hidden.contains("transition-duration: 600ms;"));

        let shown = reveal_style(Motion::FadeUp, true, Duration::from_millis(200));
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));

        let card = reveal_style(Motion::Zoom, false, Duration::ZERO);
        assert!(card.contains("scale(0.9)"));
        assert!(card.contains("transition-duration: 500ms;"));
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!BACK_TO_TOP_THRESHOLD.is_past(0.0));
        assert!(!BACK_TO_TOP_THRESHOLD.is_past(400.0));
        assert!(BACK_TO_TOP_THRESHOLD.is_past(400.5));
        assert!(BACK_TO_TOP_THRESHOLD.is_past(500.0));

        assert!(!HEADER_SCROLL_THRESHOLD.is_past(0.0));
        assert!(HEADER_SCROLL_THRESHOLD.is_past(51.0));
        assert_eq!(HEADER_SCROLL_THRESHOLD.px(), 50.0);
    }

    #[test]
    fn test_back_to_top_scenario() {
        // load at 0, scroll to 500, jump back to the top
        let offsets = [0.0, 120.0, 500.0, 399.0, 0.0];
        let shown = offsets
            .iter()
            .map(|o| BACK_TO_TOP_THRESHOLD.is_past(*o))
            .collect::<Vec<_>>();
        assert_eq!(shown, vec![false, false, true, false, false]);
    }
}
