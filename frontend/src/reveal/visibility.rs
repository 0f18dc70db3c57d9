//! Viewport visibility as plain data: the one-shot latch that turns
//! intersection notifications into a reveal flag, and the rectangle test
//! used when the browser has no `IntersectionObserver`.

use std::fmt;

use crate::config;

/// Per-side root margin in CSS pixels. Negative values shrink the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn bottom(px: f64) -> Self {
        Margin { top: 0.0, right: 0.0, bottom: px, left: 0.0 }
    }
}

/// Formats as an `IntersectionObserver` `rootMargin` string.
impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that has to be inside the root.
    pub threshold: f64,
    pub root_margin: Margin,
    /// Keep the flag set once it has been set.
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: Margin::bottom(config::REVEAL_BOTTOM_MARGIN_PX),
            once: true,
        }
    }
}

/// Visibility flag fed by zero or more notifications, latest wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityLatch {
    once: bool,
    visible: bool,
    triggered: bool,
}

impl VisibilityLatch {
    pub fn new(once: bool) -> Self {
        VisibilityLatch { once, visible: false, triggered: false }
    }

    /// Applies one notification and reports whether the flag changed.
    pub fn observe(&mut self, in_view: bool) -> bool {
        let next = if self.once { self.visible || in_view } else { in_view };
        self.triggered |= in_view;
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn has_triggered(&self) -> bool {
        self.triggered
    }

    /// A one-shot latch that fired can no longer change.
    pub fn is_settled(&self) -> bool {
        self.once && self.triggered
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Bounds { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn expanded(&self, margin: Margin) -> Bounds {
        Bounds {
            top: self.top - margin.top,
            left: self.left - margin.left,
            width: self.width + margin.left + margin.right,
            height: self.height + margin.top + margin.bottom,
        }
    }

    /// Overlap with `other`; edge-adjacent rectangles overlap with zero area.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom < top || right < left {
            return None;
        }
        Some(Bounds::new(top, left, right - left, bottom - top))
    }
}

/// The layout-pass equivalent of an intersection notification.
///
/// An element taller than the root can never show `threshold` of itself,
/// so covering `threshold` of the root counts as well.
pub fn intersects(element: Bounds, viewport: Bounds, options: &RevealOptions) -> bool {
    let root = viewport.expanded(options.root_margin);
    let Some(overlap) = element.intersection(&root) else {
        return false;
    };
    let area = element.area();
    if area <= 0.0 {
        return true;
    }
    let shown = overlap.area() / area;
    let covered = if root.area() > 0.0 { overlap.area() / root.area() } else { 0.0 };
    shown >= options.threshold || covered >= options.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_one_shot_latch_flips_once() {
        let mut latch = VisibilityLatch::new(true);
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());
        assert!(latch.is_settled());

        // Scrolling back out does not hide it again.
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_continuous_latch_follows_notifications() {
        let mut latch = VisibilityLatch::new(false);
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(!latch.is_visible());
        assert!(latch.has_triggered());
        assert!(!latch.is_settled());
    }

    #[test]
    fn test_no_notifications_means_hidden() {
        let latch = VisibilityLatch::new(true);
        assert!(!latch.is_visible());
        assert!(!latch.has_triggered());
    }

    #[test]
    fn test_section_taller_than_viewport_is_in() {
        let options = RevealOptions::default();
        // At most 750 of 10000px can be inside the root, well under 10%.
        let tall = Bounds::new(-2000.0, 0.0, 1280.0, 10000.0);
        assert!(intersects(tall, viewport(), &options));

        // Its top edge peeking 20px above the margin is still not enough.
        let peeking = Bounds::new(730.0, 0.0, 1280.0, 10000.0);
        assert!(!intersects(peeking, viewport(), &options));
    }

    #[test]
    fn test_default_root_margin_string() {
        let options = RevealOptions::default();
        assert_eq!(options.root_margin.to_string(), "0px 0px -50px 0px");
        assert_eq!(options.threshold, 0.1);
        assert!(options.once);
    }

    #[test]
    fn test_element_below_the_fold_is_out() {
        let element = Bounds::new(1200.0, 100.0, 600.0, 300.0);
        assert!(!intersects(element, viewport(), &RevealOptions::default()));
    }

    #[test]
    fn test_element_in_view_is_in() {
        let element = Bounds::new(200.0, 100.0, 600.0, 300.0);
        assert!(intersects(element, viewport(), &RevealOptions::default()));
    }

    #[test]
    fn test_bottom_margin_delays_reveal() {
        let options = RevealOptions::default();
        // Top 40px of a 300px element peek in, but the bottom 50px of the
        // viewport do not count.
        let element = Bounds::new(760.0, 0.0, 600.0, 300.0);
        assert!(!intersects(element, viewport(), &options));

        let no_margin = RevealOptions { root_margin: Margin::default(), ..options };
        let peeking = Bounds::new(760.0, 0.0, 600.0, 300.0);
        assert!(intersects(peeking, viewport(), &no_margin));
    }

    #[test]
    fn test_threshold_is_a_fraction_of_the_element() {
        let options = RevealOptions { threshold: 0.5, root_margin: Margin::default(), once: true };
        let mostly_out = Bounds::new(700.0, 0.0, 100.0, 400.0);
        assert!(!intersects(mostly_out, viewport(), &options));
        let half_in = Bounds::new(600.0, 0.0, 100.0, 400.0);
        assert!(intersects(half_in, viewport(), &options));
    }

    #[test]
    fn test_empty_element_counts_when_inside() {
        let options = RevealOptions::default();
        assert!(intersects(Bounds::new(100.0, 100.0, 0.0, 0.0), viewport(), &options));
        assert!(!intersects(Bounds::new(5000.0, 100.0, 0.0, 0.0), viewport(), &options));
    }

    #[test]
    fn test_scroll_into_view_and_back_out() {
        // Section laid out 1500px down the page; the viewport scrolls.
        let options = RevealOptions::default();
        let mut latch = VisibilityLatch::new(options.once);
        let mut flips = 0;
        for scroll_y in [0.0, 400.0, 900.0, 1400.0, 600.0, 0.0] {
            let element = Bounds::new(1500.0 - scroll_y, 0.0, 800.0, 400.0);
            if latch.observe(intersects(element, viewport(), &options)) {
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert!(latch.is_visible());
    }
}
