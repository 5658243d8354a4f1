// Intersection observer model
//
// A deterministic stand-in for the platform observer: given the current
// viewport window and an element's layout box, compute how much of the
// element is visible and compare against a threshold. Observers are checked
// after mount and after every scroll, which is when layout can change on
// this page.

use crate::dom::{Document, NodeId};
use crate::viewport::Viewport;

/// Observer configuration
#[derive(Debug, Clone, Copy)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the element's area to count as
    /// intersecting (0.0 to 1.0)
    pub threshold: f64,
    /// Units shaved off the bottom of the viewport window before the check
    /// (a positive value makes elements intersect later while scrolling down)
    pub root_margin_bottom: f64,
}

/// Fraction of the element's height currently inside the (margin-adjusted)
/// viewport window
pub fn intersection_ratio(
    top: f64,
    height: f64,
    viewport: &Viewport,
    root_margin_bottom: f64,
) -> f64 {
    let window_top = viewport.scroll_y;
    let window_bottom = viewport.bottom() - root_margin_bottom;
    if window_bottom <= window_top {
        return 0.0;
    }
    if height <= 0.0 {
        // Zero-area element: intersecting iff its edge is inside the window
        return if top >= window_top && top < window_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = (top + height).min(window_bottom) - top.max(window_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// A set of observed nodes sharing one configuration
#[derive(Debug)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    observed: Vec<NodeId>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    pub fn observe(&mut self, id: NodeId) {
        if !self.observed.contains(&id) {
            self.observed.push(id);
        }
    }

    /// Stop watching a node (the stats observer does this after its single
    /// trigger)
    pub fn unobserve(&mut self, id: NodeId) {
        self.observed.retain(|n| *n != id);
    }

    /// Observed nodes currently at or above the threshold, in observation
    /// order. Detached nodes never intersect.
    pub fn intersecting(&self, doc: &Document, viewport: &Viewport) -> Vec<NodeId> {
        self.observed
            .iter()
            .copied()
            .filter(|id| {
                if !doc.is_attached(*id) {
                    return false;
                }
                let layout = doc.node(*id).layout;
                let ratio = intersection_ratio(
                    layout.top,
                    layout.height,
                    viewport,
                    self.options.root_margin_bottom,
                );
                ratio >= self.options.threshold && ratio > 0.0
            })
            .collect()
    }
}
