// Events that drive the page behavior controller
//
// These are the discrete inputs a user session produces: clicks, scrolls,
// pointer moves, form submits, and the passage of time. Using an enum keeps
// dispatch type-safe, and the serde tag makes a JSON array of events a
// runnable interaction script (see `--script`).

use serde::{Deserialize, Serialize};

/// A single page event, addressable from a script
///
/// Targets are minimal selectors: `#id`, `.class` (first match in document
/// order), or a bare tag name (first match). A target that resolves to
/// nothing makes the event a no-op, matching the page's defensive posture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Pointer click on an element (bubbles to the document)
    Click { target: String },

    /// The user scrolled the viewport to a vertical offset
    Scroll { y: f64 },

    /// Pointer entered an element
    PointerEnter { target: String },

    /// Pointer left an element
    PointerLeave { target: String },

    /// Form submission (default behavior is always suppressed)
    Submit { target: String },

    /// Let the virtual clock advance, firing any due timers
    Advance { ms: u64 },
}
