// Viewport scroll model
//
// Owns the vertical scroll position and the viewport height. Scroll commands
// complete immediately (no interpolation frames), but the requested behavior
// is recorded so callers and tests can observe whether a scroll was smooth
// or an instant jump.

/// How a programmatic scroll should be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll
    Smooth,
    /// Immediate jump
    Instant,
}

/// A programmatic scroll request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Vertical viewport state
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Current scroll offset from the top of the page
    pub scroll_y: f64,
    /// Visible height of the viewport
    pub height: f64,
    /// Last programmatic scroll issued, if any
    pub last_command: Option<ScrollCommand>,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
            last_command: None,
        }
    }

    /// Issue a programmatic scroll; negative targets clamp to the top
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.scroll_y = top;
        self.last_command = Some(ScrollCommand { top, behavior });
    }

    /// Bottom edge of the visible window
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_records_command() {
        let mut vp = Viewport::new(800.0);
        vp.scroll_to(520.0, ScrollBehavior::Smooth);
        assert_eq!(vp.scroll_y, 520.0);
        assert_eq!(
            vp.last_command,
            Some(ScrollCommand {
                top: 520.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_scroll_to_clamps_negative_targets() {
        let mut vp = Viewport::new(800.0);
        // A section near the page top minus the navbar offset can go negative
        vp.scroll_to(-80.0, ScrollBehavior::Smooth);
        assert_eq!(vp.scroll_y, 0.0);
    }
}
