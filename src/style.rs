// Inline visual state
//
// The handful of style properties the page behaviors actually touch.
// Handlers write these directly, the same way the original mutated inline
// styles; anything not listed here is owned by the stylesheet and out of
// scope.

/// Inline style for a single node
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyle {
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
    /// Vertical offset in page units; positive moves down
    pub translate_y: f64,
    /// Uniform scale factor
    pub scale: f64,
    /// Background override, e.g. "rgba(0, 212, 255, 0.3)"
    pub background: Option<String>,
    /// Transition shorthand, e.g. "all 0.6s ease-out"
    pub transition: Option<String>,
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
            background: None,
            transition: None,
        }
    }
}

impl InlineStyle {
    /// Pre-reveal state: invisible and shifted down, with the reveal
    /// transition armed
    pub fn hidden_for_reveal() -> Self {
        Self {
            opacity: 0.0,
            translate_y: 30.0,
            transition: Some("all 0.6s ease-out".to_string()),
            ..Self::default()
        }
    }

    /// Apply the revealed state in place, leaving unrelated properties alone
    pub fn reveal(&mut self) {
        self.opacity = 1.0;
        self.translate_y = 0.0;
    }

    /// Whether the node is in its fully revealed position
    pub fn is_revealed(&self) -> bool {
        self.opacity == 1.0 && self.translate_y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_revealed() {
        assert!(InlineStyle::default().is_revealed());
    }

    #[test]
    fn test_hidden_then_reveal() {
        let mut style = InlineStyle::hidden_for_reveal();
        assert!(!style.is_revealed());
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, 30.0);

        style.reveal();
        assert!(style.is_revealed());
        // Transition survives the reveal
        assert_eq!(style.transition.as_deref(), Some("all 0.6s ease-out"));
    }
}
