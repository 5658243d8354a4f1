// Scroll-reveal animation
//
// Content blocks start invisible and shifted down; the first time one is at
// least 10% inside the (bottom-shrunk) viewport it snaps to its resting
// state. The reveal never reverts, and re-triggering on an already revealed
// element is a harmless overwrite with the same values.

use super::Page;
use crate::style::InlineStyle;

/// Classes whose elements participate in the reveal animation
const REVEAL_CLASSES: [&str; 4] = [
    "skill-category",
    "project-card",
    "about-content",
    "contact-content",
];

pub(crate) const REVEAL_THRESHOLD: f64 = 0.1;
pub(crate) const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

impl Page {
    /// Put every reveal-eligible element into its hidden state and observe
    /// it (runs once at mount)
    pub(crate) fn prepare_reveals(&mut self) {
        for class in REVEAL_CLASSES {
            for node in self.doc.by_class(class) {
                self.doc.node_mut(node).style = InlineStyle::hidden_for_reveal();
                self.reveal_observer.observe(node);
            }
        }
    }

    /// Snap currently intersecting elements to their revealed state
    pub(crate) fn apply_reveals(&mut self) {
        for node in self.reveal_observer.intersecting(&self.doc, &self.viewport) {
            self.doc.node_mut(node).style.reveal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_page;
    use crate::viewport::Viewport;

    #[test]
    fn test_mount_hides_reveal_targets() {
        let page = Page::mount(sample_page(), Viewport::new(800.0));
        // Project cards sit below the first viewport in the sample page
        let card = page.doc.by_class("project-card")[0];
        let style = &page.doc.node(card).style;
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, 30.0);
        assert_eq!(style.transition.as_deref(), Some("all 0.6s ease-out"));
    }

    #[test]
    fn test_scrolling_into_view_reveals_once_and_for_all() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let card = page.doc.by_class("project-card")[0];
        let card_top = page.doc.node(card).layout.top;

        page.scroll_to_y(card_top - 400.0);
        assert!(page.doc.node(card).style.is_revealed());

        // Scrolling away does not hide it again
        page.scroll_to_y(0.0);
        assert!(page.doc.node(card).style.is_revealed());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let card = page.doc.by_class("project-card")[0];
        let card_top = page.doc.node(card).layout.top;
        let card_height = page.doc.node(card).layout.height;

        // Scroll so that under 10% of the card clears the shrunk window
        let sliver = card_height * 0.05;
        page.scroll_to_y(card_top + sliver + REVEAL_BOTTOM_MARGIN - 800.0);
        assert!(!page.doc.node(card).style.is_revealed());
    }
}
