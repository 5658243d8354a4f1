// Navigation behaviors: smooth-scroll links, the mobile menu, navbar
// styling, and active-section highlighting.

use super::Page;
use crate::dom::NodeId;
use crate::viewport::ScrollBehavior;
use tracing::debug;

/// Fixed-navbar allowance: anchor targets land this far below the viewport
/// top
pub(crate) const NAVBAR_ANCHOR_OFFSET: f64 = 80.0;

/// Scroll offset past which the navbar takes its "scrolled" treatment
const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// Sections count as current a little before their true top edge
const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Whether the navbar should carry the `scrolled` class at this offset
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_THRESHOLD
}

/// Id of the section whose adjusted range contains `scroll_y`
///
/// Sections are visited in document order and the last match wins, so with
/// overlapping ranges the later section takes the highlight.
pub fn active_section_id<S>(scroll_y: f64, sections: impl IntoIterator<Item = (S, f64, f64)>) -> Option<S> {
    let mut current = None;
    for (id, top, height) in sections {
        let adjusted_top = top - SECTION_PROBE_OFFSET;
        if scroll_y >= adjusted_top && scroll_y < adjusted_top + height {
            current = Some(id);
        }
    }
    current
}

impl Page {
    /// The `.nav-links` container, if the page has one
    pub(crate) fn nav_container(&self) -> Option<NodeId> {
        self.doc.by_class("nav-links").into_iter().next()
    }

    /// The hamburger toggle, if the page has one
    pub(crate) fn hamburger(&self) -> Option<NodeId> {
        self.doc.by_class("hamburger").into_iter().next()
    }

    /// Anchor elements inside the nav container, in document order
    pub(crate) fn nav_links(&self) -> Vec<NodeId> {
        match self.nav_container() {
            Some(container) => self.doc.descendants_by_tag(container, "a"),
            None => Vec::new(),
        }
    }

    /// The nav link a click on `target` lands on, if any (clicks on a
    /// link's children count as clicks on the link)
    pub(crate) fn nav_link_for(&self, target: NodeId) -> Option<NodeId> {
        self.nav_links()
            .into_iter()
            .find(|link| self.doc.contains(*link, target))
    }

    /// Smooth-scroll to the link's fragment target, then close the menu
    ///
    /// A fragment that resolves to nothing is a silent no-op, and the menu
    /// stays as it was.
    pub(crate) fn on_nav_link_click(&mut self, link: NodeId) {
        let Some(fragment) = self
            .doc
            .attr(link, "href")
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_string)
        else {
            return;
        };
        let Some(section) = self.doc.by_id(&fragment) else {
            debug!(%fragment, "nav target missing, ignoring click");
            return;
        };

        let top = self.doc.node(section).layout.top - NAVBAR_ANCHOR_OFFSET;
        debug!(%fragment, top, "nav scroll");
        self.viewport.scroll_to(top, ScrollBehavior::Smooth);
        self.on_scroll();
        self.close_menu();
    }

    /// Flip the mobile menu open/closed
    pub(crate) fn toggle_menu(&mut self) {
        if let (Some(container), Some(hamburger)) = (self.nav_container(), self.hamburger()) {
            let open = self.doc.toggle_class(container, "active");
            if open {
                self.doc.add_class(hamburger, "active");
            } else {
                self.doc.remove_class(hamburger, "active");
            }
            debug!(open, "menu toggled");
        }
    }

    pub(crate) fn close_menu(&mut self) {
        if let Some(container) = self.nav_container() {
            self.doc.remove_class(container, "active");
        }
        if let Some(hamburger) = self.hamburger() {
            self.doc.remove_class(hamburger, "active");
        }
    }

    /// Document-level close: any click landing outside both the hamburger
    /// and the nav container closes the menu
    pub(crate) fn close_menu_on_outside_click(&mut self, target: NodeId) {
        let inside_hamburger = self
            .hamburger()
            .is_some_and(|h| self.doc.contains(h, target));
        let inside_menu = self
            .nav_container()
            .is_some_and(|c| self.doc.contains(c, target));
        if !inside_hamburger && !inside_menu {
            self.close_menu();
        }
    }

    /// Whether the mobile menu is currently open
    pub fn menu_open(&self) -> bool {
        self.nav_container()
            .is_some_and(|c| self.doc.has_class(c, "active"))
    }

    /// Apply or clear the navbar's scrolled treatment
    pub(crate) fn update_navbar(&mut self) {
        let Some(navbar) = self.doc.by_id("navbar") else {
            return;
        };
        if navbar_scrolled(self.viewport.scroll_y) {
            self.doc.add_class(navbar, "scrolled");
        } else {
            self.doc.remove_class(navbar, "scrolled");
        }
    }

    /// Highlight the nav link for the section under the current offset
    ///
    /// Sections without an id still take part in the scan: when one of
    /// them is the last match, no fragment can equal it and every link
    /// goes inactive.
    pub(crate) fn update_active_link(&mut self) {
        let sections: Vec<(Option<String>, f64, f64)> = self
            .doc
            .by_tag("section")
            .into_iter()
            .map(|s| {
                let node = self.doc.node(s);
                (node.id.clone(), node.layout.top, node.layout.height)
            })
            .collect();
        let current = active_section_id(self.viewport.scroll_y, sections).flatten();

        for link in self.nav_links() {
            self.doc.remove_class(link, "active");
            let matches = match (&current, self.doc.attr(link, "href")) {
                (Some(id), Some(href)) => href == format!("#{id}"),
                _ => false,
            };
            if matches {
                self.doc.add_class(link, "active");
            }
        }
    }
}
