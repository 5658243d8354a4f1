// Call-to-action buttons
//
// Routed by visible label: a "Projects" button scrolls to the projects
// section with the usual navbar allowance; a "CV" button announces that the
// download is not wired up yet.

use super::{nav::NAVBAR_ANCHOR_OFFSET, Page, Severity};
use crate::dom::NodeId;
use crate::viewport::ScrollBehavior;
use tracing::debug;

impl Page {
    /// The CTA button a click on `target` lands on, if any
    pub(crate) fn cta_button_for(&self, target: NodeId) -> Option<NodeId> {
        let container = self.doc.by_class("cta-buttons").into_iter().next()?;
        self.doc
            .descendants_by_class(container, "btn")
            .into_iter()
            .find(|btn| self.doc.contains(*btn, target))
    }

    pub(crate) fn on_cta_click(&mut self, button: NodeId) {
        let label = self.doc.text(button).to_string();
        if label.contains("Projects") {
            let Some(projects) = self.doc.by_id("projects") else {
                debug!("no projects section, ignoring CTA");
                return;
            };
            let top = self.doc.node(projects).layout.top - NAVBAR_ANCHOR_OFFSET;
            self.viewport.scroll_to(top, ScrollBehavior::Smooth);
            self.on_scroll();
        } else if label.contains("CV") {
            self.notify(
                "CV download feature will be implemented soon!",
                Severity::Success,
            );
        }
    }
}
