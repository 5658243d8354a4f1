// Hover effects for project cards and skill items
//
// Purely presentational: pointer-enter applies the elevated style directly,
// pointer-leave restores baseline. Hover does not bubble, so only the
// element itself reacts.

use super::Page;
use crate::dom::NodeId;

const SKILL_HOVER_BACKGROUND: &str = "rgba(0, 212, 255, 0.3)";
const SKILL_BASE_BACKGROUND: &str = "rgba(0, 212, 255, 0.1)";

impl Page {
    pub(crate) fn pointer_enter(&mut self, target: NodeId) {
        if self.doc.has_class(target, "project-card") {
            let style = &mut self.doc.node_mut(target).style;
            style.translate_y = -15.0;
            style.scale = 1.02;
        } else if self.doc.has_class(target, "skill-item") {
            self.doc.node_mut(target).style.background =
                Some(SKILL_HOVER_BACKGROUND.to_string());
        }
    }

    pub(crate) fn pointer_leave(&mut self, target: NodeId) {
        if self.doc.has_class(target, "project-card") {
            let style = &mut self.doc.node_mut(target).style;
            style.translate_y = 0.0;
            style.scale = 1.0;
        } else if self.doc.has_class(target, "skill-item") {
            self.doc.node_mut(target).style.background =
                Some(SKILL_BASE_BACKGROUND.to_string());
        }
    }
}
