// Contact form validation
//
// A front-end-only stub: default submission is always suppressed and no
// network request is made. Fields are located by their `name` attribute
// (name, email, subject, message); all four non-empty yields a success
// notification and a field reset, anything less yields an error
// notification and leaves the fields alone.

use super::{Page, Severity};
use crate::dom::NodeId;
use tracing::{debug, info};

const FORM_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

impl Page {
    /// Handle a submit landing on (or inside) the contact form
    pub(crate) fn submit(&mut self, target: NodeId) {
        let Some(form) = self.doc.by_class("contact-form").into_iter().next() else {
            return;
        };
        if !self.doc.contains(form, target) {
            debug!("submit outside the contact form, ignoring");
            return;
        }

        let fields: Vec<Option<NodeId>> = FORM_FIELDS
            .iter()
            .map(|name| self.form_field(form, name))
            .collect();
        let complete = fields
            .iter()
            .all(|field| field.is_some_and(|id| !self.doc.text(id).is_empty()));

        if complete {
            info!("contact form accepted");
            self.notify(
                "Thank you for your message! I'll get back to you soon.",
                Severity::Success,
            );
            for field in fields.into_iter().flatten() {
                self.doc.set_text(field, "");
            }
        } else {
            info!("contact form rejected: missing fields");
            self.notify("Please fill in all fields.", Severity::Error);
        }
    }

    /// Field lookup by `name` attribute within the form
    fn form_field(&self, form: NodeId, name: &str) -> Option<NodeId> {
        self.doc
            .descendants(form)
            .into_iter()
            .find(|id| self.doc.attr(*id, "name") == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_page;
    use crate::viewport::Viewport;

    fn mounted() -> Page {
        Page::mount(sample_page(), Viewport::new(800.0))
    }

    fn fill(page: &mut Page, name: &str, value: &str) {
        let form = page.doc.by_class("contact-form")[0];
        let field = page.form_field(form, name).unwrap();
        page.doc.set_text(field, value);
    }

    fn fill_all(page: &mut Page) {
        fill(page, "name", "Ada");
        fill(page, "email", "ada@example.com");
        fill(page, "subject", "Hello");
        fill(page, "message", "Nice page");
    }

    #[test]
    fn test_complete_form_notifies_success_and_clears() {
        let mut page = mounted();
        fill_all(&mut page);

        let form = page.doc.by_class("contact-form")[0];
        page.submit(form);

        let notifications = page.doc.by_class("notification");
        assert_eq!(notifications.len(), 1);
        assert!(page.doc.has_class(notifications[0], "success"));

        for name in FORM_FIELDS {
            let field = page.form_field(form, name).unwrap();
            assert_eq!(page.doc.text(field), "", "{name} not cleared");
        }
    }

    #[test]
    fn test_any_empty_field_notifies_error_and_keeps_values() {
        for missing in FORM_FIELDS {
            let mut page = mounted();
            fill_all(&mut page);
            fill(&mut page, missing, "");

            let form = page.doc.by_class("contact-form")[0];
            page.submit(form);

            let notifications = page.doc.by_class("notification");
            assert_eq!(notifications.len(), 1, "missing {missing}");
            assert!(page.doc.has_class(notifications[0], "error"));

            // Populated fields keep their values
            for name in FORM_FIELDS {
                if name != missing {
                    let field = page.form_field(form, name).unwrap();
                    assert!(!page.doc.text(field).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_submit_outside_the_form_is_ignored() {
        let mut page = mounted();
        let section = page.doc.by_id("home").unwrap();
        page.submit(section);
        assert!(page.doc.by_class("notification").is_empty());
    }
}
