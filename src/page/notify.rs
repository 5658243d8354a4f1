// Transient notification popup
//
// At most one notification exists in the document at any instant: showing a
// new one synchronously removes the old one and cancels its pending timers,
// so a stale dismissal can never take down a newer notification. Dismissal
// is a short fade followed by removal.

use super::{Page, TimerKind};
use crate::clock::TimerId;
use crate::dom::NodeId;
use tracing::info;

/// Default time a notification stays up before fading
const NOTIFY_DURATION_MS: u64 = 3500;

/// Length of the dismissal fade
const NOTIFY_FADE_MS: u64 = 400;

/// Notification severity, which picks the class, icon, and background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4ecdc4",
            Severity::Error => "#ff6b6b",
        }
    }
}

/// The currently displayed notification and its dismissal timers
#[derive(Debug)]
pub(crate) struct ActiveNotification {
    node: NodeId,
    fade: TimerId,
    remove: TimerId,
}

impl Page {
    /// Show a notification with the default duration
    pub fn notify(&mut self, message: &str, severity: Severity) {
        self.notify_with_duration(message, severity, NOTIFY_DURATION_MS);
    }

    /// Show a notification, superseding any current one
    ///
    /// Removal of the old instance and insertion of the new one happen in
    /// this single synchronous call, preserving the at-most-one invariant.
    pub fn notify_with_duration(&mut self, message: &str, severity: Severity, duration_ms: u64) {
        if let Some(active) = self.notification.take() {
            self.clock.cancel(active.fade);
            self.clock.cancel(active.remove);
            self.doc.remove(active.node);
        }
        // Sweep strays in case the document came with one baked in
        for stray in self.doc.by_class("notification") {
            self.doc.remove(stray);
        }

        let node = self.doc.create_element("div");
        self.doc.add_class(node, "notification");
        self.doc.add_class(node, severity.class());
        self.doc.node_mut(node).style.background = Some(severity.background().to_string());

        let content = self.doc.create_element("div");
        self.doc.add_class(content, "notification-content");
        let icon = self.doc.create_element("i");
        self.doc.add_class(icon, "fas");
        self.doc.add_class(icon, severity.icon());
        let text = self.doc.create_element("span");
        self.doc.set_text(text, message);

        self.doc.append_child(content, icon);
        self.doc.append_child(content, text);
        self.doc.append_child(node, content);
        let body = self.doc.body();
        self.doc.append_child(body, node);

        let fade = self
            .clock
            .set_timeout(TimerKind::NotificationFade(node), duration_ms);
        let remove = self
            .clock
            .set_timeout(TimerKind::NotificationRemove(node), duration_ms + NOTIFY_FADE_MS);
        self.notification = Some(ActiveNotification { node, fade, remove });

        info!(severity = severity.class(), message, "notification shown");
    }

    /// The visible notification node, if one is up
    pub fn notification_node(&self) -> Option<NodeId> {
        self.notification.as_ref().map(|a| a.node)
    }

    /// Message text of the visible notification
    pub fn notification_message(&self) -> Option<String> {
        let node = self.notification_node()?;
        self.doc
            .descendants_by_tag(node, "span")
            .first()
            .map(|span| self.doc.text(*span).to_string())
    }

    /// Begin the dismissal fade
    pub(crate) fn notification_fade(&mut self, node: NodeId) {
        if !self.doc.is_attached(node) {
            return;
        }
        self.doc.add_class(node, "hide");
        let style = &mut self.doc.node_mut(node).style;
        style.transition = Some("opacity 0.4s ease".to_string());
        style.opacity = 0.0;
    }

    /// Drop the notification after its fade has finished
    pub(crate) fn notification_remove(&mut self, node: NodeId) {
        self.doc.remove(node);
        if self.notification.as_ref().is_some_and(|a| a.node == node) {
            self.notification = None;
        }
    }
}
