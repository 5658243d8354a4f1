// Page behavior controller
//
// This module owns the whole runtime state of the page: the document tree,
// the viewport, the virtual clock, and the animation bookkeeping. `mount`
// wires every behavior once (the page-ready trigger), `handle` routes
// scripted events, and `advance` drains due timers.
//
// Each behavior lives in its own sub-module as an `impl Page` block plus
// the pure decision helpers it needs. The orchestrator here only sequences
// them: per click, the specific element handlers run before the
// document-level outside-click close, matching listener registration order;
// per scroll, navbar styling runs before active-link highlighting, then the
// intersection observers are re-checked.

mod counter;
mod cta;
mod form;
mod hover;
mod nav;
mod notify;
mod reveal;
mod typing;

pub use notify::Severity;

use crate::clock::Clock;
use crate::dom::{Document, NodeId};
use crate::events::PageEvent;
use crate::observer::{IntersectionObserver, ObserverOptions};
use crate::viewport::Viewport;
use counter::CounterState;
use std::collections::HashMap;
use tracing::debug;
use typing::TypingState;

/// Typed payload for every scheduled callback on the page
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    /// Delayed kickoff of the subtitle typing effect
    TypingStart,
    /// Reveal the next subtitle character
    TypingStep,
    /// One animation frame for a stat counter
    CounterTick(NodeId),
    /// Start fading the notification out
    NotificationFade(NodeId),
    /// Drop the notification from the document
    NotificationRemove(NodeId),
}

/// The mounted page: document, viewport, clock, and per-behavior state
pub struct Page {
    pub doc: Document,
    pub viewport: Viewport,
    pub(crate) clock: Clock<TimerKind>,
    pub(crate) reveal_observer: IntersectionObserver,
    pub(crate) stats_observer: IntersectionObserver,
    pub(crate) counters: HashMap<NodeId, CounterState>,
    pub(crate) typing: Option<TypingState>,
    pub(crate) notification: Option<notify::ActiveNotification>,
}

impl Page {
    /// Mount the controller onto a document (the page-ready trigger; runs
    /// once)
    ///
    /// Prepares reveal targets, registers both observers, schedules the
    /// typing kickoff, and performs the initial intersection check that a
    /// platform observer would deliver right after observation starts.
    pub fn mount(doc: Document, viewport: Viewport) -> Self {
        let mut page = Self {
            doc,
            viewport,
            clock: Clock::new(),
            reveal_observer: IntersectionObserver::new(ObserverOptions {
                threshold: reveal::REVEAL_THRESHOLD,
                root_margin_bottom: reveal::REVEAL_BOTTOM_MARGIN,
            }),
            stats_observer: IntersectionObserver::new(ObserverOptions {
                threshold: counter::STATS_THRESHOLD,
                root_margin_bottom: 0.0,
            }),
            counters: HashMap::new(),
            typing: None,
            notification: None,
        };

        page.prepare_reveals();
        page.observe_stats();
        page.clock
            .set_timeout(TimerKind::TypingStart, typing::TYPING_START_DELAY_MS);
        page.check_observers();
        page
    }

    /// Route a scripted event
    pub fn handle(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Click { target } => match self.doc.select_first(target) {
                Some(id) => self.click(id),
                None => debug!(selector = %target, "click target not found, skipping"),
            },
            PageEvent::Scroll { y } => self.scroll_to_y(*y),
            PageEvent::PointerEnter { target } => {
                if let Some(id) = self.doc.select_first(target) {
                    self.pointer_enter(id);
                }
            }
            PageEvent::PointerLeave { target } => {
                if let Some(id) = self.doc.select_first(target) {
                    self.pointer_leave(id);
                }
            }
            PageEvent::Submit { target } => match self.doc.select_first(target) {
                Some(id) => self.submit(id),
                None => debug!(selector = %target, "submit target not found, skipping"),
            },
            PageEvent::Advance { ms } => self.advance(*ms),
        }
    }

    /// A click anywhere on the page
    ///
    /// Element-specific handlers run first, then the document-level
    /// outside-click menu close (registration order at mount).
    pub fn click(&mut self, target: NodeId) {
        if let Some(link) = self.nav_link_for(target) {
            self.on_nav_link_click(link);
        }
        if let Some(hamburger) = self.hamburger() {
            if self.doc.contains(hamburger, target) {
                self.toggle_menu();
            }
        }
        self.close_menu_on_outside_click(target);
        if let Some(button) = self.cta_button_for(target) {
            self.on_cta_click(button);
        }
    }

    /// The user scrolled the viewport
    pub fn scroll_to_y(&mut self, y: f64) {
        self.viewport.scroll_y = y.max(0.0);
        self.on_scroll();
    }

    /// Scroll handlers in registration order, then observer re-check
    pub(crate) fn on_scroll(&mut self) {
        self.update_navbar();
        self.update_active_link();
        self.check_observers();
    }

    pub(crate) fn check_observers(&mut self) {
        self.apply_reveals();
        self.check_stats();
    }

    /// Advance the virtual clock, firing due timers in order
    pub fn advance(&mut self, ms: u64) {
        let deadline = self.clock.now() + ms;
        while let Some((_id, kind)) = self.clock.pop_due(deadline) {
            self.on_timer(kind);
        }
        self.clock.settle(deadline);
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.clock.now()
    }

    /// Live timers still scheduled
    pub fn pending_timers(&self) -> usize {
        self.clock.pending()
    }

    fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::TypingStart => self.start_typing(),
            TimerKind::TypingStep => self.typing_step(),
            TimerKind::CounterTick(stat) => self.counter_tick(stat),
            TimerKind::NotificationFade(node) => self.notification_fade(node),
            TimerKind::NotificationRemove(node) => self.notification_remove(node),
        }
    }
}
