// Subtitle typing effect
//
// 1500 ms after mount the hero subtitle's text is captured and cleared,
// then retyped one character at a time via chained timeouts. There is no
// cancellation path: if the subtitle vanishes mid-animation the remaining
// steps fire and quietly do nothing.

use super::{Page, TimerKind};
use crate::dom::NodeId;
use tracing::debug;

pub(crate) const TYPING_START_DELAY_MS: u64 = 1500;
const TYPING_STEP_MS: u64 = 100;

/// Cursor over the captured subtitle text
#[derive(Debug)]
pub(crate) struct TypingState {
    node: NodeId,
    chars: Vec<char>,
    index: usize,
}

impl Page {
    /// Kick off the effect: capture and clear the subtitle, then type the
    /// first character immediately
    pub(crate) fn start_typing(&mut self) {
        let Some(hero) = self.doc.by_class("hero").into_iter().next() else {
            return;
        };
        let Some(subtitle) = self
            .doc
            .descendants_by_class(hero, "subtitle")
            .into_iter()
            .next()
        else {
            debug!("no hero subtitle, skipping typing effect");
            return;
        };

        let chars: Vec<char> = self.doc.text(subtitle).chars().collect();
        self.doc.set_text(subtitle, "");
        self.typing = Some(TypingState {
            node: subtitle,
            chars,
            index: 0,
        });
        self.typing_step();
    }

    /// Append the next character and schedule the one after it
    pub(crate) fn typing_step(&mut self) {
        let Some(state) = self.typing.as_mut() else {
            return;
        };
        if state.index >= state.chars.len() {
            self.typing = None;
            return;
        }

        let ch = state.chars[state.index];
        state.index += 1;
        let node = state.node;
        let done = state.index >= state.chars.len();

        // A detached subtitle swallows the character; the schedule continues
        if self.doc.is_attached(node) {
            self.doc.node_mut(node).text.push(ch);
        }
        if done {
            self.typing = None;
        } else {
            self.clock.set_timeout(TimerKind::TypingStep, TYPING_STEP_MS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_page;
    use crate::viewport::Viewport;

    fn subtitle_of(page: &Page) -> NodeId {
        let hero = page.doc.by_class("hero")[0];
        page.doc.descendants_by_class(hero, "subtitle")[0]
    }

    #[test]
    fn test_typing_waits_for_kickoff_delay() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let subtitle = subtitle_of(&page);
        let original = page.doc.text(subtitle).to_string();

        page.advance(1499);
        assert_eq!(page.doc.text(subtitle), original);

        // At 1500 the text clears and the first character lands
        page.advance(1);
        assert_eq!(page.doc.text(subtitle), &original[..1]);
    }

    #[test]
    fn test_typing_restores_exact_text() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let subtitle = subtitle_of(&page);
        let original = page.doc.text(subtitle).to_string();

        // Kickoff + one step per remaining character
        page.advance(1500 + 100 * original.chars().count() as u64);
        assert_eq!(page.doc.text(subtitle), original);
        assert!(page.typing.is_none());
    }

    #[test]
    fn test_typing_progresses_one_char_per_step() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let subtitle = subtitle_of(&page);
        let original = page.doc.text(subtitle).to_string();

        page.advance(1500);
        page.advance(100);
        page.advance(100);
        let expected: String = original.chars().take(3).collect();
        assert_eq!(page.doc.text(subtitle), expected);
    }

    #[test]
    fn test_removed_subtitle_is_a_no_op() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let subtitle = subtitle_of(&page);

        page.advance(1600);
        page.doc.remove(subtitle);

        // Remaining steps fire without effect or panic
        page.advance(10_000);
        assert!(page.typing.is_none());
    }

    #[test]
    fn test_missing_subtitle_skips_effect() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let subtitle = subtitle_of(&page);
        page.doc.remove(subtitle);

        page.advance(5000);
        assert!(page.typing.is_none());
    }
}
