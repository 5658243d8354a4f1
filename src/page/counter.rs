// Stat counter animation
//
// When the stats container first becomes half-visible, every stat label
// with a leading digit run counts up from 0 to its target over 2 seconds at
// a ~60 Hz cadence, rendered as a floored integer with a "+" suffix. The
// final frame clamps to the target exactly and cancels the interval.
// Labels without digits are left untouched. The container is unobserved
// after the first trigger, so the whole animation fires at most once per
// page lifetime.

use super::{Page, TimerKind};
use crate::clock::TimerId;
use crate::dom::NodeId;
use regex::Regex;
use tracing::debug;

pub(crate) const STATS_THRESHOLD: f64 = 0.5;

const COUNTER_DURATION_MS: f64 = 2000.0;
const COUNTER_TICK_MS: u64 = 16;

/// Running state for one stat label
#[derive(Debug)]
pub(crate) struct CounterState {
    target: u64,
    value: f64,
    increment: f64,
    timer: TimerId,
}

/// First run of digits in a stat label, if any
pub fn parse_stat_target(text: &str) -> Option<u64> {
    let digits = Regex::new(r"\d+").ok()?;
    digits.find(text)?.as_str().parse().ok()
}

impl Page {
    /// Start watching the stats container (runs once at mount)
    pub(crate) fn observe_stats(&mut self) {
        if let Some(stats) = self.doc.by_class("stats").into_iter().next() {
            self.stats_observer.observe(stats);
        }
    }

    /// Fire the counter animation the first time the container is
    /// half-visible, then stop watching it
    pub(crate) fn check_stats(&mut self) {
        for container in self.stats_observer.intersecting(&self.doc, &self.viewport) {
            self.stats_observer.unobserve(container);
            self.start_counters(container);
        }
    }

    fn start_counters(&mut self, container: NodeId) {
        let mut labels = Vec::new();
        for item in self.doc.descendants_by_class(container, "stat-item") {
            labels.extend(self.doc.descendants_by_tag(item, "h3"));
        }

        for stat in labels {
            let Some(target) = parse_stat_target(self.doc.text(stat).trim()) else {
                debug!(stat = ?stat, "stat label has no digits, skipping");
                continue;
            };
            self.doc.set_text(stat, "0+");
            let timer = self
                .clock
                .set_interval(TimerKind::CounterTick(stat), COUNTER_TICK_MS);
            self.counters.insert(
                stat,
                CounterState {
                    target,
                    value: 0.0,
                    increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_TICK_MS as f64),
                    timer,
                },
            );
        }
    }

    /// One animation frame for a stat label
    pub(crate) fn counter_tick(&mut self, stat: NodeId) {
        let Some(state) = self.counters.get_mut(&stat) else {
            return;
        };
        state.value += state.increment;
        if state.value >= state.target as f64 {
            let target = state.target;
            let timer = state.timer;
            self.counters.remove(&stat);
            self.clock.cancel(timer);
            self.doc.set_text(stat, format!("{target}+"));
        } else {
            let shown = state.value.floor() as u64;
            self.doc.set_text(stat, format!("{shown}+"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_page;
    use crate::viewport::Viewport;

    fn page_with_stats_visible() -> (Page, NodeId) {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let stats = page.doc.by_class("stats")[0];
        let top = page.doc.node(stats).layout.top;
        page.scroll_to_y(top - 100.0);
        (page, stats)
    }

    #[test]
    fn test_parse_stat_target() {
        assert_eq!(parse_stat_target("150+"), Some(150));
        assert_eq!(parse_stat_target("over 40 projects"), Some(40));
        assert_eq!(parse_stat_target("0"), Some(0));
        assert_eq!(parse_stat_target("N/A"), None);
        assert_eq!(parse_stat_target(""), None);
    }

    #[test]
    fn test_counter_runs_to_target_without_overshoot() {
        let (mut page, stats) = page_with_stats_visible();
        let label = page.doc.descendants_by_tag(stats, "h3")[0];
        // Sample page label is "150+"
        assert_eq!(page.doc.text(label), "0+");

        let mut max_seen = 0u64;
        for _ in 0..200 {
            page.advance(16);
            let shown: u64 = page
                .doc
                .text(label)
                .trim_end_matches('+')
                .parse()
                .unwrap();
            assert!(shown >= max_seen, "counter went backwards");
            max_seen = shown;
            assert!(shown <= 150, "counter overshot: {shown}");
        }
        assert_eq!(page.doc.text(label), "150+");
        // Interval cancelled: no counter timers remain
        assert!(page.counters.is_empty());
    }

    #[test]
    fn test_counter_terminates_within_duration() {
        let (mut page, stats) = page_with_stats_visible();
        let label = page.doc.descendants_by_tag(stats, "h3")[0];
        page.advance(2016);
        assert_eq!(page.doc.text(label), "150+");
    }

    #[test]
    fn test_non_numeric_label_left_untouched() {
        let (mut page, stats) = page_with_stats_visible();
        let labels = page.doc.descendants_by_tag(stats, "h3");
        // Sample page's last stat is non-numeric on purpose
        let na = *labels.last().unwrap();
        assert_eq!(page.doc.text(na), "N/A");
        page.advance(5000);
        assert_eq!(page.doc.text(na), "N/A");
    }

    #[test]
    fn test_stats_fire_at_most_once() {
        let (mut page, stats) = page_with_stats_visible();
        let label = page.doc.descendants_by_tag(stats, "h3")[0];
        page.advance(3000);
        assert_eq!(page.doc.text(label), "150+");

        // Leaving and re-entering the viewport does not restart the count
        page.scroll_to_y(0.0);
        let top = page.doc.node(stats).layout.top;
        page.scroll_to_y(top - 100.0);
        assert_eq!(page.doc.text(label), "150+");
        assert!(page.counters.is_empty());
    }

    #[test]
    fn test_half_visibility_threshold() {
        let mut page = Page::mount(sample_page(), Viewport::new(800.0));
        let stats = page.doc.by_class("stats")[0];
        let layout = page.doc.node(stats).layout;

        // Scroll so just under half the container is visible
        let y = layout.top + layout.height * 0.49 - 800.0;
        page.scroll_to_y(y);
        let label = page.doc.descendants_by_tag(stats, "h3")[0];
        assert_eq!(page.doc.text(label), "150+", "not yet triggered");

        // Past half: animation arms and the label resets to 0+
        page.scroll_to_y(layout.top + layout.height * 0.51 - 800.0);
        assert_eq!(page.doc.text(label), "0+");
    }
}
