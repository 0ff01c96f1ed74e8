use std::collections::HashMap;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

use crate::models::countdown::{PanelId, COUNTDOWN_CLASS};
use crate::models::page::PageModel;

use super::widget;

/// Timer handle owned by the ticker for one countdown panel.
///
/// `next_refresh_at` is None once the countdown has finished; a finished
/// handle is never rescheduled.
#[derive(Debug, Clone)]
struct PanelTimer {
    next_refresh_at: Option<DateTime<Local>>,
    finished: bool,
}

/// Outcome of one tick, for logging and for the driving loop's sleep.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub refreshed: Vec<PanelId>,
    pub newly_finished: Vec<PanelId>,
    pub next_due_in: Option<StdDuration>,
}

impl TickResult {
    pub fn refreshed_count(&self) -> usize {
        self.refreshed.len()
    }
}

/// Drives countdown panels at a nominal period with one explicit timer handle
/// per panel. Panels are independent: a handle only ever reschedules or
/// cancels itself.
pub struct CountdownTicker {
    timers: HashMap<PanelId, PanelTimer>,
    period: Duration,
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::with_period_ms(1_000)
    }

    pub fn with_period_ms(period_ms: u64) -> Self {
        Self {
            timers: HashMap::new(),
            period: Duration::milliseconds(period_ms.max(1) as i64),
        }
    }

    /// Registers every panel on the page carrying the countdown marker class
    /// and refreshes each one immediately. Panels already registered keep
    /// their existing handle.
    pub fn discover(&mut self, page: &mut PageModel, now: DateTime<Local>) -> TickResult {
        let mut result = TickResult::default();

        for panel in &mut page.countdowns {
            if !panel.element.classes.contains(COUNTDOWN_CLASS) {
                continue;
            }
            if self.timers.contains_key(&panel.id) {
                continue;
            }

            let running = widget::refresh_at(panel, now);
            result.refreshed.push(panel.id);

            if running {
                self.timers.insert(
                    panel.id,
                    PanelTimer {
                        next_refresh_at: Some(now + self.period),
                        finished: false,
                    },
                );
            } else {
                log::info!("countdown '{}' already elapsed at discovery", panel.label);
                result.newly_finished.push(panel.id);
                self.timers.insert(
                    panel.id,
                    PanelTimer {
                        next_refresh_at: None,
                        finished: true,
                    },
                );
            }
        }

        result.next_due_in = self.next_due_in(now);
        result
    }

    /// Refreshes every registered, unfinished panel that is due at `now` and
    /// reschedules it one period later. The first refresh returning false
    /// cancels that panel's handle permanently.
    pub fn tick_at(&mut self, page: &mut PageModel, now: DateTime<Local>) -> TickResult {
        // Drop handles whose panel is gone from the page.
        self.timers
            .retain(|id, _| page.countdowns.iter().any(|panel| panel.id == *id));

        let mut result = TickResult::default();

        for panel in &mut page.countdowns {
            let Some(timer) = self.timers.get_mut(&panel.id) else {
                continue;
            };
            if timer.finished {
                continue;
            }
            let due = timer.next_refresh_at.is_none_or(|at| now >= at);
            if !due {
                continue;
            }

            result.refreshed.push(panel.id);
            if widget::refresh_at(panel, now) {
                timer.next_refresh_at = Some(now + self.period);
            } else {
                timer.next_refresh_at = None;
                timer.finished = true;
                result.newly_finished.push(panel.id);
                log::info!("countdown '{}' reached zero", panel.label);
            }
        }

        result.next_due_in = self.next_due_in(now);
        result
    }

    /// Removes a panel's handle outright.
    pub fn cancel(&mut self, id: PanelId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_finished(&self, id: PanelId) -> bool {
        self.timers.get(&id).is_some_and(|timer| timer.finished)
    }

    /// Number of handles still scheduled to fire.
    pub fn pending_count(&self) -> usize {
        self.timers.values().filter(|timer| !timer.finished).count()
    }

    pub fn all_finished(&self) -> bool {
        self.pending_count() == 0
    }

    fn next_due_in(&self, now: DateTime<Local>) -> Option<StdDuration> {
        let next_due_at = self
            .timers
            .values()
            .filter_map(|timer| timer.next_refresh_at)
            .min()?;

        let delta = next_due_at - now;
        if delta <= Duration::zero() {
            Some(StdDuration::from_secs(0))
        } else {
            Some(delta.to_std().unwrap_or_else(|_| StdDuration::from_secs(0)))
        }
    }
}
