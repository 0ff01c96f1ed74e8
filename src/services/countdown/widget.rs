use chrono::{DateTime, Local};

use crate::models::countdown::{CountdownPanel, TimeBreakdown};
use crate::services::datetime;
use crate::utils::date::millis_until;

/// Refreshes one panel against the current time.
pub fn refresh(panel: &mut CountdownPanel) -> bool {
    refresh_at(panel, Local::now())
}

/// Refreshes one panel against `now`: re-reads the raw target attribute,
/// resolves it, and rewrites the four output slots.
///
/// Returns true while the target lies in the future. Once the remaining time
/// is non-positive (including every unparsable target, which resolves to
/// `now`), all four slots are forced to 0 and the return value is false so
/// the caller stops rescheduling.
pub fn refresh_at(panel: &mut CountdownPanel, now: DateTime<Local>) -> bool {
    let raw = panel.raw_target().to_string();
    let target = datetime::parse_flexible_at(&raw, now);
    let remaining = millis_until(target, now);

    if remaining <= 0 {
        panel.slots.write(TimeBreakdown::ZERO);
        return false;
    }

    panel.slots.write(TimeBreakdown::from_millis(remaining));
    true
}
