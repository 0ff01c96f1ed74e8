// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{DateTime, Local, TimeZone};
use launch_countdown::models::countdown::{CountdownPanel, PanelId};

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Local midnight, Jan 1 2099
    pub fn launch_2099() -> DateTime<Local> {
        Local.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap()
    }

    /// One hour before the 2099 launch
    pub fn hour_before_launch() -> DateTime<Local> {
        Local.with_ymd_and_hms(2098, 12, 31, 23, 0, 0).unwrap()
    }

    /// A fixed "now" safely in the past of every future fixture
    pub fn reference_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap()
    }
}

/// Sample countdown panels
pub mod panels {
    use super::*;

    /// Counts down to the 2099 launch
    pub fn launch_panel() -> CountdownPanel {
        CountdownPanel::new(PanelId(1), "Launch", "2099-01-01 00:00:00")
    }

    /// Target long since passed
    pub fn elapsed_panel() -> CountdownPanel {
        CountdownPanel::new(PanelId(2), "Elapsed", "2000-01-01")
    }

    /// No target at all
    pub fn blank_panel() -> CountdownPanel {
        CountdownPanel::new(PanelId(3), "Blank", "")
    }
}
