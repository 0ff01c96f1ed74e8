use serde::{Deserialize, Serialize};

use crate::models::page::PageElement;
use crate::utils::date::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// Attribute on a countdown element holding the raw target date/time string.
pub const COUNT_ATTRIBUTE: &str = "data-count";

/// Marker class identifying countdown elements during discovery.
pub const COUNTDOWN_CLASS: &str = "countdown";

/// Unique identifier for countdown panels. A monotonic u64 keeps the ticker's
/// handle map simple and serializes without ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId(pub u64);

/// Remaining time split into display units.
///
/// Hours, minutes and seconds stay inside their natural ranges; days are
/// unbounded. All fields are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeBreakdown {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Floored decomposition of a millisecond duration. Non-positive input
    /// collapses to [`Self::ZERO`].
    pub fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            return Self::ZERO;
        }

        Self {
            days: millis / MILLIS_PER_DAY,
            hours: (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// The four writable text slots of a countdown panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountdownSlots {
    pub days: PageElement,
    pub hours: PageElement,
    pub minutes: PageElement,
    pub seconds: PageElement,
}

impl CountdownSlots {
    /// Writes each unit as a plain integer into its slot.
    pub fn write(&mut self, breakdown: TimeBreakdown) {
        self.days.set_text(breakdown.days.to_string());
        self.hours.set_text(breakdown.hours.to_string());
        self.minutes.set_text(breakdown.minutes.to_string());
        self.seconds.set_text(breakdown.seconds.to_string());
    }

    /// Reads the slots back as a breakdown; None until the first write or if
    /// a slot holds non-numeric text.
    pub fn values(&self) -> Option<TimeBreakdown> {
        Some(TimeBreakdown {
            days: self.days.text()?.parse().ok()?,
            hours: self.hours.text()?.parse().ok()?,
            minutes: self.minutes.text()?.parse().ok()?,
            seconds: self.seconds.text()?.parse().ok()?,
        })
    }
}

/// One countdown display surface: the element carrying the raw target
/// attribute plus its four output slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownPanel {
    pub id: PanelId,
    pub label: String,
    pub element: PageElement,
    pub slots: CountdownSlots,
}

impl CountdownPanel {
    pub fn new(id: PanelId, label: &str, target: &str) -> Self {
        let mut element = PageElement::with_classes(&[COUNTDOWN_CLASS]);
        element.set_attribute(COUNT_ATTRIBUTE, target);

        Self {
            id,
            label: label.to_string(),
            element,
            slots: CountdownSlots::default(),
        }
    }

    /// The raw target string; empty when the attribute is absent.
    pub fn raw_target(&self) -> &str {
        self.element.attribute(COUNT_ATTRIBUTE).unwrap_or("")
    }
}
