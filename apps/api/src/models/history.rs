//! Experience and education entries share one shape: a titled stint at an
//! organization with a start month/year and an optional end.

use serde::{Deserialize, Serialize};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthYear {
    pub month: String,
    pub year: String,
}

impl MonthYear {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        MonthYear {
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.month.trim().is_empty() && self.year.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// How an entry ends. Replaces the `current` checkbox + stale end-date pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tenure {
    /// No end date given and not marked current.
    #[default]
    Unspecified,
    Ongoing,
    Ended(MonthYear),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HistoryItemWire", into = "HistoryItemWire")]
pub struct HistoryItem {
    pub title: String,
    pub organization: String,
    pub location: Location,
    pub description: String,
    pub start_date: MonthYear,
    pub tenure: Tenure,
}

impl HistoryItem {
    pub fn is_current(&self) -> bool {
        matches!(self.tenure, Tenure::Ongoing)
    }

    /// End-date inputs are disabled while the entry is marked current.
    pub fn end_date_editable(&self) -> bool {
        !self.is_current()
    }

    /// Checking "current" discards any end date; unchecking leaves the end open.
    pub fn set_current(&mut self, current: bool) {
        self.tenure = match (current, &self.tenure) {
            (true, _) => Tenure::Ongoing,
            (false, Tenure::Ongoing) => Tenure::Unspecified,
            (false, other) => other.clone(),
        };
    }

    /// Returns `false` without changing anything when the entry is current.
    pub fn set_end_date(&mut self, end: MonthYear) -> bool {
        if self.is_current() {
            return false;
        }
        self.tenure = if end.is_blank() {
            Tenure::Unspecified
        } else {
            Tenure::Ended(end)
        };
        true
    }

    pub fn end_date(&self) -> Option<&MonthYear> {
        match &self.tenure {
            Tenure::Ended(end) => Some(end),
            _ => None,
        }
    }
}

/// Document layout shared with the form pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct HistoryItemWire {
    title: String,
    organization: String,
    location: Location,
    description: String,
    start_date: MonthYear,
    end_date: MonthYear,
    current: bool,
}

impl From<HistoryItemWire> for HistoryItem {
    fn from(wire: HistoryItemWire) -> Self {
        let tenure = if wire.current {
            Tenure::Ongoing
        } else if wire.end_date.is_blank() {
            Tenure::Unspecified
        } else {
            Tenure::Ended(wire.end_date)
        };
        HistoryItem {
            title: wire.title,
            organization: wire.organization,
            location: wire.location,
            description: wire.description,
            start_date: wire.start_date,
            tenure,
        }
    }
}

impl From<HistoryItem> for HistoryItemWire {
    fn from(item: HistoryItem) -> Self {
        let (end_date, current) = match item.tenure {
            Tenure::Unspecified => (MonthYear::default(), false),
            Tenure::Ongoing => (MonthYear::default(), true),
            Tenure::Ended(end) => (end, false),
        };
        HistoryItemWire {
            title: item.title,
            organization: item.organization,
            location: item.location,
            description: item.description,
            start_date: item.start_date,
            end_date,
            current,
        }
    }
}
