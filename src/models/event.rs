use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an event in the board.
/// Allocated by the store's id sequence and never reused or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl EventId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single calendar-like entry shown in the list.
///
/// No relation between `start_time` and `end_time` is enforced: an event may
/// end before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start_time,
            end_time,
        }
    }

    /// Default title given to events created from the toolbar.
    pub fn placeholder_title(prefix: &str, id: EventId) -> String {
        format!("{} - {}", prefix, id)
    }

    pub fn start_str(&self, fmt: &str) -> String {
        self.start_time.format(fmt).to_string()
    }

    pub fn end_str(&self, fmt: &str) -> String {
        self.end_time.format(fmt).to_string()
    }
}
