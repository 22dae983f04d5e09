//! In-memory activity log: one line per applied intent.
//! Lives as long as the board does; nothing is written to disk.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Del,
    Edit,
    New,
    Set,
    Save,
    Cancel,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Del => "del",
            Operation::Edit => "edit",
            Operation::New => "new",
            Operation::Set => "set",
            Operation::Save => "save",
            Operation::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub operation: Operation,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn record(
        &mut self,
        at: DateTime<Utc>,
        operation: Operation,
        target: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.entries.push(ActivityEntry {
            at,
            operation,
            target: target.into(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
