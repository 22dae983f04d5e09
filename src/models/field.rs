use chrono::{DateTime, Utc};
use serde::Serialize;

/// Editable fields of an event draft.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventField {
    Title,
    StartTime,
    EndTime,
}

impl EventField {
    /// Parse a field name typed by the user (case-insensitive).
    pub fn ef_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" | "name" => Some(Self::Title),
            "start" | "starttime" | "start_time" => Some(Self::StartTime),
            "end" | "endtime" | "end_time" => Some(Self::EndTime),
            _ => None,
        }
    }

    pub fn ef_as_str(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::StartTime => "start",
            EventField::EndTime => "end",
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self, EventField::StartTime | EventField::EndTime)
    }
}

/// Value carried by a field-changed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Time(DateTime<Utc>),
}

impl FieldValue {
    pub fn describe(&self) -> String {
        match self {
            FieldValue::Text(s) => format!("\"{}\"", s),
            FieldValue::Time(t) => t.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(EventField::ef_from_str("Title"), Some(EventField::Title));
        assert_eq!(EventField::ef_from_str("START"), Some(EventField::StartTime));
        assert_eq!(EventField::ef_from_str("end_time"), Some(EventField::EndTime));
        assert_eq!(EventField::ef_from_str("location"), None);
    }

    #[test]
    fn only_start_and_end_are_time_fields() {
        assert!(!EventField::Title.is_time());
        assert!(EventField::StartTime.is_time());
        assert!(EventField::EndTime.is_time());
    }
}
