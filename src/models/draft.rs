use super::event::Event;
use super::field::{EventField, FieldValue};
use chrono::{DateTime, Utc};

/// In-progress values of the edit dialog.
/// Every field is optional; missing ones get a fallback when the draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl EventDraft {
    /// Draft pre-filled with every field of an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            start_time: Some(event.start_time),
            end_time: Some(event.end_time),
        }
    }

    /// Store `value` into `field`. Returns false when the value kind does not
    /// match the field (text for a time field or the other way round).
    pub fn set(&mut self, field: EventField, value: FieldValue) -> bool {
        match (field, value) {
            (EventField::Title, FieldValue::Text(s)) => self.title = Some(s),
            (EventField::StartTime, FieldValue::Time(t)) => self.start_time = Some(t),
            (EventField::EndTime, FieldValue::Time(t)) => self.end_time = Some(t),
            _ => return false,
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start_time.is_none() && self.end_time.is_none()
    }
}

/// What a saved edit dialog asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    /// The dialog was opened without a target: append a new event.
    NewEvent {
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },
    /// Full replacement of the event with the same id.
    ExistingEvent(Event),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use chrono::TimeZone;

    #[test]
    fn from_event_copies_every_field() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let ev = Event::new(EventId(3), "Review", start, end);

        let draft = EventDraft::from_event(&ev);
        assert_eq!(draft.title.as_deref(), Some("Review"));
        assert_eq!(draft.start_time, Some(start));
        assert_eq!(draft.end_time, Some(end));
    }

    #[test]
    fn set_rejects_mismatched_value_kind() {
        let mut draft = EventDraft::default();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();

        assert!(!draft.set(EventField::Title, FieldValue::Time(at)));
        assert!(!draft.set(EventField::StartTime, FieldValue::Text("x".into())));
        assert!(draft.is_empty());

        assert!(draft.set(EventField::EndTime, FieldValue::Time(at)));
        assert_eq!(draft.end_time, Some(at));
    }
}
