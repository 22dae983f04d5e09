use super::store::EventStore;
use crate::models::{Event, EventDraft, EventField, EventId, FieldValue, SaveRequest};
use chrono::{DateTime, Utc};
use tracing::debug;

/// State of the edit dialog.
///
/// `Open` holds a snapshot of the event being edited (not a live reference
/// into the store) and an independent draft. A session opened without a
/// target saves as a brand new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        target: Option<Event>,
        draft: EventDraft,
    },
}

/// What a commit did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Created(EventId),
    Replaced(EventId),
    /// The target was removed while the dialog was open; the edit is lost.
    Dropped(EventId),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn target(&self) -> Option<&Event> {
        match self {
            EditSession::Open { target, .. } => target.as_ref(),
            EditSession::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }

    /// Open the dialog on `event`, replacing whatever was open before.
    pub fn begin(&mut self, event: &Event) {
        debug!(id = %event.id, "edit session opened");
        *self = EditSession::Open {
            target: Some(event.clone()),
            draft: EventDraft::from_event(event),
        };
    }

    /// Open the dialog with an empty draft and no target.
    pub fn begin_new(&mut self) {
        debug!("edit session opened for a new event");
        *self = EditSession::Open {
            target: None,
            draft: EventDraft::default(),
        };
    }

    /// Update one draft field. Returns false when closed or when the value
    /// kind does not fit the field.
    pub fn set_field(&mut self, field: EventField, value: FieldValue) -> bool {
        match self {
            EditSession::Open { draft, .. } => draft.set(field, value),
            EditSession::Closed => false,
        }
    }

    /// Discard the draft. Returns whether a session was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("edit session cancelled");
        }
        *self = EditSession::Closed;
        was_open
    }

    /// Close the dialog and turn the draft into a full record.
    ///
    /// Missing title becomes "", missing times become `now`.
    pub fn save(&mut self, now: DateTime<Utc>) -> Option<SaveRequest> {
        let EditSession::Open { target, draft } = std::mem::take(self) else {
            return None;
        };

        let title = draft.title.unwrap_or_default();
        let start_time = draft.start_time.unwrap_or(now);
        let end_time = draft.end_time.unwrap_or(now);

        Some(match target {
            Some(t) => SaveRequest::ExistingEvent(Event::new(t.id, title, start_time, end_time)),
            None => SaveRequest::NewEvent {
                title,
                start_time,
                end_time,
            },
        })
    }

    /// `save` followed by handing the record to the store.
    pub fn commit(&mut self, store: &mut EventStore, now: DateTime<Utc>) -> Option<Committed> {
        let committed = match self.save(now)? {
            SaveRequest::ExistingEvent(event) => {
                let id = event.id;
                if store.replace(event) {
                    Committed::Replaced(id)
                } else {
                    Committed::Dropped(id)
                }
            }
            SaveRequest::NewEvent {
                title,
                start_time,
                end_time,
            } => Committed::Created(store.upsert_new(title, start_time, end_time).id),
        };
        debug!(?committed, "edit session committed");
        Some(committed)
    }
}
