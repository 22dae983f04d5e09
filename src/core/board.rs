use super::activity::{ActivityLog, Operation};
use super::clock::Clock;
use super::session::{Committed, EditSession};
use super::store::EventStore;
use crate::models::{EventField, EventId, FieldValue};
use std::fmt;
use tracing::debug;

/// User intents coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Toolbar "+ Add Event".
    Add,
    Delete(EventId),
    /// Open the edit dialog on an existing event.
    Edit(EventId),
    /// Open the edit dialog with an empty draft.
    New,
    SetField(EventField, FieldValue),
    Save,
    Cancel,
}

/// Why an intent changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownEvent(EventId),
    NoOpenSession,
    FieldMismatch(EventField),
}

/// Result of dispatching one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(EventId),
    Removed(EventId),
    Opened(Option<EventId>),
    FieldChanged(EventField),
    Created(EventId),
    Replaced(EventId),
    /// Save of an event deleted while its dialog was open.
    Dropped(EventId),
    Cancelled,
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Whether the event list may look different after this outcome.
    pub fn list_changed(&self) -> bool {
        matches!(
            self,
            Outcome::Added(_) | Outcome::Removed(_) | Outcome::Created(_) | Outcome::Replaced(_)
        )
    }
}

/// The event list and its edit dialog, driven by intents.
pub struct Board {
    store: EventStore,
    session: EditSession,
    clock: Box<dyn Clock>,
    activity: ActivityLog,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("store", &self.store)
            .field("session", &self.session)
            .field("now", &self.clock.now())
            .field("activity", &self.activity)
            .finish()
    }
}

impl Board {
    pub fn new(store: EventStore, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            session: EditSession::default(),
            clock,
            activity: ActivityLog::default(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!(?intent, "dispatching");
        let now = self.clock.now();

        let outcome = match intent {
            Intent::Add => {
                let ev = self.store.add(now);
                let (id, title) = (ev.id, ev.title.clone());
                self.activity
                    .record(now, Operation::Add, id.to_string(), format!("added \"{title}\""));
                Outcome::Added(id)
            }

            Intent::Delete(id) => match self.store.remove(id) {
                Some(ev) => {
                    self.activity.record(
                        now,
                        Operation::Del,
                        id.to_string(),
                        format!("deleted \"{}\"", ev.title),
                    );
                    Outcome::Removed(id)
                }
                None => Outcome::Ignored(IgnoreReason::UnknownEvent(id)),
            },

            Intent::Edit(id) => match self.store.get(id) {
                Some(ev) => {
                    self.session.begin(ev);
                    self.activity
                        .record(now, Operation::Edit, id.to_string(), "edit dialog opened");
                    Outcome::Opened(Some(id))
                }
                None => Outcome::Ignored(IgnoreReason::UnknownEvent(id)),
            },

            Intent::New => {
                self.session.begin_new();
                self.activity
                    .record(now, Operation::New, "", "edit dialog opened for a new event");
                Outcome::Opened(None)
            }

            Intent::SetField(field, value) => {
                if !self.session.is_open() {
                    Outcome::Ignored(IgnoreReason::NoOpenSession)
                } else {
                    let described = value.describe();
                    if self.session.set_field(field, value) {
                        self.activity.record(
                            now,
                            Operation::Set,
                            field.ef_as_str(),
                            format!("draft {} = {}", field.ef_as_str(), described),
                        );
                        Outcome::FieldChanged(field)
                    } else {
                        Outcome::Ignored(IgnoreReason::FieldMismatch(field))
                    }
                }
            }

            Intent::Save => match self.session.commit(&mut self.store, now) {
                Some(Committed::Created(id)) => {
                    self.activity
                        .record(now, Operation::Save, id.to_string(), "created from edit dialog");
                    Outcome::Created(id)
                }
                Some(Committed::Replaced(id)) => {
                    self.activity
                        .record(now, Operation::Save, id.to_string(), "event replaced");
                    Outcome::Replaced(id)
                }
                Some(Committed::Dropped(id)) => {
                    self.activity.record(
                        now,
                        Operation::Save,
                        id.to_string(),
                        "event no longer exists, edit discarded",
                    );
                    Outcome::Dropped(id)
                }
                None => Outcome::Ignored(IgnoreReason::NoOpenSession),
            },

            Intent::Cancel => {
                if self.session.cancel() {
                    self.activity
                        .record(now, Operation::Cancel, "", "edit dialog closed");
                    Outcome::Cancelled
                } else {
                    Outcome::Ignored(IgnoreReason::NoOpenSession)
                }
            }
        };

        if outcome.list_changed() {
            debug!(?outcome, events = self.store.len(), "event list updated");
        }
        outcome
    }
}
