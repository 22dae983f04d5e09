use super::sequence::IdSequence;
use crate::models::{Event, EventId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_TITLE_PREFIX: &str = "Event New";

/// Titles of the events every fresh board starts with.
pub const SEED_TITLES: [&str; 3] = ["Event Foo", "Event Bar", "Event Baz"];

/// Ordered collection of events plus the id sequence used to number them.
///
/// Insertion order is the display order. Ids are unique at all times.
/// Every operation is total: unknown ids are silently ignored.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    ids: IdSequence,
    title_prefix: String,
}

impl EventStore {
    pub fn new(ids: IdSequence) -> Self {
        Self {
            events: Vec::new(),
            ids,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }

    /// Store holding the three demo events, ids 1..=3, sequence at 4.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let events = SEED_TITLES
            .iter()
            .zip(1u32..)
            .map(|(title, id)| Event::new(EventId(id), *title, now, now))
            .collect();
        Self::with_events(events)
    }

    /// Store built from existing events. Later duplicates of an id are dropped
    /// and the sequence starts after both the highest id and the count.
    pub fn with_events(events: Vec<Event>) -> Self {
        let mut seen = HashSet::new();
        let events: Vec<Event> = events.into_iter().filter(|e| seen.insert(e.id)).collect();

        let count = u32::try_from(events.len()).unwrap_or(u32::MAX);
        let mut ids = IdSequence::starting_at(count.saturating_add(1));
        if let Some(max) = events.iter().map(|e| e.id).max() {
            ids.ensure_after(max);
        }

        Self {
            events,
            ids,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }

    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn next_id(&self) -> EventId {
        self.ids.peek()
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Toolbar add: placeholder title, both times set to `now`.
    pub fn add(&mut self, now: DateTime<Utc>) -> &Event {
        let id = self.ids.allocate();
        let title = Event::placeholder_title(&self.title_prefix, id);
        debug!(%id, "adding event");
        self.push(Event::new(id, title, now, now))
    }

    /// Remove the event with `id`, if any.
    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let pos = self.events.iter().position(|e| e.id == id)?;
        debug!(%id, "removing event");
        Some(self.events.remove(pos))
    }

    /// Replace the whole record carrying `event.id`, keeping its position.
    /// When no such record exists nothing changes and `event` is dropped.
    pub fn replace(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                debug!(id = %event.id, "replacing event");
                *slot = event;
                true
            }
            None => {
                debug!(id = %event.id, "replace ignored, id not present");
                false
            }
        }
    }

    /// Append an event built from explicit fields under a freshly allocated id.
    pub fn upsert_new(
        &mut self,
        title: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> &Event {
        let id = self.ids.allocate();
        debug!(%id, "appending event from edit dialog");
        self.push(Event::new(id, title, start_time, end_time))
    }

    fn push(&mut self, event: Event) -> &Event {
        self.events.push(event);
        let last = self.events.len() - 1;
        &self.events[last]
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(IdSequence::default())
    }
}
