use crate::models::EventId;

/// Monotonic id allocator owned by the event store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Id the next allocation will hand out.
    pub fn peek(&self) -> EventId {
        EventId(self.next)
    }

    /// Hand out the current id and advance. Saturates at `u32::MAX`.
    pub fn allocate(&mut self) -> EventId {
        let id = EventId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Move the sequence past `id` if it is not already.
    pub fn ensure_after(&mut self, id: EventId) {
        if self.next <= id.0 {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
