pub mod draft;
pub mod event;
pub mod field;

pub use draft::{EventDraft, SaveRequest};
pub use event::{Event, EventId};
pub use field::{EventField, FieldValue};
