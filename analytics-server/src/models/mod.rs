//! Domain models
//!
//! Request bodies are checked when they are deserialized; anything that
//! does not fit the shape becomes a ValidationError, not a panic.

pub mod event;
pub mod item;
pub mod validation;

pub use event::{Event, EventList};
pub use item::{Item, NewItem};
pub use validation::ValidationError;
