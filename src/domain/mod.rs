// src/domain/mod.rs
pub mod clock;
pub mod error;
pub mod note;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use note::Note;
