//! Row models and input DTOs, one module per table.

pub mod comment;
pub mod flashcard;
pub mod flashcard_set;
pub mod review;
pub mod telemetry;
