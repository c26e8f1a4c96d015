//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod flashcard_repo;
pub mod flashcard_set_repo;
pub mod review_repo;
pub mod telemetry_repo;

pub use comment_repo::CommentRepo;
pub use flashcard_repo::FlashcardRepo;
pub use flashcard_set_repo::FlashcardSetRepo;
pub use review_repo::ReviewRepo;
pub use telemetry_repo::TelemetryRepo;
