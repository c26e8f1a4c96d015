//! Domain types and business rules shared by the database and API crates.

pub mod daily_limit;
pub mod error;
pub mod review;
pub mod types;
pub mod validation;
