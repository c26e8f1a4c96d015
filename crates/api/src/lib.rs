//! Flashcards web server library.
//!
//! Exposes the building blocks (config, state, error handling, pages, routes)
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod pages;
pub mod response;
pub mod routes;
pub mod state;
