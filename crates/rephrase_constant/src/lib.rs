//! Shared constants for the query rephraser.

pub mod app;
pub mod completion;
pub mod env;
