//! Configuration store and file locations
//!
//! The store keeps the small amount of persistent client state (the
//! targeted cluster) behind a persister so tests can swap the file for
//! an in-memory stand-in.

pub mod paths;
pub mod store;

// Re-export main types
pub use paths::*;
pub use store::*;
