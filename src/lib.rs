//! ltc - command-line client for the Lattice orchestration platform
//!
//! This crate builds the command-line application object, validates
//! user-supplied flags against each command's declared flag set, detects
//! help requests, and renders help templates. The platform itself is
//! reached through the command actions; this crate only provides the
//! argument-handling shell around them.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;

// Re-export commonly used types
pub use error::{LtcError, Result};

/// Current version of ltc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
