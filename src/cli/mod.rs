//! CLI interface: the application object, argument matching, and help
//! rendering.

pub mod app;
pub mod args;
pub mod factory;
pub mod flag;
pub mod help;

// Re-export main types
pub use app::*;
pub use args::*;
pub use flag::*;
