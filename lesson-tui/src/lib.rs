//! lesson-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod error;
pub mod slides;
pub mod stage;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, App, AppState};
pub use error::{Result, TuiError};
pub use stage::Stage;
