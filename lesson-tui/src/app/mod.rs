//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Runner: Routes keys between the global keymap and the mounted slide
//!
//! Navigation and overlays are reducer state; exercise state belongs to the
//! mounted slide on the stage.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod runner;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use event::{EventHandler, TuiEvent};
pub use reducer::{is_global_key, reduce};
pub use runner::App;
pub use state::{AppState, UiConfig};
