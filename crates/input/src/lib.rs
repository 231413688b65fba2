//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It knows
//! nothing about the grid or the session; unmapped keys are left for the caller
//! to interpret.

pub mod map;

pub use tui_2048_types as types;

pub use map::{action_for_key, handle_key_event, should_force_quit};
