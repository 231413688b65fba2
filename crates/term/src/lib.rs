//! Terminal rendering for the 2048 game.
//!
//! Rendering happens in two steps: [`GameView`] turns a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable), then
//! [`TerminalRenderer`] flushes framebuffers to the terminal, rewriting only
//! what changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::{color_for, color_for_rank, text_color_for, text_color_for_rank};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
