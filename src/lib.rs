//! Shared whiteboard model and headless canvas views.
//!
//! A [`PaintBoard`] owns the pending stroke of one whiteboard session and
//! broadcasts every painted segment and clear to the [`board::Renderer`]s
//! registered with it. The remaining modules supply the view side, file
//! configuration and scripted sessions so the model can be driven end to end
//! without a window system.

pub mod board;
pub mod config;
pub mod draw;
pub mod session;
pub mod util;
pub mod view;

pub use board::PaintBoard;
pub use config::Config;
