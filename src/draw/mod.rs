//! Drawing primitives shared by the board and its views.
//!
//! This module defines:
//! - [`Color`]: RGBA color representation and the ten-entry [`PALETTE`]
//! - [`Segment`]: one straight piece of a painted stroke
//! - [`Frame`]: the segments a view has drawn since its last clear
//! - Cairo rasterization (behind the `png` feature)

pub mod color;
pub mod frame;
#[cfg(feature = "png")]
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{Color, PALETTE, palette_color};
pub use frame::Frame;
pub use shape::Segment;

pub use color::{BLACK, BLUE, CYAN, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
