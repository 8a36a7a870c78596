//! Shared paint model and its observer contract.
//!
//! A [`PaintBoard`] is the single source of truth for one whiteboard session:
//! it owns the canvas dimensions and the pending stroke segment, and fans
//! every accepted segment or clear out to each registered [`Renderer`] in
//! registration order, including the view that produced the input.

pub mod error;
pub mod model;
pub mod point;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use error::BoardError;
pub use model::{MAX_DIMENSION, MIN_DIMENSION, PaintBoard};
pub use point::Point;
pub use renderer::{Renderer, RendererRef};
