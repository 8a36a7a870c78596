//! Errors raised by the paint board.

use thiserror::Error;

/// Failures of a board call. A failed call never mutates state or notifies observers.
///
/// Out-of-bounds coordinates are not errors: they reset the pending stroke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board size {width}x{height} is invalid: width and height must be within 300-1000")]
    InvalidDimension { width: i32, height: i32 },

    #[error("Stroke color is required")]
    NullColor,

    #[error("Observer handle is required")]
    NullObserver,
}
