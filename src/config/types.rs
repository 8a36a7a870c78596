//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shared board settings.
///
/// Every view opened at startup gets a board of this size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Board width in pixels (valid range: 300 - 1000)
    #[serde(default = "default_board_side")]
    pub width: i32,

    /// Board height in pixels (valid range: 300 - 1000)
    #[serde(default = "default_board_side")]
    pub height: i32,

    /// Number of views sharing the board (valid range: 1 - 16)
    #[serde(default = "default_windows")]
    pub windows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_board_side(),
            height: default_board_side(),
            windows: default_windows(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the pen each view starts with; users switch colors at runtime
/// through the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - a palette name or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Line width of painted segments in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            stroke_thickness: default_stroke_thickness(),
        }
    }
}

fn default_board_side() -> i32 {
    500
}

fn default_windows() -> usize {
    3
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_thickness() -> f64 {
    crate::view::DEFAULT_STROKE_THICKNESS
}
