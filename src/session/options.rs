use crate::config::Config;
use crate::view::ViewStyle;

/// Runtime options for building a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub width: i32,
    pub height: i32,
    /// How many views open on the shared board
    pub windows: usize,
    pub style: ViewStyle,
}

impl SessionOptions {
    /// Creates options for a board of the given size with default-styled views.
    pub fn new(width: i32, height: i32, windows: usize) -> Self {
        Self {
            width,
            height,
            windows,
            style: ViewStyle::default(),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            width: config.board.width,
            height: config.board.height,
            windows: config.board.windows,
            style: ViewStyle {
                color: config.drawing.default_color.to_color(),
                thickness: config.drawing.stroke_thickness,
            },
        }
    }
}
