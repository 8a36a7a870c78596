//! Utility functions for palette names and dirty-region geometry.
//!
//! This module provides:
//! - Name and index lookups into the shared palette
//! - Reverse mapping from a color to its palette name (for logs)
//! - The [`Rect`] helper used for segment bounding boxes

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to palette colors.
///
/// Used by the configuration system and input scripts.
///
/// # Supported Names (case-insensitive)
/// - "black", "gray"/"grey", "cyan", "blue", "green", "red", "orange",
///   "yellow", "pink", "white"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "cyan" => Some(CYAN),
        "blue" => Some(BLUE),
        "green" => Some(GREEN),
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Resolves a palette token: either a color name or a palette button index.
pub fn parse_palette_token(token: &str) -> Option<Color> {
    match token.parse::<usize>() {
        Ok(index) => palette_color(index),
        Err(_) => name_to_color(token),
    }
}

/// Maps a Color value to its palette name.
///
/// Channels, alpha included, must be within 0.05 of a palette entry.
/// Returns "Custom" for anything else, translucent palette colors too.
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMES: [&str; 10] = [
        "Black", "Gray", "Cyan", "Blue", "Green", "Red", "Orange", "Yellow", "Pink", "White",
    ];

    PALETTE
        .iter()
        .position(|entry| {
            (entry.r - color.r).abs() < 0.05
                && (entry.g - color.g).abs() < 0.05
                && (entry.b - color.b).abs() < 0.05
                && (entry.a - color.a).abs() < 0.05
        })
        .map(|index| NAMES[index])
        .unwrap_or("Custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents wider than `i32::MAX` are clipped to it.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self
            .x
            .saturating_add(self.width)
            .max(other.x.saturating_add(other.width));
        let max_y = self
            .y
            .saturating_add(self.height)
            .max(other.y.saturating_add(other.height));
        Rect {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("Cyan").unwrap(), CYAN);
        assert_eq!(name_to_color("GREY").unwrap(), GRAY);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn palette_tokens_accept_names_and_indices() {
        assert_eq!(parse_palette_token("3").unwrap(), BLUE);
        assert_eq!(parse_palette_token("red").unwrap(), RED);
        assert!(parse_palette_token("10").is_none());
        assert!(parse_palette_token("mauve").is_none());
    }

    #[test]
    fn color_to_name_matches_palette() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::new(0.42, 0.1, 0.9, 1.0)), "Custom");
    }

    #[test]
    fn translucent_palette_color_is_custom() {
        assert_eq!(color_to_name(&Color::new(1.0, 0.0, 0.0, 0.5)), "Custom");
        assert_eq!(color_to_name(&Color::new(1.0, 0.0, 0.0, 0.98)), "Red");
    }

    #[test]
    fn union_covers_both_rectangles() {
        let a = Rect::new(0, 0, 10, 10).unwrap();
        let b = Rect::new(20, 5, 5, 20).unwrap();
        assert_eq!(a.union(b), Rect::new(0, 0, 25, 25).unwrap());
    }

    #[test]
    fn empty_rectangles_are_rejected() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(4, 4, 4, 9).is_none());
    }

    #[test]
    fn extreme_rectangles_saturate() {
        let wide = Rect::from_min_max(i32::MIN, 0, i32::MAX, 10).unwrap();
        assert_eq!(wide.width, i32::MAX);

        let far = Rect::new(i32::MAX - 5, i32::MAX - 5, 100, 100).unwrap();
        let near = Rect::new(0, 0, 10, 10).unwrap();
        let merged = near.union(far);
        assert_eq!(merged.x, 0);
        assert_eq!(merged.width, i32::MAX);
        assert_eq!(merged.height, i32::MAX);
    }
}
