//! Cairo-based rasterization of view frames.

use super::color::{Color, WHITE};
use super::frame::Frame;
use super::shape::Segment;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Fills the whole canvas with the erased-board background.
pub fn render_background(ctx: &cairo::Context, width: i32, height: i32) {
    ctx.set_source_rgba(WHITE.r, WHITE.g, WHITE.b, WHITE.a);
    ctx.set_operator(cairo::Operator::Source);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();
    ctx.set_operator(cairo::Operator::Over);
}

/// Renders every segment of a frame in draw order.
pub fn render_frame(ctx: &cairo::Context, frame: &Frame) {
    for segment in &frame.segments {
        render_segment(ctx, segment);
    }
}

/// Renders a single segment with round caps so chained segments join cleanly.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment) {
    let Color { r, g, b, a } = segment.color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(segment.thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(segment.from.x as f64, segment.from.y as f64);
    ctx.line_to(segment.to.x as f64, segment.to.y as f64);
    let _ = ctx.stroke();
}

/// Rasterizes a frame onto a fresh white surface of the given size.
pub fn rasterize(frame: &Frame, width: i32, height: i32) -> Result<cairo::ImageSurface> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        render_background(&ctx, width, height);
        render_frame(&ctx, frame);
    }
    surface.flush();
    Ok(surface)
}

/// Rasterizes a frame and writes it as a PNG file.
pub fn write_png(frame: &Frame, width: i32, height: i32, path: &Path) -> Result<()> {
    let surface = rasterize(frame, width, height)?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to encode PNG to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::draw::RED;

    #[test]
    fn rasterized_segment_paints_its_color() {
        let mut frame = Frame::new();
        frame.push(Segment {
            from: Point::new(10, 50),
            to: Point::new(90, 50),
            color: RED,
            thick: 4.0,
        });

        let mut surface = rasterize(&frame, 100, 100).unwrap();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // ARGB32 pixels are native-endian u32 words.
        let offset = 50 * stride + 50 * 4;
        let pixel = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        assert_eq!(pixel, 0xFFFF_0000);
    }

    #[test]
    fn empty_frame_is_white() {
        let mut surface = rasterize(&Frame::new(), 20, 20).unwrap();
        let data = surface.data().unwrap();
        assert!(data.iter().all(|byte| *byte == 0xFF));
    }
}
