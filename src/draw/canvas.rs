//! Owned raster surface backed by an RGBA pixel buffer.
//!
//! The canvas is the single mutable drawing surface. It is only written
//! through the brush and shape stroking routines or by restoring a history
//! snapshot; previews rely on restore-then-redraw, so nothing here tracks
//! partial state.

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgba, RgbaImage};
use thiserror::Error;

use super::Color;
use super::history::Snapshot;

/// Errors produced when exporting the raster.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// The mutable pixel surface the engine draws on.
///
/// Pixels are stored as 8-bit RGBA. The background color is part of the
/// canvas because erasing is defined as painting the background, not as
/// clearing to transparency.
pub struct Canvas {
    image: RgbaImage,
    background: Color,
}

impl Canvas {
    /// Creates a canvas of the given size, filled with the background color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let image = RgbaImage::from_pixel(width, height, background.to_rgba8());
        Self { image, background }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The background color used for clearing and erasing.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Read-only view of the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fills the whole surface with the background color.
    pub fn clear(&mut self) {
        let pixel = self.background.to_rgba8();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    /// Writes one pixel with alpha-over blending.
    ///
    /// Coordinates outside the surface are ignored, which lets callers stamp
    /// shapes that extend past the edges without pre-clipping. Fully opaque
    /// sources take a direct-write fast path.
    pub fn blend_pixel(&mut self, x: i32, y: i32, pixel: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }

        let src_a = pixel[3] as f64 / 255.0;
        if src_a >= 1.0 {
            self.image.put_pixel(x, y, pixel);
            return;
        }
        if src_a <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        let dst_a = dst[3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }
        let blend = |s: u8, d: u8| -> u8 {
            ((s as f64 * src_a + d as f64 * dst_a * (1.0 - src_a)) / out_a)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            blend(pixel[0], dst[0]),
            blend(pixel[1], dst[1]),
            blend(pixel[2], dst[2]),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]);
    }

    /// Returns the pixel at the given position, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        Some(*self.image.get_pixel(x, y))
    }

    /// Captures the current pixel state as an immutable snapshot.
    ///
    /// The copy is taken synchronously; nothing about the snapshot depends on
    /// the canvas afterwards.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.image)
    }

    /// Repaints the surface from a snapshot.
    ///
    /// The surface is cleared to the background first, then the snapshot is
    /// laid down at the origin. A snapshot larger than the surface is cropped
    /// at the right/bottom edges; a smaller one leaves a background border.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.clear();
        image::imageops::replace(&mut self.image, snapshot.image(), 0, 0);
    }

    /// Replaces the surface with a freshly cleared one of the given size.
    ///
    /// Existing content is dropped; callers re-paint from history afterwards
    /// so the drawing survives at its original pixel offsets.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::from_pixel(width, height, self.background.to_rgba8());
    }

    /// Encodes the current surface as lossless PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        let encoder = PngEncoder::new(&mut bytes);
        encoder.write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}
