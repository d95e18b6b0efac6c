//! Pixel encodings and the registry that resolves them.
//!
//! A [`PixelFormat`] implements one encoding: how many bytes a bitmap of a
//! given size needs, how to read and write a single pixel, and how to draw a
//! line. Bitmaps resolve their format once at construction and keep the
//! descriptor, so per-pixel calls never go back to the registry.
//!
//! The [`FormatRegistry`] also maps `(source, destination)` format pairs to
//! specialised block-copy routines. Pairs without an entry use
//! [`generic_blit`], a per-pixel loop through both descriptors.

mod blit;
mod id;
mod line;
mod mono;
mod registry;

pub use blit::{BlitFn, generic_blit};
pub use id::FormatId;
pub use line::bresenham;
pub use mono::{Mono1Ideal, Mono1Vertical};
pub use registry::FormatRegistry;

use std::fmt;

use crate::bitmap::Bitmap;
use crate::coords::{Color, Point};

/// One pixel encoding.
///
/// Pixel accessors receive coordinates the caller has already checked
/// against the bitmap extent. Implementations must still never panic on a
/// stray coordinate: reads of missing bytes yield the background entry and
/// writes to them are dropped.
pub trait PixelFormat: fmt::Debug + Send + Sync {
    fn id(&self) -> FormatId;

    /// Bytes needed for a `width × height` bitmap. Non-positive extents need none.
    fn data_size(&self, width: i32, height: i32) -> usize;

    fn get_pixel(&self, bitmap: &Bitmap, palette: &[Color], x: i32, y: i32) -> Color;

    fn put_pixel(&self, bitmap: &mut Bitmap, palette: &[Color], x: i32, y: i32, color: Color);

    /// Draws the segment `from..=to`, both endpoints already inside the bitmap.
    fn draw_line(&self, bitmap: &mut Bitmap, palette: &[Color], from: Point, to: Point, color: Color) {
        bresenham(from, to, |x, y| self.put_pixel(bitmap, palette, x, y, color));
    }
}
