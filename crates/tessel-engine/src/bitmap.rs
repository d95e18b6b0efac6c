use std::fmt;

use crate::coords::{Color, Palette, Rect};
use crate::error::{GfxError, Result};
use crate::format::{FormatId, FormatRegistry, PixelFormat};

/// Format-tagged pixel buffer.
///
/// The descriptor is resolved once when the bitmap is built. The buffer is
/// always exactly `format.data_size(width, height)` bytes and starts zeroed,
/// which both 1-bpp formats read as background.
pub struct Bitmap {
    format: &'static dyn PixelFormat,
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocates a zeroed bitmap of a registered format.
    ///
    /// Negative extents are treated as zero.
    pub fn new(registry: &FormatRegistry, format: FormatId, width: i32, height: i32) -> Result<Self> {
        Ok(Self::with_format(registry.lookup(format)?, width, height))
    }

    /// Allocates a zeroed bitmap for an already resolved descriptor.
    pub fn with_format(format: &'static dyn PixelFormat, width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let data = vec![0; format.data_size(width, height)];
        Self { format, width, height, data }
    }

    /// Wraps a caller-provided buffer, e.g. a sprite baked into the binary.
    ///
    /// The buffer length must match the format's data size exactly.
    pub fn from_bytes(
        registry: &FormatRegistry,
        format: FormatId,
        width: i32,
        height: i32,
        data: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let descriptor = registry.lookup(format)?;
        let (width, height) = (width.max(0), height.max(0));
        let data = data.into();
        let expected = descriptor.data_size(width, height);
        if data.len() != expected {
            return Err(GfxError::BufferSize { format, expected, actual: data.len() });
        }
        Ok(Self { format: descriptor, width, height, data })
    }

    #[inline]
    pub fn format(&self) -> &'static dyn PixelFormat {
        self.format
    }

    #[inline]
    pub fn format_id(&self) -> FormatId {
        self.format.id()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `{0, 0, width, height}`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::with_size(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains_point(x, y)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Resets every pixel to the zero state.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Reads one pixel; `None` outside the bitmap.
    pub fn get_pixel(&self, palette: &Palette, x: i32, y: i32) -> Option<Color> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.format.get_pixel(self, &palette.colors(), x, y))
    }

    /// Writes one pixel; returns `false` (and writes nothing) outside the bitmap.
    pub fn put_pixel(&mut self, palette: &Palette, x: i32, y: i32, color: Color) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let format = self.format;
        format.put_pixel(self, &palette.colors(), x, y, color);
        true
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("format", &self.format.id())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
