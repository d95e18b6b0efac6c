use crate::bitmap::Bitmap;
use crate::coords::{BACKGROUND_INDEX, Color, FOREGROUND_INDEX};

use super::{FormatId, PixelFormat};

/// Where a 1-bpp pixel lives inside the byte buffer.
pub(crate) trait BitLayout {
    fn data_size(width: i32, height: i32) -> usize;

    /// Byte index and bit mask for an in-range pixel.
    fn locate(width: i32, height: i32, x: i32, y: i32) -> (usize, u8);
}

/// 1 bpp, row-major. Each row starts on a byte boundary and the leftmost
/// pixel of a byte is its most significant bit.
#[derive(Debug, Copy, Clone, Default)]
pub struct Mono1Ideal;

/// 1 bpp in eight-pixel vertical strips (pages). Byte `page · width + x`
/// holds rows `8·page ..= 8·page + 7` of column `x`, top row in bit 0.
#[derive(Debug, Copy, Clone, Default)]
pub struct Mono1Vertical;

impl BitLayout for Mono1Ideal {
    fn data_size(width: i32, height: i32) -> usize {
        if width <= 0 || height <= 0 {
            return 0;
        }
        (width as usize).div_ceil(8) * height as usize
    }

    #[inline]
    fn locate(width: i32, _height: i32, x: i32, y: i32) -> (usize, u8) {
        let stride = (width as usize).div_ceil(8);
        (y as usize * stride + x as usize / 8, 0x80 >> (x & 7))
    }
}

impl BitLayout for Mono1Vertical {
    fn data_size(width: i32, height: i32) -> usize {
        if width <= 0 || height <= 0 {
            return 0;
        }
        (height as usize).div_ceil(8) * width as usize
    }

    #[inline]
    fn locate(width: i32, _height: i32, x: i32, y: i32) -> (usize, u8) {
        ((y as usize / 8) * width as usize + x as usize, 1 << (y & 7))
    }
}

/// Palette entry for a stored bit.
#[inline]
pub(crate) fn decode(palette: &[Color], on: bool) -> Color {
    let index = if on { FOREGROUND_INDEX } else { BACKGROUND_INDEX };
    palette.get(index).copied().unwrap_or_default()
}

/// A pixel is set iff the color matches the foreground entry, alpha ignored.
#[inline]
pub(crate) fn encode(palette: &[Color], color: Color) -> bool {
    palette.get(FOREGROUND_INDEX).is_some_and(|fg| fg.same_rgb(color))
}

#[inline]
fn in_range(bitmap: &Bitmap, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && x < bitmap.width() && y < bitmap.height()
}

fn read_bit<L: BitLayout>(bitmap: &Bitmap, x: i32, y: i32) -> bool {
    if !in_range(bitmap, x, y) {
        return false;
    }
    let (byte, mask) = L::locate(bitmap.width(), bitmap.height(), x, y);
    bitmap.data().get(byte).is_some_and(|b| b & mask != 0)
}

fn write_bit<L: BitLayout>(bitmap: &mut Bitmap, x: i32, y: i32, on: bool) {
    if !in_range(bitmap, x, y) {
        return;
    }
    let (byte, mask) = L::locate(bitmap.width(), bitmap.height(), x, y);
    if let Some(b) = bitmap.data_mut().get_mut(byte) {
        if on { *b |= mask } else { *b &= !mask }
    }
}

impl PixelFormat for Mono1Ideal {
    fn id(&self) -> FormatId {
        FormatId::MONO_IDEAL
    }

    fn data_size(&self, width: i32, height: i32) -> usize {
        <Self as BitLayout>::data_size(width, height)
    }

    fn get_pixel(&self, bitmap: &Bitmap, palette: &[Color], x: i32, y: i32) -> Color {
        decode(palette, read_bit::<Self>(bitmap, x, y))
    }

    fn put_pixel(&self, bitmap: &mut Bitmap, palette: &[Color], x: i32, y: i32, color: Color) {
        write_bit::<Self>(bitmap, x, y, encode(palette, color));
    }
}

impl PixelFormat for Mono1Vertical {
    fn id(&self) -> FormatId {
        FormatId::MONO_VERTICAL
    }

    fn data_size(&self, width: i32, height: i32) -> usize {
        <Self as BitLayout>::data_size(width, height)
    }

    fn get_pixel(&self, bitmap: &Bitmap, palette: &[Color], x: i32, y: i32) -> Color {
        decode(palette, read_bit::<Self>(bitmap, x, y))
    }

    fn put_pixel(&self, bitmap: &mut Bitmap, palette: &[Color], x: i32, y: i32, color: Color) {
        write_bit::<Self>(bitmap, x, y, encode(palette, color));
    }
}
