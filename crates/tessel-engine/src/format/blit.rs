use crate::bitmap::Bitmap;
use crate::coords::{Color, Point, Rect};

use super::mono::{BitLayout, decode, encode};

/// Block copy from `src` into `area` of `dst`.
///
/// `src_at` is the source pixel that lands on `area`'s top-left corner. The
/// caller has already clipped `area` to the destination and the source
/// extent. Source pixels that decode to a fully transparent color are
/// skipped; everything else is written through the destination encoding.
pub type BlitFn = fn(src: &Bitmap, src_at: Point, dst: &mut Bitmap, area: Rect, palette: &[Color]);

/// Per-pixel copy through both format descriptors. Works for any pair.
pub fn generic_blit(src: &Bitmap, src_at: Point, dst: &mut Bitmap, area: Rect, palette: &[Color]) {
    let (from, to) = (src.format(), dst.format());
    for row in 0..area.height {
        for col in 0..area.width {
            let color = from.get_pixel(src, palette, src_at.x + col, src_at.y + row);
            if color.is_transparent() {
                continue;
            }
            to.put_pixel(dst, palette, area.x + col, area.y + row, color);
        }
    }
}

/// Bit-to-bit copy between two 1-bpp layouts.
///
/// Both layouts decode a bit through the same two palette entries, so the
/// outcome for a set and a clear source bit is fixed for the whole copy:
/// skip (transparent entry), set, or clear.
pub(crate) fn mono_blit<S: BitLayout, D: BitLayout>(
    src: &Bitmap,
    src_at: Point,
    dst: &mut Bitmap,
    area: Rect,
    palette: &[Color],
) {
    let outcome = |on: bool| {
        let color = decode(palette, on);
        (!color.is_transparent()).then(|| encode(palette, color))
    };
    let plan = [outcome(false), outcome(true)];
    if plan == [None, None] || area.is_empty() {
        return;
    }

    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (dst.width(), dst.height());
    let source = src.data();
    let target = dst.data_mut();

    for row in 0..area.height {
        let (sy, dy) = (src_at.y + row, area.y + row);
        for col in 0..area.width {
            let (sx, dx) = (src_at.x + col, area.x + col);
            let (sb, sm) = S::locate(sw, sh, sx, sy);
            let on = source.get(sb).is_some_and(|b| b & sm != 0);
            let Some(set) = plan[usize::from(on)] else { continue };

            let (db, dm) = D::locate(dw, dh, dx, dy);
            if let Some(b) = target.get_mut(db) {
                if set { *b |= dm } else { *b &= !dm }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Mono1Ideal, Mono1Vertical, PixelFormat};

    const PAL: [Color; 2] = [Color::BLACK, Color::WHITE];

    fn checker(format: &'static dyn PixelFormat, w: i32, h: i32) -> Bitmap {
        let mut bmp = Bitmap::with_format(format, w, h);
        for y in 0..h {
            for x in 0..w {
                let c = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
                format.put_pixel(&mut bmp, &PAL, x, y, c);
            }
        }
        bmp
    }

    fn pixels(bmp: &Bitmap, pal: &[Color]) -> Vec<Color> {
        let mut out = Vec::new();
        for y in 0..bmp.height() {
            for x in 0..bmp.width() {
                out.push(bmp.format().get_pixel(bmp, pal, x, y));
            }
        }
        out
    }

    #[test]
    fn generic_copies_offset_region() {
        let src = checker(&Mono1Ideal, 4, 4);
        let mut dst = Bitmap::with_format(&Mono1Ideal, 8, 8);
        generic_blit(&src, Point::new(1, 0), &mut dst, Rect::new(5, 2, 3, 2), &PAL);

        let f = dst.format();
        assert_eq!(f.get_pixel(&dst, &PAL, 5, 2), Color::BLACK);
        assert_eq!(f.get_pixel(&dst, &PAL, 6, 2), Color::WHITE);
        assert_eq!(f.get_pixel(&dst, &PAL, 5, 3), Color::WHITE);
        assert_eq!(dst.data().iter().map(|b| b.count_ones()).sum::<u32>(), 3);
    }

    #[test]
    fn transparent_background_is_skipped() {
        let pal = [Color::TRANSPARENT, Color::WHITE];
        let src = checker(&Mono1Ideal, 2, 2);
        let mut dst = Bitmap::with_format(&Mono1Ideal, 2, 2);
        // (1,0) already lit; the source is clear there, so it must survive
        dst.data_mut()[0] = 0x40;
        generic_blit(&src, Point::zero(), &mut dst, Rect::with_size(2, 2), &pal);
        assert_eq!(dst.data(), &[0xC0, 0x40]);
    }

    #[test]
    fn mono_paths_match_generic() {
        let palettes = [
            [Color::BLACK, Color::WHITE],
            [Color::TRANSPARENT, Color::WHITE],
            [Color::BLACK, Color::TRANSPARENT],
        ];
        for pal in &palettes {
            let src = checker(&Mono1Ideal, 9, 11);
            let area = Rect::new(2, 3, 7, 9);
            let at = Point::new(1, 2);

            let mut fast = Bitmap::with_format(&Mono1Vertical, 12, 16);
            let mut slow = Bitmap::with_format(&Mono1Vertical, 12, 16);
            fast.data_mut().iter_mut().step_by(3).for_each(|b| *b = 0xA5);
            slow.data_mut().copy_from_slice(fast.data());

            mono_blit::<Mono1Ideal, Mono1Vertical>(&src, at, &mut fast, area, pal);
            generic_blit(&src, at, &mut slow, area, pal);
            assert_eq!(pixels(&fast, pal), pixels(&slow, pal), "palette {pal:?}");
            assert_eq!(fast.data(), slow.data());

            let mut same_fast = Bitmap::with_format(&Mono1Ideal, 12, 16);
            let mut same_slow = Bitmap::with_format(&Mono1Ideal, 12, 16);
            mono_blit::<Mono1Ideal, Mono1Ideal>(&src, at, &mut same_fast, area, pal);
            generic_blit(&src, at, &mut same_slow, area, pal);
            assert_eq!(same_fast.data(), same_slow.data());
        }
    }
}
