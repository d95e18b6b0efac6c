use crate::bitmap::Bitmap;
use crate::coords::{Point, Rect};
use crate::device::DeviceContext;

impl DeviceContext {
    /// Copies `source` so that its top-left pixel lands on `(x, y)`.
    ///
    /// Each clip rectangle is narrowed to the target and to the source's
    /// footprint; the format pair's block copy then runs once per remaining
    /// area. Source pixels that decode to a fully transparent color are left
    /// out, which gives sprites a one-bit mask.
    pub fn bitblt(&mut self, x: i32, y: i32, source: &Bitmap) {
        let dest = Rect::new(x, y, source.width(), source.height()).offset_by(self.origin);
        if dest.is_empty() {
            return;
        }

        let Self { registry, target, palette, clip, dirty, .. } = self;
        let blit = registry.lookup_blit(source.format_id(), target.format_id());
        let bounds = target.bounds();
        let colors = palette.colors();

        for area in clip.iter().filter_map(|r| r.intersect(bounds)?.intersect(dest)) {
            let src_at = Point::new(area.x - dest.x, area.y - dest.y);
            blit(source, src_at, target, area, &colors);
            *dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Color, Palette};
    use crate::device::ContextConfig;
    use crate::format::{FormatId, FormatRegistry};

    fn ctx(format: FormatId, w: i32, h: i32) -> DeviceContext {
        DeviceContext::for_format(format, w, h, ContextConfig::default()).unwrap()
    }

    fn solid(format: FormatId, w: i32, h: i32) -> Bitmap {
        let reg = FormatRegistry::with_builtin();
        let mut bmp = Bitmap::new(&reg, format, w, h).unwrap();
        bmp.data_mut().fill(0xFF);
        bmp
    }

    fn lit(c: &DeviceContext) -> usize {
        let bmp = c.target();
        (0..bmp.height())
            .flat_map(|y| (0..bmp.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| c.get_pixel(x, y) == Some(Color::WHITE))
            .count()
    }

    #[test]
    fn opaque_source_into_half_clip_copies_left_half() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 8);
        c.intersect_clip(Rect::new(0, 0, 4, 8));
        c.bitblt(0, 0, &solid(FormatId::MONO_IDEAL, 8, 8));
        assert_eq!(c.target().data(), &[0xF0; 8]);
        assert!(c.is_dirty());
    }

    #[test]
    fn accelerated_pair_matches_expectation() {
        let mut c = ctx(FormatId::MONO_VERTICAL, 8, 16);
        c.intersect_clip(Rect::new(0, 0, 4, 16));
        c.bitblt(0, 0, &solid(FormatId::MONO_IDEAL, 8, 16));
        assert_eq!(lit(&c), 4 * 16);
        assert_eq!(c.get_pixel(3, 15), Some(Color::WHITE));
        assert_eq!(c.get_pixel(4, 0), Some(Color::BLACK));
    }

    #[test]
    fn generic_pair_handles_offsets() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 8);
        let reg = FormatRegistry::with_builtin();
        let pal = Palette::default();
        let mut sprite = Bitmap::new(&reg, FormatId::MONO_VERTICAL, 3, 3).unwrap();
        sprite.put_pixel(&pal, 2, 2, Color::WHITE);

        // partially off the top-left corner: only source (2,2) lands at (0,0)
        c.bitblt(-2, -2, &sprite);
        assert_eq!(lit(&c), 1);
        assert_eq!(c.get_pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn origin_moves_the_destination() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 8);
        c.offset_origin(6, 6);
        c.bitblt(0, 0, &solid(FormatId::MONO_IDEAL, 4, 4));
        assert_eq!(lit(&c), 4);
        assert_eq!(c.target().get_pixel(c.palette(), 7, 7), Some(Color::WHITE));
    }

    #[test]
    fn transparent_background_masks_the_sprite() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 1);
        c.fill_rect(Rect::new(0, 0, 8, 1), Color::WHITE);
        c.set_background_color(Color::TRANSPARENT);

        let reg = FormatRegistry::with_builtin();
        let sprite = Bitmap::from_bytes(&reg, FormatId::MONO_IDEAL, 8, 1, vec![0x0Fu8]).unwrap();
        c.bitblt(0, 0, &sprite);
        assert_eq!(c.target().data(), &[0xFF]);
    }

    #[test]
    fn excluded_hole_is_not_written() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 8);
        c.exclude_clip(Rect::new(2, 2, 4, 4)).unwrap();
        c.bitblt(0, 0, &solid(FormatId::MONO_IDEAL, 8, 8));
        assert_eq!(lit(&c), 64 - 16);
        assert_eq!(c.get_pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn empty_clip_draws_nothing() {
        let mut c = ctx(FormatId::MONO_IDEAL, 8, 8);
        c.clear_clip();
        c.bitblt(0, 0, &solid(FormatId::MONO_IDEAL, 8, 8));
        assert_eq!(lit(&c), 0);
        assert!(!c.is_dirty());
    }
}
