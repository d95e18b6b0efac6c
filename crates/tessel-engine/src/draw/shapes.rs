use crate::coords::{Color, Point, Rect};
use crate::device::DeviceContext;

use super::clip_line;

impl DeviceContext {
    /// Writes one pixel if it falls inside the clip region.
    ///
    /// Returns `false` when the pixel is clipped or outside the target.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let p = Point::new(x, y) + self.origin;
        let bounds = self.target.bounds();
        let visible = self
            .clip
            .iter()
            .filter_map(|r| r.intersect(bounds))
            .any(|r| r.contains_point(p.x, p.y));
        if !visible {
            return false;
        }
        self.dirty = true;
        self.target.put_pixel(&self.palette, p.x, p.y, color)
    }

    /// Draws the segment `(x0, y0)..=(x1, y1)`, clipped against every active
    /// clip rectangle in turn.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let from = Point::new(x0, y0) + self.origin;
        let to = Point::new(x1, y1) + self.origin;

        let Self { target, palette, clip, dirty, .. } = self;
        let bounds = target.bounds();
        let format = target.format();
        let colors = palette.colors();

        for rect in clip.iter().filter_map(|r| r.intersect(bounds)) {
            if let Some((a, b)) = clip_line(from, to, rect) {
                format.draw_line(target, &colors, a, b, color);
                *dirty = true;
            }
        }
    }

    /// Fills `rect` one scan row at a time.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (left, right) = (rect.x, rect.right() - 1);
        for y in rect.y..rect.bottom() {
            self.draw_line(left, y, right, y, color);
        }
    }

    /// [`fill_rect`](Self::fill_rect) with inclusive corners.
    pub fn fill_rect_points(&mut self, left: i32, top: i32, right: i32, bottom: i32, color: Color) {
        self.fill_rect(Rect::from_points(left, top, right, bottom), color);
    }

    /// One-pixel border along the inside edge of `rect`.
    pub fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (l, t, r, b) = (rect.x, rect.y, rect.right() - 1, rect.bottom() - 1);
        self.draw_line(l, t, r, t, color);
        self.draw_line(l, b, r, b, color);
        self.draw_line(l, t, l, b, color);
        self.draw_line(r, t, r, b, color);
    }

    /// [`rect_outline`](Self::rect_outline) with inclusive corners.
    pub fn rect_by_points(&mut self, left: i32, top: i32, right: i32, bottom: i32, color: Color) {
        self.rect_outline(Rect::from_points(left, top, right, bottom), color);
    }
}
