use crate::coords::{Color, Rect};
use crate::device::DeviceContext;

/// Linear channel ramp in 8-bit fixed point.
///
/// Each channel is held as `value << 8` and advanced by
/// `((end − start) << 8) / steps`, so long ramps do not drift. Every row is
/// opaque.
#[derive(Debug, Clone)]
struct Ramp {
    channels: [i32; 3],
    deltas: [i32; 3],
}

impl Ramp {
    fn new(start: Color, end: Color, steps: i32) -> Self {
        let steps = steps.max(1);
        let from = [start.red(), start.green(), start.blue()].map(i32::from);
        let to = [end.red(), end.green(), end.blue()].map(i32::from);
        Self {
            channels: from.map(|c| c << 8),
            deltas: [0, 1, 2].map(|i| ((to[i] - from[i]) << 8) / steps),
        }
    }

    fn color(&self) -> Color {
        let [r, g, b] = self.channels.map(|c| (c >> 8).clamp(0, 255) as u8);
        Color::rgb(r, g, b)
    }

    fn advance(&mut self) {
        for (c, d) in self.channels.iter_mut().zip(self.deltas) {
            *c += d;
        }
    }
}

impl DeviceContext {
    /// Fills `rect` row by row, blending from `top` on the first row towards
    /// `bottom` on the last.
    pub fn gradient_rect(&mut self, rect: Rect, top: Color, bottom: Color) {
        if rect.is_empty() {
            return;
        }
        let mut ramp = Ramp::new(top, bottom, rect.height);
        let (left, right) = (rect.x, rect.right() - 1);
        for y in rect.y..rect.bottom() {
            self.draw_line(left, y, right, y, ramp.color());
            ramp.advance();
        }
    }

    /// [`gradient_rect`](Self::gradient_rect) with inclusive corners.
    pub fn gradient_by_points(&mut self, left: i32, top: i32, right: i32, bottom: i32, start: Color, end: Color) {
        self.gradient_rect(Rect::from_points(left, top, right, bottom), start, end);
    }

    /// Fills `rect` from both horizontal edges towards the middle: the outer
    /// rows get `outer`, the centre row(s) approach `inner`.
    pub fn gradient_inward(&mut self, rect: Rect, outer: Color, inner: Color) {
        if rect.is_empty() {
            return;
        }
        let mut ramp = Ramp::new(outer, inner, rect.height / 2);
        let (left, right) = (rect.x, rect.right() - 1);
        let (mut top, mut bottom) = (rect.y, rect.bottom() - 1);
        while top <= bottom {
            let color = ramp.color();
            self.draw_line(left, top, right, top, color);
            if bottom != top {
                self.draw_line(left, bottom, right, bottom, color);
            }
            if bottom - top < 2 {
                break;
            }
            ramp.advance();
            top += 1;
            bottom -= 1;
        }
    }
}
