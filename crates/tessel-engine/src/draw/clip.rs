use crate::coords::{Point, Rect};

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Each endpoint settles after at most two moves.
const MAX_MOVES: usize = 4;

/// Pixel rectangle as inclusive integer edges.
#[derive(Copy, Clone)]
struct Bounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Bounds {
    fn of(rect: Rect) -> Self {
        Self {
            x0: i64::from(rect.x),
            y0: i64::from(rect.y),
            x1: i64::from(rect.x) + i64::from(rect.width) - 1,
            y1: i64::from(rect.y) + i64::from(rect.height) - 1,
        }
    }
}

/// Position along the segment as the exact fraction `num / den`, `den > 0`.
#[derive(Copy, Clone)]
struct Param {
    num: i128,
    den: i128,
}

impl Param {
    const START: Self = Self { num: 0, den: 1 };
    const END: Self = Self { num: 1, den: 1 };

    fn ratio(num: i128, den: i128) -> Self {
        if den < 0 { Self { num: -num, den: -den } } else { Self { num, den } }
    }
}

/// The unclipped segment. Every projection is taken against these original
/// endpoints so rounding never bends the line.
///
/// Edges sit on pixel boundaries (half a pixel outside the outermost pixel
/// centres); coordinates are doubled to keep them integral.
struct Segment {
    ax: i128,
    ay: i128,
    dx: i128,
    dy: i128,
    left: i128,
    right: i128,
    top: i128,
    bottom: i128,
}

impl Segment {
    fn new(from: Point, to: Point, b: Bounds) -> Self {
        let (ax, ay) = (i128::from(from.x), i128::from(from.y));
        Self {
            ax,
            ay,
            dx: i128::from(to.x) - ax,
            dy: i128::from(to.y) - ay,
            left: 2 * i128::from(b.x0) - 1,
            right: 2 * i128::from(b.x1) + 1,
            top: 2 * i128::from(b.y0) - 1,
            bottom: 2 * i128::from(b.y1) + 1,
        }
    }

    /// Exact out-code of the point at `t`.
    fn out_code(&self, t: Param) -> u8 {
        let x = 2 * (self.ax * t.den + self.dx * t.num);
        let y = 2 * (self.ay * t.den + self.dy * t.num);
        let mut code = 0;
        if x < self.left * t.den {
            code |= LEFT;
        } else if x > self.right * t.den {
            code |= RIGHT;
        }
        if y < self.top * t.den {
            code |= TOP;
        } else if y > self.bottom * t.den {
            code |= BOTTOM;
        }
        code
    }

    /// Where the line meets the edge named by the first bit of `code`.
    fn crossing(&self, code: u8) -> Param {
        if code & TOP != 0 {
            Param::ratio(self.top - 2 * self.ay, 2 * self.dy)
        } else if code & BOTTOM != 0 {
            Param::ratio(self.bottom - 2 * self.ay, 2 * self.dy)
        } else if code & LEFT != 0 {
            Param::ratio(self.left - 2 * self.ax, 2 * self.dx)
        } else {
            Param::ratio(self.right - 2 * self.ax, 2 * self.dx)
        }
    }

    /// Nearest pixel to the point at `t`, kept inside `b`.
    fn pixel(&self, t: Param, b: Bounds) -> Point {
        let x = self.ax + round_div(self.dx * t.num, t.den);
        let y = self.ay + round_div(self.dy * t.num, t.den);
        point(
            x.clamp(i128::from(b.x0), i128::from(b.x1)),
            y.clamp(i128::from(b.y0), i128::from(b.y1)),
        )
    }
}

/// Clips the segment `from..=to` to the pixels of `rect`.
///
/// - horizontal and vertical segments are clamped to the rectangle
/// - oblique segments go through out-code clipping: while an endpoint lies
///   outside, it is moved along the original line onto the edge it is
///   beyond; a segment whose endpoints are both beyond the same edge is
///   rejected
///
/// Returned endpoints always lie inside `rect`. Returns `None` if nothing of
/// the segment is inside.
pub fn clip_line(from: Point, to: Point, rect: Rect) -> Option<(Point, Point)> {
    if rect.is_empty() {
        return None;
    }
    let b = Bounds::of(rect);
    let (ax, ay) = (i64::from(from.x), i64::from(from.y));
    let (bx, by) = (i64::from(to.x), i64::from(to.y));

    if ay == by {
        if ay < b.y0 || ay > b.y1 {
            return None;
        }
        let (lo, hi) = (ax.min(bx).max(b.x0), ax.max(bx).min(b.x1));
        return (lo <= hi).then(|| (point(lo.into(), ay.into()), point(hi.into(), ay.into())));
    }
    if ax == bx {
        if ax < b.x0 || ax > b.x1 {
            return None;
        }
        let (lo, hi) = (ay.min(by).max(b.y0), ay.max(by).min(b.y1));
        return (lo <= hi).then(|| (point(ax.into(), lo.into()), point(ax.into(), hi.into())));
    }

    let seg = Segment::new(from, to, b);
    let (mut ta, mut tb) = (Param::START, Param::END);
    let mut code_a = seg.out_code(ta);
    let mut code_b = seg.out_code(tb);
    for _ in 0..=MAX_MOVES {
        if code_a | code_b == 0 {
            return Some((seg.pixel(ta, b), seg.pixel(tb, b)));
        }
        if code_a & code_b != 0 {
            return None;
        }

        if code_a != 0 {
            ta = seg.crossing(code_a);
            code_a = seg.out_code(ta);
        } else {
            tb = seg.crossing(code_b);
            code_b = seg.out_code(tb);
        }
    }
    None
}

/// `n / d` rounded half up, for `d > 0`.
#[inline]
fn round_div(n: i128, d: i128) -> i128 {
    (2 * n + d).div_euclid(2 * d)
}

/// Values are clamped to an `i32` rectangle before they get here.
#[inline]
fn point(x: i128, y: i128) -> Point {
    Point::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    const CLIP: Rect = Rect::new(0, 0, 5, 5);

    #[test]
    fn horizontal_is_clamped() {
        assert_eq!(clip_line(p(0, 0), p(10, 0), CLIP), Some((p(0, 0), p(4, 0))));
        assert_eq!(clip_line(p(10, 2), p(-3, 2), CLIP), Some((p(0, 2), p(4, 2))));
        assert_eq!(clip_line(p(0, 5), p(4, 5), CLIP), None);
        assert_eq!(clip_line(p(5, 1), p(9, 1), CLIP), None);
    }

    #[test]
    fn vertical_is_clamped() {
        assert_eq!(clip_line(p(3, -10), p(3, 10), CLIP), Some((p(3, 0), p(3, 4))));
        assert_eq!(clip_line(p(-1, 0), p(-1, 4), CLIP), None);
    }

    #[test]
    fn inside_oblique_is_untouched() {
        assert_eq!(clip_line(p(0, 0), p(4, 3), CLIP), Some((p(0, 0), p(4, 3))));
    }

    #[test]
    fn oblique_is_reprojected_onto_edges() {
        assert_eq!(clip_line(p(-5, -5), p(10, 10), CLIP), Some((p(0, 0), p(4, 4))));
        assert_eq!(clip_line(p(-2, 6), p(6, -2), CLIP), Some((p(0, 4), p(4, 0))));
    }

    #[test]
    fn shared_outside_half_plane_is_rejected() {
        assert_eq!(clip_line(p(-3, 0), p(-1, 4), CLIP), None);
        assert_eq!(clip_line(p(0, 7), p(4, 9), CLIP), None);
    }

    #[test]
    fn passing_outside_a_corner_is_rejected() {
        assert_eq!(clip_line(p(3, -4), p(9, 2), CLIP), None);
    }

    #[test]
    fn steep_line_near_a_corner_keeps_its_column() {
        // enters through the bottom edge and leaves through the top, staying
        // in column 16 the whole way
        let clip = Rect::new(7, 0, 10, 6);
        assert_eq!(clip_line(p(17, 16), p(15, -14), clip), Some((p(16, 5), p(16, 0))));
    }

    #[test]
    fn endpoint_moved_past_another_edge_is_moved_again() {
        // (9, 6) goes to the bottom edge first, lands right of the rectangle,
        // then settles on the right edge
        assert_eq!(clip_line(p(2, 2), p(9, 6), CLIP), Some((p(2, 2), p(4, 3))));
    }

    /// True if the segment meets the closed box spanned by the pixel centres
    /// of `rect`.
    fn crosses(a: Point, b: Point, rect: Rect) -> bool {
        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right() - 1, rect.bottom() - 1);
        if a.x.max(b.x) < x0 || a.x.min(b.x) > x1 || a.y.max(b.y) < y0 || a.y.min(b.y) > y1 {
            return false;
        }
        let side = |cx: i32, cy: i32| {
            let (dx, dy) = (i64::from(b.x - a.x), i64::from(b.y - a.y));
            (dx * i64::from(cy - a.y) - dy * i64::from(cx - a.x)).signum()
        };
        let signs = [side(x0, y0), side(x1, y0), side(x0, y1), side(x1, y1)];
        !(signs.iter().all(|&s| s > 0) || signs.iter().all(|&s| s < 0))
    }

    #[test]
    fn crossing_segments_are_never_dropped() {
        let rects = [CLIP, Rect::new(2, 1, 3, 6), Rect::new(1, 3, 6, 1)];
        let coords: Vec<Point> = (-3..=8).flat_map(|x| (-3..=8).map(move |y| p(x, y))).collect();

        for rect in rects {
            for &a in &coords {
                for &b in &coords {
                    let got = clip_line(a, b, rect);
                    if crosses(a, b, rect) {
                        let (ca, cb) = got.unwrap_or_else(|| panic!("{a:?}..{b:?} in {rect:?} dropped"));
                        assert!(rect.contains_point(ca.x, ca.y), "{a:?}..{b:?} in {rect:?} -> {ca:?}");
                        assert!(rect.contains_point(cb.x, cb.y), "{a:?}..{b:?} in {rect:?} -> {cb:?}");
                    }
                    if rect.contains_point(a.x, a.y) && rect.contains_point(b.x, b.y) {
                        assert!(got == Some((a, b)) || got == Some((b, a)), "{a:?}..{b:?} -> {got:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let got = clip_line(p(i32::MIN, i32::MIN), p(i32::MAX, i32::MAX), CLIP);
        let (a, b) = got.unwrap();
        assert!(CLIP.contains_point(a.x, a.y));
        assert!(CLIP.contains_point(b.x, b.y));
    }

    #[test]
    fn empty_rect_rejects_everything() {
        assert_eq!(clip_line(p(0, 0), p(3, 0), Rect::new(0, 0, 0, 5)), None);
    }
}
