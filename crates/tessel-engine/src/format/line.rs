use crate::coords::Point;

/// Walks the segment `from..=to` with integer error accumulation, calling
/// `plot` once per pixel.
///
/// The axis with the larger delta is stepped; endpoints are swapped so it
/// always increases. The error term starts at `2·dminor − dmajor` and grows by
/// `2·dminor` per step, or by `2·(dminor − dmajor)` when the minor axis steps.
pub fn bresenham(from: Point, to: Point, mut plot: impl FnMut(i32, i32)) {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();

    if dx >= dy {
        let (a, b) = if from.x <= to.x { (from, to) } else { (to, from) };
        let step = if b.y >= a.y { 1 } else { -1 };
        let mut err = 2 * dy - dx;
        let mut y = a.y;
        for x in a.x..=b.x {
            plot(x, y);
            if err > 0 {
                y += step;
                err += 2 * (dy - dx);
            } else {
                err += 2 * dy;
            }
        }
    } else {
        let (a, b) = if from.y <= to.y { (from, to) } else { (to, from) };
        let step = if b.x >= a.x { 1 } else { -1 };
        let mut err = 2 * dx - dy;
        let mut x = a.x;
        for y in a.y..=b.y {
            plot(x, y);
            if err > 0 {
                x += step;
                err += 2 * (dx - dy);
            } else {
                err += 2 * dx;
            }
        }
    }
}
