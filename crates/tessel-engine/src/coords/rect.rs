use super::{Point, RectSplit};

/// Axis-aligned rectangle in integer pixels (top-left origin).
///
/// Extents are signed so that arithmetic which runs past an edge stays
/// representable; any rectangle with `width <= 0` or `height <= 0` is
/// degenerate and treated as absent by every operation below.
///
/// Edge convention:
/// - overlap is half-open: `[x, x + width) × [y, y + height)`, so rectangles
///   that only share an edge do not overlap
/// - containment is inclusive of shared edges, so a rectangle contains itself
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rectangle from inclusive corner coordinates.
    ///
    /// `from_points(2, 3, 5, 3)` covers columns 2..=5 of row 3.
    #[inline]
    pub const fn from_points(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            left,
            top,
            right.saturating_sub(left).saturating_add(1),
            bottom.saturating_sub(top).saturating_add(1),
        )
    }

    /// Rectangle anchored at the origin with the given size.
    #[inline]
    pub const fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Covered pixel count; zero for degenerate rectangles.
    #[inline]
    pub fn area(self) -> i64 {
        if self.is_empty() { 0 } else { self.width as i64 * self.height as i64 }
    }

    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.width, self.height)
    }

    #[inline]
    pub const fn offset_by(self, p: Point) -> Self {
        self.translated(p.x, p.y)
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains_point(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// True iff all four edges of `inner` lie within this rectangle's edges.
    #[inline]
    pub fn contains_rect(self, inner: Rect) -> bool {
        self.x <= inner.x
            && self.right() >= inner.right()
            && self.y <= inner.y
            && self.bottom() >= inner.bottom()
    }

    /// Half-open overlap test. Degenerate rectangles overlap nothing.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Clips `self` to its overlap with `other`.
    ///
    /// Returns `false` and zeroes the extent when the two do not overlap
    /// (touching edges count as no overlap). Applying the same clip twice
    /// gives the same result as applying it once.
    pub fn intersect_in_place(&mut self, other: Rect) -> bool {
        if !self.overlaps(other) {
            self.width = 0;
            self.height = 0;
            return false;
        }

        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        *self = Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        true
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let mut r = self;
        if r.intersect_in_place(other) { Some(r) } else { None }
    }

    /// Removes `cut` from `self`, returning the remainder as up to four
    /// non-overlapping rectangles.
    ///
    /// - `self` inside `cut` → empty
    /// - no overlap → `self` unchanged
    /// - otherwise strips are taken in a fixed order: top, bottom, left, right.
    ///   Each strip shrinks the remaining source before the next is computed,
    ///   so the pieces never overlap each other or `cut`.
    pub fn subtract(self, cut: Rect) -> RectSplit {
        if self.is_empty() {
            return RectSplit::empty();
        }
        if !self.overlaps(cut) {
            return RectSplit::one(self);
        }
        if cut.contains_rect(self) {
            return RectSplit::empty();
        }

        let mut out = RectSplit::empty();
        let mut rem = self;

        if rem.y < cut.y {
            let h = cut.y - rem.y;
            out.push(Rect::new(rem.x, rem.y, rem.width, h));
            rem.y = cut.y;
            rem.height -= h;
        }

        if rem.bottom() > cut.bottom() {
            let h = rem.bottom() - cut.bottom();
            out.push(Rect::new(rem.x, cut.bottom(), rem.width, h));
            rem.height -= h;
        }

        if rem.x < cut.x {
            let w = cut.x - rem.x;
            out.push(Rect::new(rem.x, rem.y, w, rem.height));
            rem.x = cut.x;
            rem.width -= w;
        }

        if rem.right() > cut.right() {
            out.push(Rect::new(cut.right(), rem.y, rem.right() - cut.right(), rem.height));
        }

        out
    }
}
