use core::ops::Deref;

use super::Rect;

/// Fixed-capacity result of [`Rect::subtract`]: zero to four rectangles.
///
/// Keeps the geometry free of allocation; callers decide where the pieces go.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RectSplit {
    rects: [Rect; 4],
    len: usize,
}

impl RectSplit {
    #[inline]
    pub const fn empty() -> Self {
        Self { rects: [Rect::new(0, 0, 0, 0); 4], len: 0 }
    }

    #[inline]
    pub(crate) const fn one(rect: Rect) -> Self {
        let mut s = Self::empty();
        s.rects[0] = rect;
        s.len = 1;
        s
    }

    #[inline]
    pub(crate) fn push(&mut self, rect: Rect) {
        debug_assert!(self.len < 4, "a subtraction never yields more than four pieces");
        self.rects[self.len] = rect;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rect] {
        &self.rects[..self.len]
    }
}

impl Deref for RectSplit {
    type Target = [Rect];

    #[inline]
    fn deref(&self) -> &[Rect] {
        self.as_slice()
    }
}

impl IntoIterator for RectSplit {
    type Item = Rect;
    type IntoIter = core::iter::Take<core::array::IntoIter<Rect, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter().take(self.len)
    }
}

impl<'a> IntoIterator for &'a RectSplit {
    type Item = &'a Rect;
    type IntoIter = core::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
