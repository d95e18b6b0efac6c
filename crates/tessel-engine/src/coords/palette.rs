use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::error::{GfxError, Result};

use super::Color;

/// Palette slot holding the background color (pixel off).
pub const BACKGROUND_INDEX: usize = 0;
/// Palette slot holding the foreground / draw color (pixel on).
pub const FOREGROUND_INDEX: usize = 1;

/// Shared, ordered color table.
///
/// Cloning a `Palette` yields another handle to the same table, so several
/// device contexts can draw with one palette; whichever handle last wrote a
/// slot wins. Handles are single-threaded (`Rc`), matching the engine's
/// one-owner-at-a-time model.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Rc<RefCell<Vec<Color>>>,
}

impl Palette {
    /// Creates a palette. At least two entries (background, foreground) are required.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self> {
        let colors = colors.into();
        if colors.len() < 2 {
            return Err(GfxError::PaletteTooSmall(colors.len()));
        }
        Ok(Self { colors: Rc::new(RefCell::new(colors)) })
    }

    /// Two-entry palette for 1-bpp targets.
    pub fn mono(background: Color, foreground: Color) -> Self {
        Self { colors: Rc::new(RefCell::new(vec![background, foreground])) }
    }

    /// Number of slots; never less than two.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.borrow().len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.borrow().get(index).copied()
    }

    /// Overwrites slot `index`, returning the previous color.
    ///
    /// Returns `None` (and writes nothing) if the slot does not exist.
    pub fn set(&self, index: usize, color: Color) -> Option<Color> {
        let mut colors = self.colors.borrow_mut();
        let slot = colors.get_mut(index)?;
        Some(std::mem::replace(slot, color))
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.colors.borrow()[BACKGROUND_INDEX]
    }

    #[inline]
    pub fn foreground(&self) -> Color {
        self.colors.borrow()[FOREGROUND_INDEX]
    }

    /// Borrows the whole table for the duration of a draw call.
    #[inline]
    pub fn colors(&self) -> Ref<'_, [Color]> {
        Ref::map(self.colors.borrow(), Vec::as_slice)
    }

    /// True if both handles refer to the same table.
    #[inline]
    pub fn ptr_eq(&self, other: &Palette) -> bool {
        Rc::ptr_eq(&self.colors, &other.colors)
    }
}

impl Default for Palette {
    /// Monochrome palette: black background, white foreground.
    fn default() -> Self {
        Self::mono(Color::BLACK, Color::WHITE)
    }
}
