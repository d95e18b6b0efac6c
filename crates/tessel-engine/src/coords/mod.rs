//! Coordinate, geometry and color types shared by the whole engine.
//!
//! Canonical space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Device contexts translate context-local coordinates into this space by
//! adding their origin offset.

mod color;
mod palette;
mod point;
mod rect;
mod split;

pub use color::Color;
pub use palette::{BACKGROUND_INDEX, FOREGROUND_INDEX, Palette};
pub use point::Point;
pub use rect::Rect;
pub use split::RectSplit;
