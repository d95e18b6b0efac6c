//! Drawing primitives on a [`DeviceContext`](crate::DeviceContext).
//!
//! Every primitive takes context-local coordinates, adds the origin, and is
//! then replayed once per rectangle of the active clip region. Each clip
//! rectangle is first narrowed to the target bitmap, so nothing outside the
//! framebuffer is ever addressed. Rectangles with no area draw nothing.

mod blit;
mod clip;
mod gradient;
mod shapes;

pub use clip::clip_line;
