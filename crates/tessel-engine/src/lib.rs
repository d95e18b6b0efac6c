//! Tessel engine crate.
//!
//! Retained 2D rendering for small monochrome framebuffers: the kind of
//! 128×64 panel driven over SPI or I²C where the whole frame lives in a few
//! hundred bytes of RAM.
//!
//! Building blocks, bottom-up:
//! - [`coords`]: rectangles, points, packed colors, shared palettes
//! - [`pool`]: fixed node arenas that back every clip chain
//! - [`region`]: clip region algebra (intersect, exclude, overlap-free add, push/pop)
//! - [`format`]: pixel encodings, the format registry, block copies
//! - [`bitmap`]: format-tagged pixel buffers
//! - [`device`]: the [`DeviceContext`] tying a target to its palette, origin and clip
//! - [`draw`]: lines, rectangles, gradients and bitblt on a context
//! - [`sink`]: the seam that carries finished frames to a display
//!
//! ```
//! use tessel_engine::{Color, ContextConfig, DeviceContext, FormatId, FrameLog, Rect};
//!
//! let mut ctx = DeviceContext::for_format(FormatId::MONO_VERTICAL, 128, 64, ContextConfig::default())?;
//! ctx.exclude_clip(Rect::new(40, 16, 48, 32))?;
//! ctx.fill_rect(Rect::new(0, 0, 128, 64), Color::WHITE);
//!
//! let mut sink = FrameLog::new();
//! ctx.present(&mut sink)?;
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), tessel_engine::GfxError>(())
//! ```

pub mod bitmap;
pub mod coords;
pub mod device;
pub mod draw;
pub mod format;
pub mod logging;
pub mod pool;
pub mod region;
pub mod sink;

mod error;

pub use bitmap::Bitmap;
pub use coords::{Color, Palette, Point, Rect, RectSplit};
pub use device::{ContextConfig, DeviceContext};
pub use error::{GfxError, Result};
pub use format::{FormatId, FormatRegistry, PixelFormat};
pub use pool::PoolConfig;
pub use region::ClipRegion;
pub use sink::{DisplaySink, FrameLog};
