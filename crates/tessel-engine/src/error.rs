//! Error taxonomy for the engine.
//!
//! Only conditions that would desynchronize engine state are errors. Pixel
//! accesses outside a bitmap report `None`/`false` and draw calls clamp or
//! skip; degenerate rectangles are no-ops.

use thiserror::Error;

use crate::format::FormatId;
use crate::pool::PoolKind;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, GfxError>;

#[derive(Error, Debug)]
pub enum GfxError {
    /// The pool has fewer free nodes than the operation needs.
    #[error("{pool} pool exhausted (capacity {capacity}, {needed} more node(s) required)")]
    AllocationExhausted { pool: PoolKind, capacity: usize, needed: usize },

    /// Seeding a pool could not reserve its backing storage.
    #[error("failed to reserve {requested} {pool} node(s)")]
    AllocationFailure { pool: PoolKind, requested: usize },

    /// The format id has no registered descriptor.
    #[error("pixel format {0} is not registered")]
    UnknownFormat(FormatId),

    /// A descriptor with this id is already registered.
    #[error("pixel format {0} is already registered")]
    DuplicateFormat(FormatId),

    /// A caller-supplied pixel buffer does not match the format's data size.
    #[error("bitmap buffer for format {format} must be {expected} bytes, got {actual}")]
    BufferSize { format: FormatId, expected: usize, actual: usize },

    /// Palettes need a background and a foreground entry.
    #[error("palette needs at least 2 colors, got {0}")]
    PaletteTooSmall(usize),

    /// The display sink rejected a finished frame.
    #[error("display sink failed: {0:#}")]
    Sink(anyhow::Error),
}
