//! The display seam.
//!
//! A [`DisplaySink`] receives finished frames and moves them to hardware (or
//! a terminal, a file, a test log). The engine calls it only from
//! [`DeviceContext::present`](crate::DeviceContext::present), after a batch of
//! draw calls, never in the middle of one.

use crate::bitmap::Bitmap;
use crate::format::FormatId;

/// Consumer of finished frames.
///
/// Failures are host-side (I/O, bus errors), so they travel as
/// [`anyhow::Error`] and surface from `present` as
/// [`GfxError::Sink`](crate::GfxError::Sink).
pub trait DisplaySink {
    fn push_frame(&mut self, frame: &Bitmap) -> anyhow::Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn push_frame(&mut self, frame: &Bitmap) -> anyhow::Result<()> {
        (**self).push_frame(frame)
    }
}

/// Snapshot of one pushed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub format: FormatId,
    pub width: i32,
    pub height: i32,
    pub bytes: Vec<u8>,
}

/// Sink that keeps a copy of every frame it receives.
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: Vec<Frame>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl DisplaySink for FrameLog {
    fn push_frame(&mut self, frame: &Bitmap) -> anyhow::Result<()> {
        self.frames.push(Frame {
            format: frame.format_id(),
            width: frame.width(),
            height: frame.height(),
            bytes: frame.data().to_vec(),
        });
        log::trace!("frame {} recorded ({} bytes)", self.frames.len(), frame.data().len());
        Ok(())
    }
}
