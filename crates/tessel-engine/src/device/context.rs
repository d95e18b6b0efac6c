use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::coords::{BACKGROUND_INDEX, Color, FOREGROUND_INDEX, Palette, Point, Rect};
use crate::error::{GfxError, Result};
use crate::format::{FormatId, FormatRegistry};
use crate::region::ClipRegion;
use crate::sink::DisplaySink;

use super::ContextConfig;

/// Rendering target plus origin, palette and clip state.
///
/// Coordinates passed to clip and draw calls are context-local: the origin
/// is added before anything touches the clip region or the bitmap. The one
/// exception is [`add_clip_rect`](Self::add_clip_rect), which takes
/// device-absolute coordinates.
///
/// A new context can draw anywhere on its target: the clip region starts as
/// a single rectangle covering the whole bitmap.
#[derive(Debug)]
pub struct DeviceContext {
    pub(crate) registry: Arc<FormatRegistry>,
    pub(crate) target: Bitmap,
    pub(crate) palette: Palette,
    pub(crate) origin: Point,
    pub(crate) clip: ClipRegion,
    pub(crate) dirty: bool,
}

impl DeviceContext {
    /// Binds `target` using the process-wide format registry.
    pub fn new(target: Bitmap, config: ContextConfig) -> Result<Self> {
        Self::with_registry(FormatRegistry::global(), target, config)
    }

    /// Allocates a zeroed target of `format` and binds it.
    pub fn for_format(format: FormatId, width: i32, height: i32, config: ContextConfig) -> Result<Self> {
        let registry = FormatRegistry::global();
        let target = Bitmap::new(&registry, format, width, height)?;
        Self::with_registry(registry, target, config)
    }

    /// Binds `target`, resolving formats and block copies through `registry`.
    ///
    /// Fails if the target's format is not registered there or the clip pool
    /// cannot be seeded.
    pub fn with_registry(registry: Arc<FormatRegistry>, target: Bitmap, config: ContextConfig) -> Result<Self> {
        registry.lookup(target.format_id())?;

        let mut clip = ClipRegion::new(config.pool)?;
        clip.reset(target.bounds())?;

        log::debug!(
            "device context ready: {}x{} {} target, {} rect / {} clip node(s)",
            target.width(),
            target.height(),
            target.format_id(),
            config.pool.rect_nodes,
            config.pool.clip_nodes,
        );

        Ok(Self {
            registry,
            target,
            palette: config.palette.unwrap_or_default(),
            origin: Point::zero(),
            clip,
            dirty: false,
        })
    }

    // ── target ────────────────────────────────────────────────────────────

    #[inline]
    pub fn target(&self) -> &Bitmap {
        &self.target
    }

    /// Releases the context and hands back its framebuffer.
    #[inline]
    pub fn into_target(self) -> Bitmap {
        self.target
    }

    #[inline]
    pub fn registry(&self) -> &Arc<FormatRegistry> {
        &self.registry
    }

    /// Reads one pixel at context-local coordinates, ignoring the clip region.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let p = Point::new(x, y) + self.origin;
        self.target.get_pixel(&self.palette, p.x, p.y)
    }

    /// Zeroes the framebuffer, ignoring the clip region.
    pub fn clear_target(&mut self) {
        self.target.clear();
        self.dirty = true;
    }

    // ── palette ───────────────────────────────────────────────────────────

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switches to another (possibly shared) palette and returns the old one.
    pub fn set_palette(&mut self, palette: Palette) -> Palette {
        std::mem::replace(&mut self.palette, palette)
    }

    #[inline]
    pub fn draw_color(&self) -> Color {
        self.palette.foreground()
    }

    #[inline]
    pub fn background_color(&self) -> Color {
        self.palette.background()
    }

    /// Writes the foreground slot of the shared palette; returns the previous color.
    pub fn set_draw_color(&mut self, color: Color) -> Color {
        self.palette.set(FOREGROUND_INDEX, color).unwrap_or(color)
    }

    /// Writes the background slot of the shared palette; returns the previous color.
    pub fn set_background_color(&mut self, color: Color) -> Color {
        self.palette.set(BACKGROUND_INDEX, color).unwrap_or(color)
    }

    // ── origin ────────────────────────────────────────────────────────────

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Moves the origin by `(dx, dy)` relative to where it is now.
    #[inline]
    pub fn offset_origin(&mut self, dx: i32, dy: i32) {
        self.origin = self.origin + Point::new(dx, dy);
    }

    /// Context-local rectangle in device-absolute coordinates.
    #[inline]
    pub fn to_device(&self, rect: Rect) -> Rect {
        rect.offset_by(self.origin)
    }

    // ── clip ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn clip_region(&self) -> &ClipRegion {
        &self.clip
    }

    /// Active clip rectangles, device-absolute, in chain order.
    #[inline]
    pub fn clip_rects(&self) -> Vec<Rect> {
        self.clip.rects()
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip.depth()
    }

    /// Saves the current clip region. Fails without side effects if the
    /// pool cannot hold the copy.
    pub fn push_clip(&mut self) -> Result<()> {
        self.clip.push()
    }

    /// Restores the last saved clip region, or empties it if none is saved.
    pub fn pop_clip(&mut self) {
        self.clip.pop();
    }

    /// Makes the whole target drawable again.
    pub fn reset_clip(&mut self) -> Result<()> {
        self.clip.reset(self.target.bounds())
    }

    /// Makes nothing drawable.
    pub fn clear_clip(&mut self) {
        self.clip.clear();
    }

    pub fn intersect_clip(&mut self, rect: Rect) {
        self.clip.intersect(self.to_device(rect));
    }

    /// [`intersect_clip`](Self::intersect_clip) with inclusive corners.
    pub fn intersect_clip_points(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.intersect_clip(Rect::from_points(left, top, right, bottom));
    }

    pub fn exclude_clip(&mut self, rect: Rect) -> Result<()> {
        self.clip.exclude(self.to_device(rect))
    }

    /// [`exclude_clip`](Self::exclude_clip) with inclusive corners.
    pub fn exclude_clip_points(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> Result<()> {
        self.exclude_clip(Rect::from_points(left, top, right, bottom))
    }

    /// Adds a device-absolute rectangle to the clip region.
    pub fn add_clip_rect(&mut self, rect: Rect) -> Result<()> {
        self.clip.add_rect(rect)
    }

    /// Adds a context-local rectangle to the clip region.
    pub fn union_clip(&mut self, rect: Rect) -> Result<()> {
        self.clip.add_rect(self.to_device(rect))
    }

    /// True if any part of the context-local `rect` could be drawn.
    pub fn is_rect_visible(&self, rect: Rect) -> bool {
        self.clip.is_visible(self.to_device(rect))
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// True if something was drawn since the last [`present`](Self::present).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Pushes the framebuffer to `sink` and clears the dirty flag.
    ///
    /// On failure the flag stays set so the frame can be pushed again.
    pub fn present(&mut self, sink: &mut impl DisplaySink) -> Result<()> {
        sink.push_frame(&self.target).map_err(GfxError::Sink)?;
        self.dirty = false;
        log::trace!("frame presented");
        Ok(())
    }
}
