//! Clip regions built from pooled rectangle chains.
//!
//! A [`ClipRegion`] owns:
//! - the active chain: rectangles (device-absolute) where drawing is allowed
//! - a stack of saved chains for nested clipping scopes
//!
//! Every draw call is replayed once per rectangle of the active chain. An
//! empty chain therefore means nothing is drawable; a context that wants the
//! whole target writable resets the region to the target's bounds.
//!
//! Operations that need fresh nodes check the pool up front, so an
//! [`AllocationExhausted`](crate::GfxError::AllocationExhausted) error leaves
//! both the active chain and the stack exactly as they were.

use crate::coords::{Rect, RectSplit};
use crate::error::Result;
use crate::pool::{ClipNodeId, NodePool, PoolConfig, RectNodeId};

#[derive(Debug)]
pub struct ClipRegion {
    pool: NodePool,
    active: Option<RectNodeId>,
    stack: Option<ClipNodeId>,
    depth: usize,
}

impl ClipRegion {
    /// Seeds a private node pool. The active chain starts empty.
    pub fn new(config: PoolConfig) -> Result<Self> {
        Ok(Self { pool: NodePool::new(config)?, active: None, stack: None, depth: 0 })
    }

    #[inline]
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    /// True when no rectangle is drawable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// Number of rectangles in the active chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.pool.chain_len(self.active)
    }

    /// Number of saved scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Active rectangles in chain order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Rect> + '_ {
        self.pool.chain(self.active).map(|(_, r)| r)
    }

    #[inline]
    pub fn rects(&self) -> Vec<Rect> {
        self.iter().collect()
    }

    // ── whole-region operations ───────────────────────────────────────────

    /// Releases the active chain; nothing is drawable afterwards.
    pub fn clear(&mut self) {
        let old = self.active.take();
        self.pool.release_rect_chain(old);
        log::trace!("clip cleared");
    }

    /// Replaces the active chain with the single rectangle `bounds`.
    ///
    /// Reuses the current head node when there is one, so this only fails
    /// when the region is empty and the pool has no free node.
    pub fn reset(&mut self, bounds: Rect) -> Result<()> {
        if bounds.is_empty() {
            self.clear();
            return Ok(());
        }
        match self.active {
            Some(head) => {
                let rest = self.pool.next(head);
                self.pool.release_rect_chain(rest);
                self.pool.set_next(head, None);
                self.pool.set_rect(head, bounds);
            }
            None => self.active = Some(self.pool.acquire_rect(bounds)?),
        }
        log::trace!("clip reset to {bounds:?}");
        Ok(())
    }

    // ── scopes ────────────────────────────────────────────────────────────

    /// Saves a deep copy of the active chain onto the stack.
    pub fn push(&mut self) -> Result<()> {
        let len = self.len();
        self.pool.ensure_clips(1)?;
        self.pool.ensure_rects(len)?;

        let mut copy_head = None;
        let mut tail: Option<RectNodeId> = None;
        let mut cursor = self.active;
        while let Some(src) = cursor {
            let id = self.pool.acquire_rect(self.pool.rect(src))?;
            match tail {
                Some(t) => self.pool.set_next(t, Some(id)),
                None => copy_head = Some(id),
            }
            tail = Some(id);
            cursor = self.pool.next(src);
        }

        let saved = self.pool.acquire_clip(copy_head)?;
        self.pool.set_clip_next(saved, self.stack);
        self.stack = Some(saved);
        self.depth += 1;
        log::trace!("clip pushed ({} rect(s), depth {})", len, self.depth);
        Ok(())
    }

    /// Drops the active chain and restores the most recently saved one.
    ///
    /// With nothing saved, the active chain becomes empty.
    pub fn pop(&mut self) {
        let old = self.active.take();
        self.pool.release_rect_chain(old);

        if let Some(top) = self.stack {
            self.stack = self.pool.clip_next(top);
            self.active = self.pool.release_clip(top);
            self.depth -= 1;
        }
        log::trace!("clip popped (depth {})", self.depth);
    }

    // ── algebra ───────────────────────────────────────────────────────────

    /// ANDs every active rectangle with `rect`.
    ///
    /// Rectangles left without area are released; survivors keep their order.
    /// Never allocates.
    pub fn intersect(&mut self, rect: Rect) {
        let mut prev: Option<RectNodeId> = None;
        let mut cursor = self.active;
        while let Some(id) = cursor {
            let next = self.pool.next(id);
            let mut clipped = self.pool.rect(id);
            if clipped.intersect_in_place(rect) {
                self.pool.set_rect(id, clipped);
                prev = Some(id);
            } else {
                self.unlink(prev, id, next);
                self.pool.release_rect(id);
            }
            cursor = next;
        }
        log::trace!("clip intersected with {rect:?} ({} rect(s))", self.len());
    }

    /// Removes `rect` from the region.
    ///
    /// Each active rectangle is replaced in place by the 0–4 pieces of its
    /// subtraction, so the chain stays overlap-free.
    pub fn exclude(&mut self, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        self.pool.ensure_rects(self.extra_nodes_for_subtract(rect))?;

        let mut prev: Option<RectNodeId> = None;
        let mut cursor = self.active;
        while let Some(id) = cursor {
            let next = self.pool.next(id);
            let source = self.pool.rect(id);
            if source.overlaps(rect) {
                prev = self.replace_with_pieces(prev, id, next, source.subtract(rect))?;
            } else {
                prev = Some(id);
            }
            cursor = next;
        }
        log::trace!("clip excluded {rect:?} ({} rect(s))", self.len());
        Ok(())
    }

    /// Adds `rect` to the region without ever creating overlap.
    ///
    /// - already covered by a single active rectangle: no change
    /// - otherwise `rect` is cut out of every active rectangle, the pieces are
    ///   re-chained in descending-area order, and `rect` itself is inserted at
    ///   its sorted position
    ///
    /// Adjoining rectangles are never merged.
    pub fn add_rect(&mut self, rect: Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        if self.iter().any(|r| r.contains_rect(rect)) {
            log::trace!("clip add {rect:?} already covered");
            return Ok(());
        }
        self.pool.ensure_rects(self.extra_nodes_for_subtract(rect) + 1)?;

        let mut fresh: Option<RectNodeId> = None;
        let mut cursor = self.active.take();
        while let Some(id) = cursor {
            cursor = self.pool.next(id);
            self.pool.set_next(id, None);

            let mut pieces = self.pool.rect(id).subtract(rect).into_iter();
            match pieces.next() {
                Some(first) => {
                    self.pool.set_rect(id, first);
                    self.insert_sorted(&mut fresh, id);
                }
                None => self.pool.release_rect(id),
            }
            for piece in pieces {
                let extra = self.pool.acquire_rect(piece)?;
                self.insert_sorted(&mut fresh, extra);
            }
        }

        let added = self.pool.acquire_rect(rect)?;
        self.insert_sorted(&mut fresh, added);
        self.active = fresh;
        log::trace!("clip added {rect:?} ({} rect(s))", self.len());
        Ok(())
    }

    /// True if `rect` overlaps any active rectangle (half-open edges).
    pub fn is_visible(&self, rect: Rect) -> bool {
        self.iter().any(|r| r.overlaps(rect))
    }

    // ── chain plumbing ────────────────────────────────────────────────────

    /// Nodes needed beyond the ones being replaced when subtracting `cut`
    /// from every active rectangle.
    fn extra_nodes_for_subtract(&self, cut: Rect) -> usize {
        self.iter()
            .map(|r| r.subtract(cut).len().saturating_sub(1))
            .sum()
    }

    fn unlink(&mut self, prev: Option<RectNodeId>, id: RectNodeId, next: Option<RectNodeId>) {
        match prev {
            Some(p) => self.pool.set_next(p, next),
            None => {
                debug_assert_eq!(self.active, Some(id));
                self.active = next;
            }
        }
    }

    /// Splices `pieces` into the chain where `id` sits, reusing `id` for the
    /// first piece. Returns the last node now standing at that position.
    fn replace_with_pieces(
        &mut self,
        prev: Option<RectNodeId>,
        id: RectNodeId,
        next: Option<RectNodeId>,
        pieces: RectSplit,
    ) -> Result<Option<RectNodeId>> {
        let mut pieces = pieces.into_iter();
        let Some(first) = pieces.next() else {
            self.unlink(prev, id, next);
            self.pool.release_rect(id);
            return Ok(prev);
        };

        self.pool.set_rect(id, first);
        let mut tail = id;
        for piece in pieces {
            let extra = self.pool.acquire_rect(piece)?;
            self.pool.set_next(tail, Some(extra));
            tail = extra;
        }
        self.pool.set_next(tail, next);
        Ok(Some(tail))
    }

    /// Inserts `id` after every node whose area is at least as large.
    fn insert_sorted(&mut self, head: &mut Option<RectNodeId>, id: RectNodeId) {
        let area = self.pool.rect(id).area();
        let mut prev: Option<RectNodeId> = None;
        let mut cursor = *head;
        while let Some(c) = cursor {
            if self.pool.rect(c).area() < area {
                break;
            }
            prev = Some(c);
            cursor = self.pool.next(c);
        }
        self.pool.set_next(id, cursor);
        match prev {
            Some(p) => self.pool.set_next(p, Some(id)),
            None => *head = Some(id),
        }
    }
}
