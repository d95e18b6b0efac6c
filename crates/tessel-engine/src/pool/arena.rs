use crate::coords::Rect;
use crate::error::{GfxError, Result};

use super::{PoolConfig, PoolKind};

/// Handle to a rectangle node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RectNodeId(u32);

/// Handle to a clip (saved-chain) node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClipNodeId(u32);

impl RectNodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl ClipNodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct RectNode {
    rect: Rect,
    next: Option<RectNodeId>,
    live: bool,
}

#[derive(Debug, Clone)]
struct ClipNode {
    chain: Option<RectNodeId>,
    next: Option<ClipNodeId>,
    live: bool,
}

/// Two fixed arenas (rect nodes, clip nodes) managed as free lists.
///
/// Invariant: `in use + free == capacity` for each arena at all times.
#[derive(Debug)]
pub struct NodePool {
    rects: Vec<RectNode>,
    clips: Vec<ClipNode>,
    free_rect: Option<RectNodeId>,
    free_clip: Option<ClipNodeId>,
    free_rects: usize,
    free_clips: usize,
}

impl NodePool {
    /// Seeds both arenas.
    ///
    /// Fails with [`GfxError::AllocationFailure`] if the backing storage cannot
    /// be reserved.
    pub fn new(config: PoolConfig) -> Result<Self> {
        let rects = seed(config.rect_nodes, PoolKind::Rect, |i, count| RectNode {
            rect: Rect::default(),
            next: link(i, count).map(RectNodeId),
            live: false,
        })?;
        let clips = seed(config.clip_nodes, PoolKind::Clip, |i, count| ClipNode {
            chain: None,
            next: link(i, count).map(ClipNodeId),
            live: false,
        })?;

        log::debug!(
            "node pool seeded: {} rect node(s), {} clip node(s)",
            config.rect_nodes,
            config.clip_nodes
        );

        Ok(Self {
            free_rect: (config.rect_nodes > 0).then_some(RectNodeId(0)),
            free_clip: (config.clip_nodes > 0).then_some(ClipNodeId(0)),
            free_rects: config.rect_nodes,
            free_clips: config.clip_nodes,
            rects,
            clips,
        })
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[inline]
    pub fn rect_capacity(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn clip_capacity(&self) -> usize {
        self.clips.len()
    }

    #[inline]
    pub fn free_rect_count(&self) -> usize {
        self.free_rects
    }

    #[inline]
    pub fn free_clip_count(&self) -> usize {
        self.free_clips
    }

    #[inline]
    pub fn rects_in_use(&self) -> usize {
        self.rects.len() - self.free_rects
    }

    #[inline]
    pub fn clips_in_use(&self) -> usize {
        self.clips.len() - self.free_clips
    }

    /// Fails unless at least `count` rect nodes are free.
    ///
    /// Multi-node operations call this before touching any chain so that an
    /// exhausted pool leaves the caller's state unchanged.
    pub fn ensure_rects(&self, count: usize) -> Result<()> {
        if count <= self.free_rects { Ok(()) } else { Err(self.exhausted(PoolKind::Rect, count)) }
    }

    /// Fails unless at least `count` clip nodes are free.
    pub fn ensure_clips(&self, count: usize) -> Result<()> {
        if count <= self.free_clips { Ok(()) } else { Err(self.exhausted(PoolKind::Clip, count)) }
    }

    fn exhausted(&self, pool: PoolKind, count: usize) -> GfxError {
        let (capacity, free) = match pool {
            PoolKind::Rect => (self.rects.len(), self.free_rects),
            PoolKind::Clip => (self.clips.len(), self.free_clips),
        };
        log::warn!("{pool} pool exhausted: {free} free, {count} required");
        GfxError::AllocationExhausted { pool, capacity, needed: count - free }
    }

    // ── rect nodes ────────────────────────────────────────────────────────

    /// Takes a rect node off the free list, initialised to `rect` with no successor.
    pub fn acquire_rect(&mut self, rect: Rect) -> Result<RectNodeId> {
        let Some(id) = self.free_rect else {
            return Err(self.exhausted(PoolKind::Rect, 1));
        };
        let node = &mut self.rects[id.index()];
        self.free_rect = node.next;
        *node = RectNode { rect, next: None, live: true };
        self.free_rects -= 1;
        Ok(id)
    }

    /// Returns a single node to the free list.
    ///
    /// The handle must not be used afterwards. Releasing a node that is
    /// already free is ignored.
    pub fn release_rect(&mut self, id: RectNodeId) {
        let node = &mut self.rects[id.index()];
        if !node.live {
            log::warn!("rect node {} released twice; ignored", id.0);
            return;
        }
        node.live = false;
        node.next = self.free_rect;
        self.free_rect = Some(id);
        self.free_rects += 1;
    }

    /// Returns every node of a chain to the free list.
    pub fn release_rect_chain(&mut self, mut head: Option<RectNodeId>) {
        while let Some(id) = head {
            head = self.rects[id.index()].next;
            self.release_rect(id);
        }
    }

    #[inline]
    pub fn rect(&self, id: RectNodeId) -> Rect {
        self.rects[id.index()].rect
    }

    #[inline]
    pub fn set_rect(&mut self, id: RectNodeId, rect: Rect) {
        self.rects[id.index()].rect = rect;
    }

    #[inline]
    pub fn next(&self, id: RectNodeId) -> Option<RectNodeId> {
        self.rects[id.index()].next
    }

    #[inline]
    pub fn set_next(&mut self, id: RectNodeId, next: Option<RectNodeId>) {
        self.rects[id.index()].next = next;
    }

    /// Iterates `(handle, rect)` pairs of a chain, head first.
    #[inline]
    pub fn chain(&self, head: Option<RectNodeId>) -> Chain<'_> {
        Chain { pool: self, cursor: head }
    }

    #[inline]
    pub fn chain_len(&self, head: Option<RectNodeId>) -> usize {
        self.chain(head).count()
    }

    // ── clip nodes ────────────────────────────────────────────────────────

    /// Takes a clip node off the free list; it takes ownership of `chain`.
    pub fn acquire_clip(&mut self, chain: Option<RectNodeId>) -> Result<ClipNodeId> {
        let Some(id) = self.free_clip else {
            return Err(self.exhausted(PoolKind::Clip, 1));
        };
        let node = &mut self.clips[id.index()];
        self.free_clip = node.next;
        *node = ClipNode { chain, next: None, live: true };
        self.free_clips -= 1;
        Ok(id)
    }

    /// Returns a clip node to the free list and hands back the chain it owned.
    ///
    /// The caller becomes the chain's owner: adopt it or release it with
    /// [`release_rect_chain`](Self::release_rect_chain).
    pub fn release_clip(&mut self, id: ClipNodeId) -> Option<RectNodeId> {
        let node = &mut self.clips[id.index()];
        if !node.live {
            log::warn!("clip node {} released twice; ignored", id.0);
            return None;
        }
        let chain = node.chain.take();
        node.live = false;
        node.next = self.free_clip;
        self.free_clip = Some(id);
        self.free_clips += 1;
        chain
    }

    #[inline]
    pub fn clip_chain(&self, id: ClipNodeId) -> Option<RectNodeId> {
        self.clips[id.index()].chain
    }

    #[inline]
    pub fn clip_next(&self, id: ClipNodeId) -> Option<ClipNodeId> {
        self.clips[id.index()].next
    }

    #[inline]
    pub fn set_clip_next(&mut self, id: ClipNodeId, next: Option<ClipNodeId>) {
        self.clips[id.index()].next = next;
    }
}

/// Iterator over a rect chain.
pub struct Chain<'a> {
    pool: &'a NodePool,
    cursor: Option<RectNodeId>,
}

impl Iterator for Chain<'_> {
    type Item = (RectNodeId, Rect);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.pool.rects[id.index()];
        self.cursor = node.next;
        Some((id, node.rect))
    }
}

fn link(i: usize, count: usize) -> Option<u32> {
    (i + 1 < count).then(|| (i + 1) as u32)
}

fn seed<T>(count: usize, pool: PoolKind, make: impl Fn(usize, usize) -> T) -> Result<Vec<T>> {
    let failure = GfxError::AllocationFailure { pool, requested: count };
    if u32::try_from(count).is_err() {
        return Err(failure);
    }
    let mut nodes = Vec::new();
    if nodes.try_reserve_exact(count).is_err() {
        return Err(failure);
    }
    nodes.extend((0..count).map(|i| make(i, count)));
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(rects: usize, clips: usize) -> NodePool {
        NodePool::new(PoolConfig::new(rects, clips)).unwrap()
    }

    // ── seeding ───────────────────────────────────────────────────────────

    #[test]
    fn seeds_all_nodes_free() {
        let p = pool(5, 2);
        assert_eq!(p.rect_capacity(), 5);
        assert_eq!(p.free_rect_count(), 5);
        assert_eq!(p.clip_capacity(), 2);
        assert_eq!(p.free_clip_count(), 2);
    }

    #[test]
    fn zero_capacity_pool_is_valid_but_empty() {
        let mut p = pool(0, 0);
        assert!(matches!(
            p.acquire_rect(Rect::default()),
            Err(GfxError::AllocationExhausted { pool: PoolKind::Rect, capacity: 0, needed: 1 })
        ));
        assert!(matches!(
            p.acquire_clip(None),
            Err(GfxError::AllocationExhausted { pool: PoolKind::Clip, .. })
        ));
    }

    // ── rect nodes ────────────────────────────────────────────────────────

    #[test]
    fn exhaustion_is_an_error() {
        let mut p = pool(2, 0);
        p.acquire_rect(Rect::new(0, 0, 1, 1)).unwrap();
        p.acquire_rect(Rect::new(0, 0, 1, 1)).unwrap();
        assert!(p.acquire_rect(Rect::new(0, 0, 1, 1)).is_err());
        assert_eq!(p.free_rect_count(), 0);
    }

    #[test]
    fn release_makes_node_reusable() {
        let mut p = pool(1, 0);
        let a = p.acquire_rect(Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(p.rect(a), Rect::new(1, 2, 3, 4));
        p.release_rect(a);
        let b = p.acquire_rect(Rect::new(5, 6, 7, 8)).unwrap();
        assert_eq!(p.rect(b), Rect::new(5, 6, 7, 8));
        assert_eq!(p.next(b), None);
    }

    #[test]
    fn double_release_does_not_grow_free_list() {
        let mut p = pool(2, 0);
        let a = p.acquire_rect(Rect::default()).unwrap();
        p.release_rect(a);
        p.release_rect(a);
        assert_eq!(p.free_rect_count(), 2);
        p.acquire_rect(Rect::default()).unwrap();
        p.acquire_rect(Rect::default()).unwrap();
        assert!(p.acquire_rect(Rect::default()).is_err());
    }

    #[test]
    fn chain_release_frees_every_node() {
        let mut p = pool(4, 0);
        let a = p.acquire_rect(Rect::new(0, 0, 1, 1)).unwrap();
        let b = p.acquire_rect(Rect::new(1, 0, 1, 1)).unwrap();
        let c = p.acquire_rect(Rect::new(2, 0, 1, 1)).unwrap();
        p.set_next(a, Some(b));
        p.set_next(b, Some(c));

        let rects: Vec<Rect> = p.chain(Some(a)).map(|(_, r)| r).collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[2], Rect::new(2, 0, 1, 1));

        p.release_rect_chain(Some(a));
        assert_eq!(p.free_rect_count(), 4);
        assert_eq!(p.rects_in_use(), 0);
    }

    #[test]
    fn ensure_reports_shortfall() {
        let p = pool(3, 1);
        assert!(p.ensure_rects(3).is_ok());
        assert!(matches!(
            p.ensure_rects(5),
            Err(GfxError::AllocationExhausted { needed: 2, capacity: 3, .. })
        ));
        assert!(p.ensure_clips(2).is_err());
    }

    // ── clip nodes ────────────────────────────────────────────────────────

    #[test]
    fn clip_node_hands_back_its_chain() {
        let mut p = pool(1, 1);
        let r = p.acquire_rect(Rect::new(0, 0, 2, 2)).unwrap();
        let c = p.acquire_clip(Some(r)).unwrap();
        assert_eq!(p.clip_chain(c), Some(r));
        assert_eq!(p.free_clip_count(), 0);

        assert_eq!(p.release_clip(c), Some(r));
        assert_eq!(p.free_clip_count(), 1);
        assert_eq!(p.rects_in_use(), 1);
    }

    #[test]
    fn totals_are_constant() {
        let mut p = pool(8, 3);
        let mut held = Vec::new();
        for i in 0..6 {
            held.push(p.acquire_rect(Rect::new(i, 0, 1, 1)).unwrap());
            assert_eq!(p.rects_in_use() + p.free_rect_count(), 8);
        }
        for id in held.drain(..) {
            p.release_rect(id);
            assert_eq!(p.rects_in_use() + p.free_rect_count(), 8);
        }
    }
}
