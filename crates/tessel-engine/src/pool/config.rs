use std::fmt;

/// Arena sizes for one [`NodePool`](super::NodePool).
///
/// Every rectangle in an active clip region and every rectangle saved by
/// `push_clip` occupies one rect node; every pushed scope occupies one clip
/// node. A full-screen region with a handful of excluded holes needs roughly
/// `4 × holes + 1` rect nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub rect_nodes: usize,
    pub clip_nodes: usize,
}

impl PoolConfig {
    #[inline]
    pub const fn new(rect_nodes: usize, clip_nodes: usize) -> Self {
        Self { rect_nodes, clip_nodes }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { rect_nodes: 64, clip_nodes: 8 }
    }
}

/// Which arena an allocation error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Rect,
    Clip,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PoolKind::Rect => "rect node",
            PoolKind::Clip => "clip node",
        })
    }
}
