//! Fixed-capacity node arenas backing every clip chain.
//!
//! Two arenas are seeded once:
//! - rectangle nodes: one rectangle plus a link to the next node of its chain
//! - clip nodes: one saved chain plus a link to the previously saved one
//!
//! Nodes are addressed by small integer handles. Free nodes form an intrusive
//! singly linked list, so acquire and release are O(1) and the arenas never
//! grow after seeding. Running out of nodes is reported as
//! [`GfxError::AllocationExhausted`](crate::GfxError::AllocationExhausted).

mod arena;
mod config;

pub use arena::{Chain, ClipNodeId, NodePool, RectNodeId};
pub use config::{PoolConfig, PoolKind};
