//! Device contexts: one target bitmap plus everything a draw call needs.
//!
//! A context binds:
//! - the target bitmap (its format resolved once, at construction)
//! - a shared palette
//! - an origin offset applied to every context-local coordinate
//! - a clip region with its own node pool
//!
//! Contexts are plain values. Several can exist side by side, each drawing
//! into its own framebuffer; nothing is global except the default format
//! registry.

mod config;
mod context;

pub use config::ContextConfig;
pub use context::DeviceContext;
