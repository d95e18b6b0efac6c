use crate::coords::Palette;
use crate::pool::PoolConfig;

/// Construction parameters for a [`DeviceContext`](super::DeviceContext).
#[derive(Debug, Clone, Default)]
pub struct ContextConfig {
    /// Node budget for this context's clip region.
    pub pool: PoolConfig,

    /// Palette to draw with. `None` gives the context its own two-entry
    /// palette: black background, white foreground.
    pub palette: Option<Palette>,
}

impl ContextConfig {
    #[inline]
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Shares `palette` with the new context.
    #[inline]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}
