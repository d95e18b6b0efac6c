use clap::{Parser, ValueEnum};
use tessel_engine::{FormatId, PoolConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "tessel-studio")]
#[command(about = "Renders a demo scene into a monochrome framebuffer and prints it", long_about = None)]
pub struct Cli {
    /// Framebuffer encoding
    #[arg(long, value_enum, default_value_t = PanelFormat::Vertical)]
    pub format: PanelFormat,

    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 128, value_parser = clap::value_parser!(i32).range(1..=1024))]
    pub width: i32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(i32).range(1..=1024))]
    pub height: i32,

    /// Rectangle nodes available to the clip region
    #[arg(long, default_value_t = PoolConfig::default().rect_nodes)]
    pub rect_nodes: usize,

    /// Saved-scope nodes available to the clip region
    #[arg(long, default_value_t = PoolConfig::default().clip_nodes)]
    pub clip_nodes: usize,

    /// Print lit pixels dark and unlit pixels bright
    #[arg(long)]
    pub invert: bool,

    /// Log filter (env_logger syntax); falls back to RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    pub fn pool(&self) -> PoolConfig {
        PoolConfig::new(self.rect_nodes, self.clip_nodes)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFormat {
    /// Row-major, one bit per pixel
    Ideal,
    /// Page-addressed columns of eight pixels
    Vertical,
}

impl PanelFormat {
    pub fn id(self) -> FormatId {
        match self {
            PanelFormat::Ideal => FormatId::MONO_IDEAL,
            PanelFormat::Vertical => FormatId::MONO_VERTICAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_128x64_page_panel() {
        let cli = Cli::parse_from(["tessel-studio"]);
        assert_eq!(cli.format.id(), FormatId::MONO_VERTICAL);
        assert_eq!((cli.width, cli.height), (128, 64));
        assert_eq!(cli.pool(), PoolConfig::default());
        assert!(!cli.invert);
    }

    #[test]
    fn options_parse() {
        let cli = Cli::parse_from([
            "tessel-studio", "--format", "ideal", "--width", "32", "--height", "16",
            "--rect-nodes", "12", "--clip-nodes", "2", "--invert", "--log", "debug",
        ]);
        assert_eq!(cli.format, PanelFormat::Ideal);
        assert_eq!(cli.pool(), PoolConfig::new(12, 2));
        assert!(cli.invert);
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["tessel-studio", "--width", "0"]).is_err());
    }
}
