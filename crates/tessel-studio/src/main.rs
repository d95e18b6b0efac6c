mod cli;
mod scene;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use tessel_engine::logging::{LoggingConfig, init_logging};
use tessel_engine::{ContextConfig, DeviceContext};

use crate::cli::Cli;
use crate::terminal::TerminalSink;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_filter(cli.log.clone()));

    let config = ContextConfig::default().with_pool(cli.pool());
    let mut ctx = DeviceContext::for_format(cli.format.id(), cli.width, cli.height, config)
        .context("creating device context")?;

    scene::render(&mut ctx).context("rendering demo scene")?;

    let mut sink = TerminalSink::new(std::io::stdout().lock()).inverted(cli.invert);
    ctx.present(&mut sink).context("presenting frame")?;

    log::info!(
        "{}x{} {} frame presented ({} bytes)",
        cli.width,
        cli.height,
        ctx.target().format_id(),
        ctx.target().data().len()
    );
    Ok(())
}
