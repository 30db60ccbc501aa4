//! Entry point wiring CLI dispatch to the extraction pipeline.

use anyhow::Result;
use event_extract::{cli::Cli, config::Settings, logging};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;
    let settings = Settings::load()?;

    info!(?cli, "starting command");
    cli.dispatch(settings)
}
