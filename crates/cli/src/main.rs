use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_cli::{Args, Menu};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Args::parse().into_config();
    tracing::debug!(?config, "starting");

    let mut store = config
        .load_store()
        .context("failed to load product data")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut store, &config, stdin.lock(), stdout.lock())
        .run()
        .context("menu i/o failed")?;

    Ok(())
}
