use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use infiniscroll::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    trace_dbg,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then apply command line overrides
    let mut config = Config::new()?;
    if let Some(page_size) = args.page_size {
        config.feed.page_size = page_size;
    }
    if let Some(fetch_delay_ms) = args.fetch_delay_ms {
        config.feed.fetch_delay_ms = fetch_delay_ms;
    }
    config.validate()?;
    trace_dbg!(&config.feed);

    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate)
                .mouse(args.mouse),
        ));
        AppRunner::new_with_config(config, tui)
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
