//! alpine-demo - serves a todo page built with Alpine.js attribute helpers.

use clap::Parser;
use miette::Result;
use std::process::ExitCode;

mod cli;
mod config;
mod error;
mod html;
mod page;
mod server;

use cli::Args;
use config::DemoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.default_filter().into()),
        )
        .init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = DemoConfig::load(&args)?;
    tracing::debug!(?config, "Loaded configuration");

    server::serve(config).await?;
    Ok(())
}
