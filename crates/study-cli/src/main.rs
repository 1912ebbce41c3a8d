use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sbd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config()?;
    let flags = cli.global_flags(&config.general.default_format);
    ui::configure(&flags);

    let ctx = context::AppContext::init(config).context("failed to initialize studybuddy client")?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// `STUDYBUDDY_LOG` wins over the verbosity flags when it parses.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let fallback = match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_env("STUDYBUDDY_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("cannot install log subscriber: {error}"))
}
