mod cli;
mod config;
mod main_lib;
mod output;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_service, init_tracing, run_batch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.help_markets {
        print!("{}", output::render_markets());
        return ExitCode::SUCCESS;
    }

    if cli.symbols.is_empty() {
        eprintln!("Usage: fundlens <SYMBOLS>... --<market>  (see --help-markets)");
        return ExitCode::from(2);
    }

    let Some(market) = cli.market() else {
        eprintln!("Select a market, e.g. --tw or --crypto (see --help-markets)");
        return ExitCode::from(2);
    };

    let config = Config::from_env();
    init_tracing();

    match run(&cli, &config, market).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every symbol was ingested.
async fn run(cli: &Cli, config: &Config, market: fundlens_core::Market) -> anyhow::Result<bool> {
    let service = build_service(config)?;
    let mut stdout = std::io::stdout().lock();
    let summary = run_batch(&service, &cli.symbols, market, cli.json, &mut stdout).await?;
    Ok(summary.failed == 0)
}
