mod cli;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use randword_core::{CancellationToken, ClientConfig, FetchContext, Quantity};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing(fallback: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli, |name| std::env::var(name).ok())?;
    debug!(version = randword_core::VERSION, ?config, "resolved configuration");

    let token = CancellationToken::new();
    let ctx = FetchContext::with_token(token.clone()).with_timeout(config.request_timeout());

    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let mut client = config.into_client(ctx)?;
    client.initialize()?;
    let words = client.generate_words().await?;

    let stdout = std::io::stdout();
    output::render(&mut stdout.lock(), &words, cli.format, cli.pretty)
}

/// Defaults, then the `--config` file, then `RANDWORD_*` variables, then flags.
fn load_config<F>(cli: &Cli, env: F) -> Result<ClientConfig, CliError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let base = match &cli.config {
        Some(path) => ClientConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ClientConfig::default(),
    };
    let mut config = base.with_overrides(env)?;

    if let Some(quantity) = cli.quantity {
        config.quantity = Quantity::new(quantity)?;
    }
    if let Some(proxy) = &cli.proxy {
        config.proxy = Some(proxy.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.request_timeout_ms = timeout_ms;
    }
    if let Some(verify_tls) = cli.verify_tls {
        config.verify_tls = verify_tls;
    }
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }

    Ok(config)
}
