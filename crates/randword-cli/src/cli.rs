//! CLI argument definitions for randword.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--config` | none | JSON settings file (see below) |
//! | `--quantity` | `10` | Words per fetch (1-50) |
//! | `--proxy` | none | http/https proxy URI |
//! | `--timeout-ms` | `10000` | Cancellation deadline in ms |
//! | `--verify-tls[=BOOL]` | `false` | Verify the endpoint's TLS certificate |
//! | `--endpoint` | randomwordgenerator.com | Word endpoint base URL |
//! | `--format` | `lines` | Output format (lines, json) |
//! | `--log-level` | `warn` | Fallback filter when `RUST_LOG` is unset |
//!
//! # Settings file
//!
//! Every field is optional. Endpoint settings nest under `endpoint`:
//!
//! ```json
//! {
//!   "quantity": 5,
//!   "proxy": "http://127.0.0.1:8080",
//!   "verify_tls": true,
//!   "request_timeout_ms": 2000,
//!   "endpoint": {
//!     "base_url": "https://randomwordgenerator.com/json/words.php",
//!     "user_agent": "Mozilla/5.0",
//!     "category": "es"
//!   }
//! }
//! ```
//!
//! # Examples
//!
//! ```bash
//! randword --quantity 5
//! randword --quantity 20 --format json --pretty
//! randword --proxy http://127.0.0.1:8080 --timeout-ms 2000
//! RANDWORD_VERIFY_TLS=1 randword --verify-tls=false
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Fetch random words from randomwordgenerator.com.
#[derive(Debug, Parser)]
#[command(name = "randword", author, version, about = "Fetch random words")]
pub struct Cli {
    /// JSON settings file with endpoint settings nested under `endpoint`;
    /// flags and RANDWORD_* variables override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of words to fetch (1-50).
    #[arg(long, short = 'n')]
    pub quantity: Option<i64>,

    /// Route the request through an http/https proxy.
    #[arg(long)]
    pub proxy: Option<String>,

    /// Give up after this many milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Verify the endpoint's TLS certificate. `--verify-tls=false` turns
    /// verification off even when the environment or settings file enable it.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub verify_tls: Option<bool>,

    /// Override the word endpoint base URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One word per line.
    Lines,
    /// Single JSON object with the word list.
    Json,
}
