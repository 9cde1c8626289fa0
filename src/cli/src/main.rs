//! CLI for the Issue Reporter.
//!
//! Posts the assessment summary as a GitHub issue, or prints manual creation
//! instructions when no token is available.

use clap::Parser;
use issue_reporter::{default_summary_path, ReporterConfig, RunOutcome, Runner, RunnerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Create a GitHub issue from the assessment summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the summary document [default: summary.md next to the executable].
    #[arg(long)]
    summary_path: Option<PathBuf>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<Url>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match run(args, &mut out).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!(error = %e, "Run aborted");
            let _ = writeln!(out, "❌ Error: {e}");
            e.exit_code()
        }
    };
    let _ = out.flush();

    ExitCode::from(code)
}

/// Initializes tracing with environment filter support.
///
/// Diagnostics go to stderr so stdout carries only the report. Verbosity is
/// controlled by `RUST_LOG` and defaults to "warn".
fn init_tracing() {
    tracing_subscriber::registry()
        // Compact single-line events without module paths, on stderr
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // RUST_LOG overrides the level, e.g. RUST_LOG=debug
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run<W: Write>(args: Args, out: &mut W) -> Result<RunOutcome, RunnerError> {
    let summary_path = args.summary_path.unwrap_or_else(default_summary_path);

    // Rerun instructions name this binary
    let mut config = ReporterConfig::new(summary_path)?.with_program_name(env!("CARGO_BIN_NAME"));
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    Runner::new(config).run(out).await
}
