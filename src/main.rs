use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use matrixhub::cli::command::{Cli, ColorChoice, Commands};
use matrixhub::cli::output::{self, OutputConfig};
use matrixhub::cli::{logs, restart, start, status, stop, update};
use matrixhub::runtime::docker::DockerCli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose, color));
    init_tracing(cli.quiet, cli.verbose);

    let runtime = DockerCli::new();
    let result = match &cli.command {
        Commands::Start(args) => start::execute(&runtime, args).await,
        Commands::Stop(args) => stop::execute(&runtime, args).await,
        Commands::Restart(args) => restart::execute(&runtime, args).await,
        Commands::Status(args) => status::execute(&runtime, args).await,
        Commands::Logs(args) => logs::execute(&runtime, args).await,
        Commands::Update(args) => update::execute(&runtime, args).await,
    };

    if let Err(err) = result {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber from the verbosity flags.
///
/// Diagnostics go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
