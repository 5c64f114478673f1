use clap::Parser;
use objmangle_cli::commands::{Cmd, Command};

/// objmangle CLI
///
/// objmangle computes collision-free, length-preserving replacement names for the
/// Objective-C selectors and classes of a Mach-O binary. The resulting mapping is
/// consumed by the binary patcher.
#[derive(Parser)]
#[command(name = "objmangle")]
#[command(about = "objmangle: Objective-C symbol mangler")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

/// Runs the objmangle CLI with the provided arguments.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()
}
