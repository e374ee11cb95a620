//! ratefetch CLI - ECB and BCB exchange-rate series fetcher.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "ratefetch")]
#[command(about = "Fetch ECB and BCB exchange-rate series", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a Banco Central do Brasil SGS series
    Bcb {
        /// SGS series code (10813 = USD buy, 21620 = EUR)
        #[arg(long, default_value = "10813")]
        series: u32,

        /// Start date (YYYY-MM-DD). Defaults to one year before the end date.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output file path. Defaults to bcb-<series>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Print the last quote on or before this date instead of writing a file
        #[arg(long)]
        at: Option<String>,
    },

    /// Fetch a European Central Bank daily reference rate
    Ecb {
        /// Currency being measured
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Currency it is measured against
        #[arg(long, default_value = "EUR")]
        base: String,

        /// Start date (YYYY-MM-DD). Defaults to one year before the end date.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output file path. Defaults to ecb-<currency>-<base>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Print the last quote on or before this date instead of writing a file
        #[arg(long)]
        at: Option<String>,
    },

    /// Compute the income declaration cells for a tax year
    Declare {
        /// Tax year
        #[arg(long)]
        tax_year: i32,

        /// Output file path. Defaults to declaration-<year>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Bcb {
            series,
            start,
            end,
            output,
            format,
            at,
        } => commands::fetch::bcb(
            series,
            start.as_deref(),
            end.as_deref(),
            output,
            format,
            at.as_deref(),
            cli.quiet,
        ),
        Commands::Ecb {
            currency,
            base,
            start,
            end,
            output,
            format,
            at,
        } => commands::fetch::ecb(
            &currency,
            &base,
            start.as_deref(),
            end.as_deref(),
            output,
            format,
            at.as_deref(),
            cli.quiet,
        ),
        Commands::Declare { tax_year, output } => {
            commands::declare::declare(tax_year, output, cli.quiet)
        }
    }
}
