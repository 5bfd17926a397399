mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::loan::{ExportArgs, LoanArgs, ScheduleArgs};
use commands::rates::RatesArgs;

/// RV loan payment, amortization and rate comparison
#[derive(Parser)]
#[command(
    name = "rvloan",
    version,
    about = "RV loan payment, amortization and rate comparison",
    long_about = "A CLI for RV loan calculations with decimal precision. Derives the \
                  monthly payment, the full amortization schedule, credit-tier rates \
                  and comparative market quotes from price, down payment, trade-in, \
                  term and credit score."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation steps to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly payment
    Payment(LoanArgs),
    /// Generate the amortization schedule
    Schedule(ScheduleArgs),
    /// Headline totals: payment, total interest, amount to finance
    Summary(LoanArgs),
    /// Yearly balance / principal / interest series
    Chart(LoanArgs),
    /// Full analysis with plausibility warnings
    Analyze(LoanArgs),
    /// Printable amortization schedule
    Export(ExportArgs),
    /// Comparative New RV / Used RV market rates for a credit score
    Rates(RatesArgs),
    /// Base interest rate for a credit score
    RateForScore(RatesArgs),
    /// List the offered loan terms
    Terms,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::loan::run_payment(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Chart(args) => commands::loan::run_chart(args),
        Commands::Analyze(args) => commands::loan::run_analyze(args),
        Commands::Export(args) => commands::loan::run_export(args),
        Commands::Rates(args) => commands::rates::run_rates(args),
        Commands::RateForScore(args) => commands::rates::run_rate_for_score(args),
        Commands::Terms => commands::rates::run_terms(),
        Commands::Version => {
            println!("rvloan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
