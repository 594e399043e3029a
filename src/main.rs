use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use mac_generator::{GeneratorConfig, MacGenResult, DEFAULT_COUNT};

/// Generate randomized MAC addresses and write them to CSV and/or JSON files.
#[derive(Parser)]
#[command(name = "mac-generator", author, version, about, long_about = None)]
struct Cli {
    /// Number of MAC addresses to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    number: i64,

    /// File format: csv, json, or "json,csv" to write both files
    #[arg(short = 'f', long, default_value = "csv")]
    format: String,

    /// Output file path and name without extension (required)
    #[arg(short = 'o', long)]
    out: Option<String>,

    /// Use hyphen (-) as delimiter in MAC addresses
    #[arg(long)]
    hyphen: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    // No flags at all behaves like --help, even with stray positional arguments.
    if std::env::args_os().skip(1).all(|arg| !arg.to_string_lossy().starts_with('-')) {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let out = cli.out.clone().unwrap_or_default();
    match run(cli) {
        Ok(()) => {
            println!("MAC addresses successfully generated and written to {out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> MacGenResult<()> {
    let mut builder = GeneratorConfig::builder()
        .count(cli.number)
        .format(cli.format)
        .output(cli.out.unwrap_or_default())
        .hyphen(cli.hyphen);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    let config = builder.build()?;
    mac_generator::run(&config)?;
    Ok(())
}
