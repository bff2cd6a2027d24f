// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demo harness: search a haystack of integers for one needle.
//!
//! ```bash
//! square-search                       # needle 99 in the built-in sample
//! square-search -n 4 --debug          # print the full traversal report
//! square-search -n 3 --haystack 5,3,8 -vv
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use square_search::{
    square_search, square_search_report, DEFAULT_NEEDLE, NOT_FOUND, SAMPLE_HAYSTACK,
};

/// Search an array four cells at a time by folding it into a square.
#[derive(Parser, Debug)]
#[command(name = "square-search", version, about)]
struct Cli {
    /// Value to search for.
    #[arg(short, long, default_value_t = DEFAULT_NEEDLE, allow_hyphen_values = true)]
    needle: i64,

    /// Comma-separated haystack. Defaults to the built-in 23-value sample.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    haystack: Option<Vec<i64>>,

    /// Visit every cell, report the last match and print each iteration.
    #[arg(long)]
    debug: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn format_haystack(haystack: &[i64]) -> String {
    let values: Vec<String> = haystack.iter().map(i64::to_string).collect();
    format!("{{{}}}", values.join(", "))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let haystack = cli.haystack.unwrap_or_else(|| SAMPLE_HAYSTACK.to_vec());
    println!("Haystack = {}", format_haystack(&haystack));

    let found = if cli.debug {
        let report = square_search_report(&haystack, &cli.needle);
        println!("{}", report);
        println!();
        report.cell()
    } else {
        square_search(&haystack, &cli.needle)
    };

    if found == NOT_FOUND {
        println!("The needle, {}, was not found.", cli.needle);
    } else {
        println!(
            "The needle, {}, is found at cell {} (index {}).",
            cli.needle,
            found,
            found - 1
        );
    }

    Ok(())
}
