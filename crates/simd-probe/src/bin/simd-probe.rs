//! `simd-probe` - CPU vendor, SSE multiply/add, and a bulk multiply-add timing.
//!
//! **Output (stdout):**
//! - vendor string
//! - `{1,2,3,4} * {5,4,3,2}`, tab separated
//! - `_mm_set_ps(1,2,3,4) + _mm_set_ps(4,3,2,1)`, tab separated
//! - `took : <ms>` (unless `--skip-benchmark`)
//!
//! Logs go to stderr; `-v`/`-vv` or `RUST_LOG` raise the level.
//!
//! **Usage:**
//! ```text
//! simd-probe [--skip-benchmark] [--bench-len <N>] [-v]...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simd_probe::{NativeBackend, Tour, TourConfig, DEFAULT_LEN};

/// Print CPU identification and run the SIMD walkthrough.
#[derive(Parser)]
#[command(
    name = "simd-probe",
    about = "Print CPU identification and run the SIMD walkthrough"
)]
struct Args {
    /// Skip the bulk multiply-add timing step.
    #[arg(long)]
    skip_benchmark: bool,

    /// Elements per benchmark buffer.
    #[arg(long, default_value_t = DEFAULT_LEN)]
    bench_len: usize,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = TourConfig {
        include_benchmark: !args.skip_benchmark,
        bench_len: args.bench_len,
    };
    let tour = Tour::new(NativeBackend::new(), config);

    let stdout = io::stdout();
    tour.run(&mut stdout.lock())
        .context("Failed to run the SIMD walkthrough")?;

    Ok(())
}
