//! aesecb: encrypt one file with AES-128-ECB twice (sequential, then block-parallel)
//! and print how long each run took.
//!
//! Usage: `aesecb <INPUT> <KEY>` where KEY is exactly 16 bytes taken verbatim.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::ffi::OsString;
use std::path::PathBuf;

use aesecb_rs::{run_job, JobConfig};
use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aesecb",
    version,
    about = "Time sequential vs block-parallel AES-128-ECB encryption of a file"
)]
struct Cli {
    /// File to encrypt
    input: PathBuf,
    /// Raw 16-byte key, used byte for byte (need not be valid UTF-8)
    key: OsString,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = JobConfig::new();

    let report = match run_job(&cli.input, cli.key.as_encoded_bytes(), &config) {
        Ok(report) => report,
        Err(e) => {
            let stage = e.stage();
            error!(%stage, error = %e, "run failed");
            return Err(anyhow::Error::new(e)
                .context(format!("{stage} stage failed"))
                .context(format!("encrypting {}", cli.input.display())));
        }
    };

    println!("Test for {} AES.", report.sequential.label);
    println!("Duration: {:.6} (sec)", report.sequential.elapsed_secs());
    println!("Test for {} AES ({} workers).", report.parallel.label, report.workers);
    println!("Duration: {:.6} (sec)", report.parallel.elapsed_secs());

    Ok(())
}
