//! volinfo - reports whether a mounted volume is empty and when it was last touched.
//!
//! Usage:
//!   volinfo              Scan /volume and print a JSON report
//!   volinfo --help       Show help
//!
//! Environment:
//!   ALL_TIMES=true           Also report lastChange and lastBirth
//!   OUTPUT_FILE_INFOS=true   Also list every entry under fileInfos
//!   RUST_LOG                 Log filter for standard error (default: info)

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use volinfo_core::VolumeConfig;
use volinfo_report::Reporter;
use volinfo_scan::VolumeScanner;

#[derive(Parser)]
#[command(
    name = "volinfo",
    version,
    about = "Report whether a mounted volume is empty and when it was last touched",
    long_about = "volinfo walks the volume mounted at /volume and prints a JSON summary \
                  of its most recent access and modification.\n\n\
                  Set ALL_TIMES=true to also report change and birth times, and \
                  OUTPUT_FILE_INFOS=true to list every entry. Logs go to standard error."
)]
struct Cli {}

fn main() -> Result<()> {
    color_eyre::install()?;

    let _cli = Cli::parse();
    init_logging();

    let config = VolumeConfig::from_env();
    tracing::debug!(
        mount_point = %config.mount_point.display(),
        all_times = config.all_times,
        output_file_infos = config.output_file_infos,
        "configuration loaded"
    );

    let scanner = VolumeScanner::with_config(config.clone());
    let (report, walk_result) = scanner.scan().into_parts();

    // The report goes out even when the walk aborted.
    let reporter = Reporter::new(config);
    reporter
        .write_to(&report, std::io::stdout().lock())
        .context("Failed to print report")?;

    walk_result.context("Volume scan failed")?;

    Ok(())
}

/// Log to standard error, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
