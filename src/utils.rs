use crate::package::{Package, parse_packages};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr, keeping stdout for results.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitstat={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

fn log_level(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Load a package listing from `path`, or from stdin when `path` is `-`.
pub fn read_package_file(path: &Path) -> Result<Vec<Package>> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin().lock()).context("reading packages from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading packages: {}", path.display()))?
    };

    let packages =
        parse_packages(&text).with_context(|| format!("parsing packages: {}", path.display()))?;
    tracing::info!(path = %path.display(), packages = packages.len(), "loaded package file");
    Ok(packages)
}
