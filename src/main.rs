#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitstat::cli::{Cli, OutputFormat};
use fitstat::{InfoMessage, Package, package, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitstat;

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = collect_packages(&cli)?;
    dlog!(
        "mode=report packages={} format={:?} keep_going={}",
        packages.len(),
        cli.format,
        cli.keep_going
    );

    let mut out = io::stdout().lock();
    let mut failed = 0usize;

    for (i, pkg) in packages.iter().enumerate() {
        match render(pkg, cli.format) {
            Ok(line) => writeln!(out, "{line}").context("writing to stdout")?,
            Err(e) if cli.keep_going => {
                tracing::error!(package = i + 1, input = %pkg, err = %format!("{e:#}"), "skipping package");
                failed += 1;
            }
            Err(e) => return Err(e.context(format!("package #{} ({pkg})", i + 1))),
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} packages failed", packages.len());
    }
    Ok(())
}

fn collect_packages(cli: &Cli) -> Result<Vec<Package>> {
    let mut packages = cli.packages.clone();
    if let Some(path) = &cli.file {
        packages.extend(utils::read_package_file(path)?);
    }
    if packages.is_empty() && cli.file.is_none() {
        tracing::info!("no packages given, using samples");
        packages = package::sample_packages();
    }
    Ok(packages)
}

fn render(pkg: &Package, format: OutputFormat) -> Result<String> {
    let summary = pkg.build()?.summary();
    Ok(match format {
        OutputFormat::Text => InfoMessage::from(summary).get_message(),
        OutputFormat::Json => serde_json::to_string(&summary).context("encoding summary")?,
    })
}
