use crate::package::Package;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitstat",
    about = "Summarize running, walking and swimming workouts from raw tracker packages"
)]
pub struct Cli {
    /// Packages as CODE:action,duration,weight[,...] (RUN, WLK or SWM).
    ///
    /// With no packages and no --file, three sample packages are processed.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// Read packages from a file, one `CODE v1 v2 ...` per line (`-` for stdin).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report failing packages and continue with the rest.
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary sentence per package.
    Text,
    /// One JSON object per package.
    Json,
}
