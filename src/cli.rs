//! CLI argument parsing for logfilter

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "logfilter")]
#[command(version)]
#[command(about = "Filter a log-record stream through suppression match lists", long_about = None)]
pub struct Cli {
    /// TOML file with the suppression settings (user_name, application_name,
    /// sqlcode, client_ip, database_name; each a comma-separated list)
    #[arg(short = 'C', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Inline setting override, NAME=VALUE (e.g. user_name=alice,bob); repeatable
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Input file with one JSON record per line (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Emit suppressed records too, with deliver set to false, instead of
    /// dropping them from the output
    #[arg(long = "annotate")]
    pub annotate: bool,

    /// Print a suppression summary to stderr when the stream ends
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Enable debug output
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}
