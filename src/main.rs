use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use logfilter::cli::Cli;
use logfilter::config::{ConfigStore, Setting, SuppressionConfig};
use logfilter::engine::SuppressionEngine;
use logfilter::record::LogRecord;
use logfilter::stats::SuppressionStats;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the configuration from the optional TOML file plus `--set` overrides.
fn load_config(cli: &Cli) -> Result<SuppressionConfig> {
    let mut config = match &cli.config {
        Some(path) => SuppressionConfig::from_toml_file(path)?,
        None => SuppressionConfig::default(),
    };

    for pair in &cli.set {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("invalid --set override {pair:?}: expected NAME=VALUE");
        };
        let Some(setting) = Setting::from_name(name) else {
            bail!(
                "unknown setting {name:?}: expected one of {}",
                Setting::ALL.map(Setting::name).join(", ")
            );
        };
        config.set(setting, value);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let store = ConfigStore::new(config);
    let mut engine = SuppressionEngine::new();
    let mut stats = SuppressionStats::new();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening record stream {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line.context("reading record stream")?;
        if line.trim().is_empty() {
            continue;
        }

        let mut record: LogRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(err) => {
                // Fail open: a line we cannot parse is passed through, not
                // dropped, so the filter never loses log data.
                tracing::warn!("skipping unparseable record: {err}");
                writeln!(out, "{line}")?;
                continue;
            }
        };

        let snapshot = store.current();
        let evaluation = engine.evaluate(&mut record, &snapshot);
        for err in &evaluation.errors {
            tracing::warn!("{err}");
        }
        stats.observe(&evaluation, record.deliver);

        if record.deliver {
            writeln!(out, "{line}")?;
        } else if cli.annotate {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }

    if cli.summary {
        eprint!("{}", stats.summary());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(&cli)
}
