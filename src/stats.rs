//! Suppression statistics for the CLI summary mode

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::engine::Evaluation;
use crate::matcher::Attribute;

/// Counts of what happened to a record stream.
#[derive(Debug, Default)]
pub struct SuppressionStats {
    seen: u64,
    delivered: u64,
    suppressed: HashMap<Attribute, u64>,
    config_errors: u64,
}

impl SuppressionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one evaluation.
    pub fn observe(&mut self, evaluation: &Evaluation, delivered: bool) {
        self.seen += 1;
        if delivered {
            self.delivered += 1;
        }
        if let Some(attribute) = evaluation.matched {
            *self.suppressed.entry(attribute).or_default() += 1;
        }
        self.config_errors += evaluation.errors.len() as u64;
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn suppressed_total(&self) -> u64 {
        self.suppressed.values().sum()
    }

    pub fn suppressed_by(&self, attribute: Attribute) -> u64 {
        self.suppressed.get(&attribute).copied().unwrap_or(0)
    }

    pub fn config_errors(&self) -> u64 {
        self.config_errors
    }

    /// Render the summary table printed by `--summary`.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "records seen:      {}", self.seen);
        let _ = writeln!(out, "records delivered: {}", self.delivered);
        let _ = writeln!(out, "records suppressed: {}", self.suppressed_total());
        for attribute in Attribute::EVALUATION_ORDER {
            let count = self.suppressed_by(attribute);
            if count > 0 {
                let _ = writeln!(out, "  by {:?}: {}", attribute, count);
            }
        }
        if self.config_errors > 0 {
            let _ = writeln!(out, "config errors:     {}", self.config_errors);
        }
        out
    }
}
