//! Suppression engine
//!
//! Evaluates the five attribute matchers against one record in a fixed
//! order with short-circuit OR and clears `record.deliver` on the first
//! match. A record already marked suppressed on entry costs nothing. A
//! matcher whose list is malformed fails open for this record; the error is
//! reported but the remaining matchers still run.

use tracing::trace;

use crate::config::SuppressionConfig;
use crate::list::ConfigError;
use crate::matcher::Attribute;
use crate::record::LogRecord;
use crate::scratch::Scratch;

/// Outcome of evaluating one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// The matcher that suppressed the record, if any. `None` when the
    /// record was delivered or was already suppressed on entry.
    pub matched: Option<Attribute>,
    /// Malformed-list errors hit along the way. The caller surfaces these
    /// to the operator; they never abort the record.
    pub errors: Vec<ConfigError>,
}

/// Per-execution-context suppression engine.
///
/// Owns the scratch buffer for its context; evaluation takes no locks and
/// retains no state between records beyond buffer capacity.
#[derive(Debug, Default)]
pub struct SuppressionEngine {
    scratch: Scratch,
}

impl SuppressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one record against one configuration snapshot.
    ///
    /// Mutates only `record.deliver`, and only ever from true to false.
    /// All parse allocations live in a scratch scope that is cleared when
    /// this returns, error paths included.
    pub fn evaluate(
        &mut self,
        record: &mut LogRecord,
        config: &SuppressionConfig,
    ) -> Evaluation {
        let mut evaluation = Evaluation::default();
        if !record.deliver {
            // A prior interceptor already suppressed it; never re-enable,
            // never spend matcher work.
            return evaluation;
        }

        let mut scope = self.scratch.scope();
        for attribute in Attribute::EVALUATION_ORDER {
            match attribute.matches(record, config, scope.tokens()) {
                Ok(true) => {
                    trace!(?attribute, "record suppressed");
                    record.deliver = false;
                    evaluation.matched = Some(attribute);
                    break;
                }
                Ok(false) => {}
                // Fail open for this matcher only; the rest still run.
                Err(err) => evaluation.errors.push(err),
            }
        }
        evaluation
    }
}
