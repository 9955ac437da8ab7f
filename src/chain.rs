//! Interceptor chain
//!
//! The delivery pipeline hands each record to every registered interceptor,
//! in registration order, before the record reaches the log sink.
//! Suppression is one entry in the list; observers registered earlier run
//! first, so suppression composes with pre-existing interceptors instead of
//! replacing them. Dropping the chain drops every interceptor with it, so
//! the pipeline can never point at a dead observer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ConfigStore;
use crate::engine::SuppressionEngine;
use crate::record::LogRecord;

/// One observer of records about to be delivered.
pub trait LogInterceptor {
    /// Inspect one record before delivery. An interceptor may clear
    /// `record.deliver`; by contract it never sets it back to true.
    fn intercept(&mut self, record: &mut LogRecord);
}

/// Ordered list of interceptors, run front to back.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn LogInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor. Registration happens once at startup;
    /// interceptors run in registration order.
    pub fn register(&mut self, interceptor: Box<dyn LogInterceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run every interceptor over one record.
    pub fn dispatch(&mut self, record: &mut LogRecord) {
        for interceptor in &mut self.interceptors {
            interceptor.intercept(record);
        }
    }
}

/// The suppression engine as a chain entry.
///
/// Reads one configuration snapshot per record, evaluates the matchers, and
/// reports malformed lists at WARN so the operator learns a filter is
/// broken instead of silently inactive.
pub struct SuppressionInterceptor {
    engine: SuppressionEngine,
    store: Arc<ConfigStore>,
}

impl SuppressionInterceptor {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        SuppressionInterceptor {
            engine: SuppressionEngine::new(),
            store,
        }
    }
}

impl LogInterceptor for SuppressionInterceptor {
    fn intercept(&mut self, record: &mut LogRecord) {
        if !record.deliver {
            return;
        }
        let config = self.store.current();
        let evaluation = self.engine.evaluate(record, &config);
        for err in &evaluation.errors {
            warn!("{err}");
        }
        if let Some(attribute) = evaluation.matched {
            debug!(?attribute, "suppressed log record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Setting, SuppressionConfig};

    /// Test interceptor that counts how often it runs and optionally
    /// suppresses everything it sees.
    struct Counter {
        calls: Arc<std::sync::atomic::AtomicUsize>,
        suppress: bool,
    }

    impl LogInterceptor for Counter {
        fn intercept(&mut self, record: &mut LogRecord) {
            self.calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if self.suppress {
                record.deliver = false;
            }
        }
    }

    fn store_suppressing_user(user: &str) -> Arc<ConfigStore> {
        let mut config = SuppressionConfig::default();
        config.set(Setting::UserName, user);
        Arc::new(ConfigStore::new(config))
    }

    #[test]
    fn test_preexisting_interceptor_runs_first() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut chain = InterceptorChain::new();
        chain.register(Box::new(Counter {
            calls: calls.clone(),
            suppress: false,
        }));
        chain.register(Box::new(SuppressionInterceptor::new(
            store_suppressing_user("alice"),
        )));

        let mut record = LogRecord::new("00000");
        record.acting_user = Some("alice".to_string());
        chain.dispatch(&mut record);

        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(!record.deliver);
    }

    #[test]
    fn test_upstream_suppression_is_left_alone() {
        // An earlier interceptor suppressed the record; the engine leaves
        // it false even though no matcher would fire.
        let mut chain = InterceptorChain::new();
        chain.register(Box::new(Counter {
            calls: Arc::new(std::sync::atomic::AtomicUsize::new(0)),
            suppress: true,
        }));
        chain.register(Box::new(SuppressionInterceptor::new(Arc::new(
            ConfigStore::default(),
        ))));

        let mut record = LogRecord::new("00000");
        chain.dispatch(&mut record);
        assert!(!record.deliver);
    }

    #[test]
    fn test_reload_takes_effect_on_next_record() {
        let store = Arc::new(ConfigStore::default());
        let mut chain = InterceptorChain::new();
        chain.register(Box::new(SuppressionInterceptor::new(store.clone())));

        let mut first = LogRecord::new("00000");
        first.acting_user = Some("batch_job".to_string());
        chain.dispatch(&mut first);
        assert!(first.deliver);

        let mut config = SuppressionConfig::default();
        config.set(Setting::UserName, "batch_job");
        store.reload(config);

        let mut second = LogRecord::new("00000");
        second.acting_user = Some("batch_job".to_string());
        chain.dispatch(&mut second);
        assert!(!second.deliver);
    }

    #[test]
    fn test_empty_chain_delivers() {
        let mut chain = InterceptorChain::new();
        assert!(chain.is_empty());
        let mut record = LogRecord::new("00000");
        chain.dispatch(&mut record);
        assert!(record.deliver);
    }
}
