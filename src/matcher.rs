//! Attribute matchers
//!
//! Five structurally identical matchers, one per record attribute, each
//! driven by one configured match list. A matcher with an empty list is
//! disabled; an absent record attribute never matches. Comparison is exact
//! byte equality, case-sensitive, no normalization.

use crate::config::{Setting, SuppressionConfig};
use crate::list::{self, ConfigError};
use crate::record::LogRecord;

/// The record attribute a matcher tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    User,
    Application,
    StatusCode,
    Database,
    ClientAddress,
}

impl Attribute {
    /// Fixed evaluation order. Semantics are pure OR, so order never
    /// changes the outcome; fixing it keeps tests deterministic and bounds
    /// the work done before a short-circuit.
    pub const EVALUATION_ORDER: [Attribute; 5] = [
        Attribute::User,
        Attribute::Application,
        Attribute::StatusCode,
        Attribute::Database,
        Attribute::ClientAddress,
    ];

    /// The setting that configures this matcher.
    pub fn setting(self) -> Setting {
        match self {
            Attribute::User => Setting::UserName,
            Attribute::Application => Setting::ApplicationName,
            Attribute::StatusCode => Setting::Sqlcode,
            Attribute::Database => Setting::DatabaseName,
            Attribute::ClientAddress => Setting::ClientIp,
        }
    }

    /// This attribute's value on the record, if present.
    pub fn value(self, record: &LogRecord) -> Option<&str> {
        match self {
            Attribute::User => record.acting_user.as_deref(),
            Attribute::Application => Some(record.application_name.as_str()),
            Attribute::StatusCode => Some(record.status_code.as_str()),
            Attribute::Database => record.database_name.as_deref(),
            Attribute::ClientAddress => record.client_address.as_deref(),
        }
    }

    /// Test one record against this matcher's configured list.
    ///
    /// `tokens` is a scratch buffer owned by the caller's evaluation scope;
    /// it is cleared here before parsing into it.
    pub fn matches(
        self,
        record: &LogRecord,
        config: &SuppressionConfig,
        tokens: &mut Vec<String>,
    ) -> Result<bool, ConfigError> {
        let setting = self.setting();
        let raw = config.raw_list(setting);
        if raw.is_empty() {
            return Ok(false);
        }
        let Some(value) = self.value(record) else {
            return Ok(false);
        };

        tokens.clear();
        list::tokenize_into(setting, raw, tokens)?;
        Ok(tokens.iter().any(|token| token == value))
    }
}
