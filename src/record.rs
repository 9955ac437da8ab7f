//! Log record model
//!
//! One `LogRecord` per log/error line the host is about to emit. The
//! suppression engine reads the five match attributes and may clear
//! `deliver`; nothing in this crate ever sets it back to true.

use serde::{Deserialize, Serialize};

/// A log record as seen by the suppression engine.
///
/// The session-scoped attributes (`acting_user`, `database_name`,
/// `client_address`) are `None` for records emitted without a client
/// connection, e.g. by a maintenance or background process. An absent
/// attribute can never match a configured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Whether the record should reach the log sink. Starts true; the
    /// engine only ever clears it.
    #[serde(default = "default_deliver")]
    pub deliver: bool,

    /// Authenticated user of the emitting session.
    #[serde(default)]
    pub acting_user: Option<String>,

    /// Database the emitting session is connected to.
    #[serde(default)]
    pub database_name: Option<String>,

    /// Remote address of the client connection.
    #[serde(default)]
    pub client_address: Option<String>,

    /// Application name. Process-wide, always present, may be empty.
    #[serde(default)]
    pub application_name: String,

    /// Fixed-width alphanumeric status code (SQLSTATE style, e.g. "42P01").
    pub status_code: String,

    /// Message text. Carried through untouched; never matched against.
    #[serde(default)]
    pub message: String,
}

fn default_deliver() -> bool {
    true
}

impl LogRecord {
    /// Create a deliverable record with the given status code and no
    /// session context.
    pub fn new(status_code: impl Into<String>) -> Self {
        LogRecord {
            deliver: true,
            acting_user: None,
            database_name: None,
            client_address: None,
            application_name: String::new(),
            status_code: status_code.into(),
            message: String::new(),
        }
    }
}
