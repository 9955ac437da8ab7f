//! Logfilter - per-record log suppression with reloadable match lists
//!
//! This library decides, per log record, whether the record should be
//! suppressed before it reaches the log sink, based on five operator
//! configured match lists (user, application name, status code, database,
//! client address). Matching is exact string equality with OR composition
//! across the five matchers; a broken list fails open and is reported
//! rather than silently disabling the filter.

pub mod chain;
pub mod cli;
pub mod config;
pub mod engine;
pub mod list;
pub mod matcher;
pub mod record;
pub mod scratch;
pub mod stats;
