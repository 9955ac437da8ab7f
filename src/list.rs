//! Match-list tokenizer
//!
//! A setting value is a comma-separated list of literal match values.
//! Elements are trimmed of surrounding whitespace and one balanced pair of
//! double quotes; whatever the quotes enclose is kept verbatim. An empty
//! element (consecutive, leading, or trailing commas) or an unbalanced
//! quote invalidates the whole list.

use thiserror::Error;

use crate::config::Setting;

/// Errors raised when a configured match list is used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The named setting is not a well-formed comma-separated list.
    #[error("parameter \"{}\" must be a comma-separated list of {}: {}", .setting, .setting.expects(), .reason)]
    InvalidList { setting: Setting, reason: ListError },
}

/// Why a list failed to tokenize.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("empty element in list")]
    EmptyElement,
    #[error("unbalanced double quote")]
    UnbalancedQuote,
}

impl ConfigError {
    /// The setting whose list is malformed.
    pub fn setting(&self) -> Setting {
        match self {
            ConfigError::InvalidList { setting, .. } => *setting,
        }
    }
}

/// Tokenize a raw setting value, appending one token per element to `out`.
///
/// An empty raw value means the matcher is disabled and yields no tokens.
/// On error `out` may hold a partial prefix; callers hand in a scratch
/// buffer whose scope guard clears it either way.
pub fn tokenize_into(
    setting: Setting,
    raw: &str,
    out: &mut Vec<String>,
) -> Result<(), ConfigError> {
    if raw.is_empty() {
        return Ok(());
    }

    for element in raw.split(',') {
        let token = strip_quotes(element.trim()).ok_or(ConfigError::InvalidList {
            setting,
            reason: ListError::UnbalancedQuote,
        })?;
        if token.is_empty() {
            return Err(ConfigError::InvalidList {
                setting,
                reason: ListError::EmptyElement,
            });
        }
        out.push(token.to_string());
    }
    Ok(())
}

/// Tokenize a raw setting value into a fresh vector.
pub fn tokenize(setting: Setting, raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut out = Vec::new();
    tokenize_into(setting, raw, &mut out)?;
    Ok(out)
}

/// Remove one balanced pair of surrounding double quotes, if present.
/// Returns `None` when a quote opens or closes without its partner.
fn strip_quotes(element: &str) -> Option<&str> {
    if let Some(rest) = element.strip_prefix('"') {
        rest.strip_suffix('"')
    } else if element.ends_with('"') {
        None
    } else {
        Some(element)
    }
}
