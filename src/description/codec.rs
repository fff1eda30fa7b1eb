//! Base commit SHA embedding for status descriptions
//!
//! Code hosts cap the length of a commit status description, and the
//! posted status is the only place the base commit of a comparison is
//! recorded. The codec appends a `BaseSHA:<sha>` suffix to the
//! human-readable description, truncating the description (never the
//! suffix) so the whole string stays within budget:
//!
//! ```text
//! Job is running... BaseSHA:2641c89aac959fb804ec6f2a4a22e129f4ac4900
//! <description, truncated + "..." if needed><marker><40 hex chars>
//! ```
//!
//! Lengths are counted in characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CodecError;

/// Length of a full commit SHA in hex characters
pub const COMMIT_SHA_LEN: usize = 40;

pub const DEFAULT_MAX_LENGTH: usize = 140;
pub const DEFAULT_ELLIPSIS: &str = "...";
pub const DEFAULT_MARKER: &str = "BaseSHA:";

static COMMIT_SHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").unwrap());

/// Whether `s` is a full lowercase hex commit SHA
pub fn is_commit_sha(s: &str) -> bool {
    COMMIT_SHA_REGEX.is_match(s)
}

/// Length budget and literals used by a [`DescriptionCodec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum description length accepted by the status backend
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Appended to a truncated description
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Literal preceding the embedded SHA
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            ellipsis: default_ellipsis(),
            marker: default_marker(),
        }
    }
}

impl CodecConfig {
    /// Smallest budget that still fits a truncated description with a full suffix
    pub fn required_length(&self) -> usize {
        self.marker.chars().count() + COMMIT_SHA_LEN + self.ellipsis.chars().count()
    }
}

/// Encodes and decodes the base commit SHA suffix of a status description
#[derive(Debug, Clone, Default)]
pub struct DescriptionCodec {
    config: CodecConfig,
}

impl DescriptionCodec {
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        if config.marker.is_empty() {
            return Err(CodecError::EmptyMarker);
        }

        // Decode searches for the last marker, so it must not be able to end inside a SHA
        if config
            .marker
            .ends_with(|c: char| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CodecError::AmbiguousMarker(config.marker));
        }

        let required = config.required_length();
        if config.max_length < required {
            return Err(CodecError::BudgetTooSmall {
                max_length: config.max_length,
                required,
            });
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    /// Append `base_sha` to `description`.
    ///
    /// - An empty `base_sha` yields the description truncated to the budget.
    /// - If description and suffix fit, they are simply concatenated.
    /// - Otherwise the description is cut and followed by the ellipsis so
    ///   the result is exactly `max_length` characters long.
    pub fn append_base_sha(&self, description: &str, base_sha: &str) -> String {
        let max_length = self.config.max_length;

        if base_sha.is_empty() {
            return truncate_chars(description, max_length).to_string();
        }

        let suffix = format!("{}{}", self.config.marker, base_sha);
        let suffix_len = suffix.chars().count();
        if description.chars().count() + suffix_len <= max_length {
            return format!("{}{}", description, suffix);
        }

        let ellipsis_len = self.config.ellipsis.chars().count();
        if suffix_len + ellipsis_len > max_length {
            warn!(
                "Base SHA suffix ({} chars) does not fit description budget {}; dropping it",
                suffix_len, max_length
            );
            return truncate_chars(description, max_length).to_string();
        }

        let keep = max_length - suffix_len - ellipsis_len;
        format!(
            "{}{}{}",
            truncate_chars(description, keep),
            self.config.ellipsis,
            suffix
        )
    }

    /// Recover the base SHA from a description built by [`append_base_sha`].
    ///
    /// Only the text after the last marker is considered, and it must be
    /// exactly one lowercase 40-character hex SHA. Anything else yields `None`.
    ///
    /// [`append_base_sha`]: DescriptionCodec::append_base_sha
    pub fn parse_base_sha<'a>(&self, description: &'a str) -> Option<&'a str> {
        let idx = description.rfind(self.config.marker.as_str())?;
        let payload = &description[idx + self.config.marker.len()..];
        is_commit_sha(payload).then_some(payload)
    }
}

/// [`DescriptionCodec::append_base_sha`] with the default 140-character budget.
pub fn append_base_sha(description: &str, base_sha: &str) -> String {
    DescriptionCodec::default().append_base_sha(description, base_sha)
}

/// [`DescriptionCodec::parse_base_sha`] with the default marker. Returns an
/// empty string when no valid SHA is present.
pub fn parse_base_sha(description: &str) -> String {
    DescriptionCodec::default()
        .parse_base_sha(description)
        .unwrap_or_default()
        .to_string()
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
