//! Shared error types for the configuration core.

use thiserror::Error;

/// Raised when the IP allowlist text does not match the expected grammar,
/// most commonly because a range entry does not contain exactly two
/// comma-separated address tokens.
///
/// The display text is surfaced verbatim to end users by the access-control
/// layer, so its wording is a compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Your IP address is not allowed. Verify your network address and your Refocus IP settings")]
pub struct MalformedRangeError;
