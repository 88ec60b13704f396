//! Error type for location parsing.
//!
//! Path algebra never fails; only resolving and decoding a URL can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be resolved to an absolute URL.
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// The input is relative and there is no active location to resolve it against.
    #[error("cannot resolve relative URL '{input}' without an active location")]
    MissingBase { input: String },
    /// A component contained a malformed percent escape or non-UTF-8 bytes.
    #[error("malformed percent-encoding in '{input}'")]
    Decode { input: String },
}
