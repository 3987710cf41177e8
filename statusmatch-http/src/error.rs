//! Errors surfaced while producing a typed response value.

use std::sync::Arc;

use statusmatch_core::{DecodeError, ResolveError, StatusCode, TypeName};
use thiserror::Error;

/// Shared error source, so a memoized failure can be handed to every caller.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Error type for [`TypedResponse::value`](crate::TypedResponse::value).
///
/// Nothing here is retried: the rule decision is pure data and a decode
/// failure will not change by reading the same body again.
#[derive(Debug, Clone, Error)]
pub enum ResponseError {
    /// No rule covers the response status.
    #[error("unhandled status code {status}")]
    UnhandledStatusCode {
        /// The response status.
        status: StatusCode,
    },

    /// The matched rule's codec factory produced no codec.
    #[error("no codec available for {target}")]
    InvalidCodec {
        /// Target type of the matched rule.
        target: TypeName,
    },

    /// The codec failed to parse the body.
    #[error("failed to decode response body as {target}")]
    BodyDecoding {
        /// Target type of the matched rule.
        target: TypeName,
        /// Error reported by the codec.
        #[source]
        source: SharedError,
    },

    /// Several rules matched with no strict winner.
    ///
    /// Signals a rule set built around its conflict checks; never expected
    /// in correct use.
    #[error("ambiguous rules for status code {status}")]
    AmbiguousResolution {
        /// The response status.
        status: StatusCode,
        /// Target types of every matching rule.
        candidates: Vec<TypeName>,
    },

    /// Reading the body stream failed.
    #[error("failed to read response body")]
    BodyCollect(#[source] SharedError),

    /// The single-consumption body was taken by an earlier, abandoned read.
    #[error("response body was already consumed")]
    BodyConsumed,
}

impl From<ResolveError> for ResponseError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::NotConfigured { status } => ResponseError::UnhandledStatusCode { status },
            ResolveError::Ambiguous { status, candidates } => {
                ResponseError::AmbiguousResolution { status, candidates }
            }
        }
    }
}

impl From<DecodeError> for ResponseError {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::InvalidCodec { target } => ResponseError::InvalidCodec { target },
            DecodeError::Body { target, source } => ResponseError::BodyDecoding {
                target,
                source: Arc::from(source),
            },
        }
    }
}
