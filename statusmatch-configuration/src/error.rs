use statusmatch_core::{RangeError, RuleError, RuleSetError, TypeName};
use thiserror::Error;

/// Errors raised while loading response rules from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML for [`ResponsesConfig`](crate::ResponsesConfig).
    #[error("invalid responses configuration: {message}")]
    Yaml {
        /// Parser message, including the location when known.
        message: String,
    },

    /// A status range could not be built.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// An alternative declares an unusable rule.
    #[error("alternative {position}: {source}")]
    Rule {
        /// Zero-based position of the alternative.
        position: usize,
        /// Why the rule was rejected.
        #[source]
        source: RuleError,
    },

    /// The alternatives conflict with each other.
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),

    /// Configuration names an alternative the response type does not declare.
    #[error("alternative {position} is not declared by the response type ({declared} declared)")]
    UnknownAlternative {
        /// Zero-based position of the alternative.
        position: usize,
        /// How many alternatives the response type declares.
        declared: usize,
    },

    /// The configured name does not match the type bound at that position.
    #[error("alternative {position} is named {configured} but binds {actual}")]
    NameMismatch {
        /// Zero-based position of the alternative.
        position: usize,
        /// Name given in configuration.
        configured: String,
        /// Name of the bound type.
        actual: TypeName,
    },

    /// More entries than a response type can hold.
    #[error("{count} alternatives configured, at most {max} are supported")]
    TooManyAlternatives {
        /// Number of configured alternatives.
        count: usize,
        /// Upper bound.
        max: usize,
    },
}
