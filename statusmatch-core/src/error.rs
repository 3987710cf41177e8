//! Error types for rule declaration and resolution.
//!
//! Configuration-time errors ([`RangeError`], [`RuleError`],
//! [`RuleSetError`]) must abort the configuration step. Resolution-time
//! errors ([`ResolveError`], [`DecodeError`]) go back to whoever asked for
//! the decoded value and are never retried here.

use std::fmt;

use thiserror::Error;

use crate::range::{StatusCode, StatusRange};
use crate::type_name::TypeName;

/// Boxed error produced by a codec collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A malformed status range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Both bounds are present and the lower one is greater.
    #[error("status range lower bound {from} is greater than upper bound {to}")]
    Order {
        /// Declared lower bound.
        from: StatusCode,
        /// Declared upper bound.
        to: StatusCode,
    },

    /// The text is not a recognised range expression.
    #[error("invalid status range expression `{0}`")]
    Parse(String),
}

/// A rule that cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule was declared without any status range.
    #[error("rule for {target} declares no status ranges")]
    EmptyRangeSet {
        /// Target type of the rejected rule.
        target: TypeName,
    },

    /// The rule has an empty target type name.
    #[error("rule declares no target type")]
    MissingTarget,
}

/// One pair of ranges that cannot coexist in a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConflict {
    /// Target type of the rule being added.
    pub target: TypeName,
    /// Offending range of the rule being added.
    pub range: StatusRange,
    /// Target type of the rule already in the set.
    pub existing_target: TypeName,
    /// Offending range of the rule already in the set.
    pub existing_range: StatusRange,
}

impl fmt::Display for RangeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} overlaps {} {}",
            self.target, self.range, self.existing_target, self.existing_range
        )
    }
}

/// A rule set mutation that would make resolution ambiguous.
///
/// Lists every conflicting pair found, not just the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ConflictingRanges {
    /// All offending pairs.
    pub conflicts: Vec<RangeConflict>,
}

impl fmt::Display for ConflictingRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("conflicting status ranges: ")?;
        for (i, conflict) in self.conflicts.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{conflict}")?;
        }
        Ok(())
    }
}

/// Error type for rule set mutations.
///
/// A failed mutation always leaves the set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// The new rule conflicts with rules already in the set.
    #[error(transparent)]
    Conflict(#[from] ConflictingRanges),

    /// Positional access past the end of the set.
    #[error("rule index {index} is out of bounds for a set of {len} rules")]
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// Current number of rules.
        len: usize,
    },
}

/// Failure to pick a rule for a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No rule covers the status code.
    #[error("no rule configured for status code {status}")]
    NotConfigured {
        /// The observed status code.
        status: StatusCode,
    },

    /// Several rules match with no strict winner.
    ///
    /// Only reachable if the rule set's conflict guard was bypassed.
    #[error("ambiguous rules for status code {status}: {}", join(candidates))]
    Ambiguous {
        /// The observed status code.
        status: StatusCode,
        /// Target types of every matching rule.
        candidates: Vec<TypeName>,
    },
}

fn join(names: &[TypeName]) -> String {
    names
        .iter()
        .map(TypeName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to turn a body into a rule's target type.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The rule's codec factory produced no codec.
    #[error("codec factory for {target} produced no codec")]
    InvalidCodec {
        /// Target type of the rule.
        target: TypeName,
    },

    /// The codec rejected the body.
    #[error("failed to decode body as {target}")]
    Body {
        /// Target type of the rule.
        target: TypeName,
        /// Error reported by the codec.
        #[source]
        source: BoxError,
    },
}
