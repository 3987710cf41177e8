//! Ordered, conflict-free rule containers.
//!
//! A [`RuleSet`] is filled at configuration time and only read afterwards.
//! Every mutation first checks the incoming rule against all other rules
//! and is rejected, leaving the set untouched, if any pair of ranges
//! conflicts.
//!
//! Mutating a set while another thread resolves against it is a misuse;
//! share it behind an `Arc` once configuration is done.
//!
//! ```
//! use statusmatch_core::{BoxCodec, Rule, RuleSet, StatusRange, TypeName};
//!
//! fn no_codec() -> Option<BoxCodec<()>> {
//!     None
//! }
//!
//! let mut rules = RuleSet::new();
//! rules
//!     .append(Rule::new(TypeName::new("Page"), [StatusRange::closed(200, 300).unwrap()], no_codec).unwrap())
//!     .unwrap();
//! let overlapping = Rule::new(TypeName::new("Other"), [StatusRange::closed(250, 350).unwrap()], no_codec).unwrap();
//! assert!(rules.append(overlapping).is_err());
//! assert_eq!(rules.len(), 1);
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::error::{ConflictingRanges, RangeConflict, ResolveError, RuleSetError};
use crate::range::StatusCode;
use crate::resolver;
use crate::rule::Rule;

/// An ordered sequence of mutually non-conflicting rules.
///
/// Insertion order only matters for iteration and diagnostics; resolution
/// priority comes from range specificity alone.
pub struct RuleSet<T> {
    pub(crate) rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds a set by appending every rule in order.
    pub fn try_from_rules<I>(rules: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        let mut set = Self::new();
        for rule in rules {
            set.append(rule)?;
        }
        Ok(set)
    }

    /// Adds a rule at the end.
    pub fn append(&mut self, rule: Rule<T>) -> Result<(), RuleSetError> {
        self.check_conflicts(&rule, None)?;
        debug!(rule = %rule, "appending response rule");
        self.rules.push(rule);
        Ok(())
    }

    /// Inserts a rule at `index`, shifting later rules back.
    pub fn insert(&mut self, index: usize, rule: Rule<T>) -> Result<(), RuleSetError> {
        if index > self.rules.len() {
            return Err(self.out_of_bounds(index));
        }
        self.check_conflicts(&rule, None)?;
        debug!(index, rule = %rule, "inserting response rule");
        self.rules.insert(index, rule);
        Ok(())
    }

    /// Replaces the rule at `index`, returning the previous one.
    ///
    /// The rule being overwritten is left out of the conflict check.
    pub fn replace(&mut self, index: usize, rule: Rule<T>) -> Result<Rule<T>, RuleSetError> {
        if index >= self.rules.len() {
            return Err(self.out_of_bounds(index));
        }
        self.check_conflicts(&rule, Some(index))?;
        debug!(index, rule = %rule, "replacing response rule");
        Ok(std::mem::replace(&mut self.rules[index], rule))
    }

    /// Removes and returns the rule at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Rule<T>, RuleSetError> {
        if index >= self.rules.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.rules.remove(index))
    }

    /// The rule at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Rule<T>> {
        self.rules.get(index)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<T>> {
        self.rules.iter()
    }

    /// Picks the most specific rule for `code`.
    ///
    /// See [`resolver::resolve`].
    pub fn resolve(&self, code: StatusCode) -> Result<&Rule<T>, ResolveError> {
        resolver::resolve(self, code)
    }

    fn out_of_bounds(&self, index: usize) -> RuleSetError {
        RuleSetError::OutOfBounds {
            index,
            len: self.rules.len(),
        }
    }

    fn check_conflicts(&self, candidate: &Rule<T>, skip: Option<usize>) -> Result<(), ConflictingRanges> {
        let conflicts: Vec<RangeConflict> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != skip)
            .flat_map(|(_, existing)| {
                candidate.ranges().iter().flat_map(move |range| {
                    existing
                        .ranges()
                        .iter()
                        .filter(move |existing_range| range.conflicts_with(existing_range))
                        .map(move |existing_range| RangeConflict {
                            target: candidate.target().clone(),
                            range: *range,
                            existing_target: existing.target().clone(),
                            existing_range: *existing_range,
                        })
                })
            })
            .collect();

        if conflicts.is_empty() {
            Ok(())
        } else {
            let error = ConflictingRanges { conflicts };
            warn!(rule = %candidate, %error, "rejecting conflicting response rule");
            Err(error)
        }
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

/// One rule per line.
impl<T> fmt::Display for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a RuleSet<T> {
    type Item = &'a Rule<T>;
    type IntoIter = std::slice::Iter<'a, Rule<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
