//! Specificity ordering and conflict detection between status ranges.
//!
//! Ranges are ranked by [`Breadth`]: a single code is narrower than any
//! closed range, a closed range is narrower than a half-open one, and the
//! wildcard is the broadest of all. Inside the closed class the width
//! (`to - from + 1`) decides.
//!
//! Specificity alone never makes two overlapping ranges safe to combine.
//! Overlapping ranges are only resolvable when the narrower one is a subset
//! of the broader one; anything else is a conflict:
//!
//! ```
//! use statusmatch_core::StatusRange;
//!
//! let not_found = StatusRange::code(404);
//! let client_errors = StatusRange::closed(400, 499).unwrap();
//! assert!(not_found.more_specific_than(&client_errors));
//! assert!(!not_found.conflicts_with(&client_errors));
//!
//! let a = StatusRange::closed(200, 300).unwrap();
//! let b = StatusRange::closed(250, 350).unwrap();
//! assert!(a.conflicts_with(&b));
//! ```

use std::cmp::Ordering;

use crate::range::StatusRange;

/// How many codes a range can match, bucketed by class.
///
/// The derived ordering is the specificity order: earlier variants are
/// narrower. Half-open ranges carry no width and are all equally broad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breadth {
    /// Exactly one code.
    Code,
    /// A closed range of the given width (always at least 2).
    Bounded(u32),
    /// Open at one end.
    HalfOpen,
    /// The wildcard.
    Any,
}

impl StatusRange {
    /// Returns the breadth class of this range.
    pub fn breadth(&self) -> Breadth {
        match (self.lower(), self.upper()) {
            (None, None) => Breadth::Any,
            (Some(from), Some(to)) if from == to => Breadth::Code,
            (Some(from), Some(to)) => Breadth::Bounded(u32::from(to) - u32::from(from) + 1),
            _ => Breadth::HalfOpen,
        }
    }

    /// Returns `true` if `self` is strictly narrower than `other`.
    ///
    /// Irreflexive and asymmetric, but not total: ranges of identical
    /// breadth are mutually non-dominant.
    #[inline]
    pub fn more_specific_than(&self, other: &StatusRange) -> bool {
        self.breadth() < other.breadth()
    }

    /// Returns `true` if both ranges can match the same code and neither
    /// strictly dominates the other.
    ///
    /// Domination requires both a narrower breadth and full containment
    /// inside the broader range. The relation is symmetric.
    pub fn conflicts_with(&self, other: &StatusRange) -> bool {
        self.overlaps(other) && !self.dominates(other) && !other.dominates(self)
    }

    /// Compares specificity, `Greater` meaning `self` is more specific.
    ///
    /// `Equal` is returned both for equally broad ranges and for
    /// conflicting ones, so it cannot stand in for
    /// [`conflicts_with`](Self::conflicts_with) when validating.
    pub fn compare_specificity(&self, other: &StatusRange) -> Ordering {
        if self.conflicts_with(other) {
            Ordering::Equal
        } else {
            other.breadth().cmp(&self.breadth())
        }
    }

    fn dominates(&self, other: &StatusRange) -> bool {
        self.more_specific_than(other) && other.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(from: u16, to: u16) -> StatusRange {
        StatusRange::closed(from, to).unwrap()
    }

    fn sample() -> Vec<StatusRange> {
        vec![
            StatusRange::any(),
            StatusRange::code(404),
            StatusRange::code(200),
            StatusRange::at_most(100),
            StatusRange::at_most(300),
            StatusRange::at_least(500),
            closed(200, 300),
            closed(250, 350),
            closed(400, 499),
            closed(200, 299),
            closed(250, 260),
        ]
    }

    #[test]
    fn test_breadth_classes() {
        assert_eq!(StatusRange::code(200).breadth(), Breadth::Code);
        assert_eq!(closed(200, 299).breadth(), Breadth::Bounded(100));
        assert_eq!(StatusRange::at_least(500).breadth(), Breadth::HalfOpen);
        assert_eq!(StatusRange::any().breadth(), Breadth::Any);
        assert!(Breadth::Code < Breadth::Bounded(2));
        assert!(Breadth::Bounded(u32::MAX) < Breadth::HalfOpen);
        assert!(Breadth::HalfOpen < Breadth::Any);
    }

    #[test]
    fn test_conflict_is_symmetric() {
        let ranges = sample();
        for x in &ranges {
            for y in &ranges {
                assert_eq!(x.conflicts_with(y), y.conflicts_with(x), "{x} vs {y}");
            }
        }
    }

    #[test]
    fn test_specificity_is_irreflexive_and_asymmetric() {
        let ranges = sample();
        for x in &ranges {
            assert!(!x.more_specific_than(x), "{x}");
            for y in &ranges {
                if x.more_specific_than(y) {
                    assert!(!y.more_specific_than(x), "{x} vs {y}");
                }
            }
        }
    }

    #[test]
    fn test_everything_narrower_than_wildcard() {
        let any = StatusRange::any();
        for range in sample().into_iter().filter(|range| !range.is_any()) {
            assert!(range.more_specific_than(&any), "{range}");
            assert!(!range.conflicts_with(&any), "{range}");
        }
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        assert!(closed(200, 300).conflicts_with(&closed(250, 350)));
        // narrower by width but not contained
        assert!(closed(290, 310).conflicts_with(&closed(200, 300)));
    }

    #[test]
    fn test_contained_code_does_not_conflict() {
        let code = StatusRange::code(404);
        let class = closed(400, 499);
        assert!(code.more_specific_than(&class));
        assert!(!code.conflicts_with(&class));
        assert!(!closed(250, 260).conflicts_with(&closed(200, 300)));
    }

    #[test]
    fn test_equal_ranges_conflict() {
        assert!(StatusRange::code(200).conflicts_with(&StatusRange::code(200)));
        assert!(StatusRange::any().conflicts_with(&StatusRange::any()));
        assert!(StatusRange::at_most(100).conflicts_with(&StatusRange::at_most(300)));
    }

    #[test]
    fn test_disjoint_ranges_never_conflict() {
        assert!(!closed(200, 299).conflicts_with(&closed(400, 499)));
        assert!(!StatusRange::at_most(100).conflicts_with(&StatusRange::at_least(500)));
        assert!(!StatusRange::code(200).conflicts_with(&StatusRange::code(201)));
    }

    #[test]
    fn test_compare_specificity() {
        let code = StatusRange::code(404);
        let class = closed(400, 499);
        assert_eq!(code.compare_specificity(&class), Ordering::Greater);
        assert_eq!(class.compare_specificity(&code), Ordering::Less);
        assert_eq!(
            closed(200, 299).compare_specificity(&closed(400, 499)),
            Ordering::Equal
        );
        // conflicting pair cannot be ordered
        assert_eq!(
            closed(290, 310).compare_specificity(&closed(200, 300)),
            Ordering::Equal
        );
        // disjoint ranges still order by breadth
        assert_eq!(
            closed(100, 150).compare_specificity(&closed(200, 300)),
            Ordering::Greater
        );
    }
}
