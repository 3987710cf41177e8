//! Status code ranges.
//!
//! A [`StatusRange`] is a closed interval of status codes where either end
//! may be left open. Both ends open is the wildcard that matches every code.
//!
//! ## Text form
//!
//! Ranges render in a canonical form that shows up in every diagnostic:
//!
//! | Range | Rendering |
//! |-------|-----------|
//! | wildcard | `(*)` |
//! | single code | `(404)` |
//! | closed | `(200-299)` |
//! | open below | `(*-199)` |
//! | open above | `(500-*)` |
//!
//! The same forms (with or without parentheses) are accepted by
//! [`FromStr`](std::str::FromStr), together with class shorthands such as
//! `2XX`.
//!
//! ```
//! use statusmatch_core::StatusRange;
//!
//! let success: StatusRange = "2XX".parse().unwrap();
//! assert_eq!(success.to_string(), "(200-299)");
//! assert!(success.matches(204));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RangeError;

/// A status code as seen by the range algebra.
pub type StatusCode = u16;

/// An immutable interval of status codes, possibly open at either end.
///
/// Equality and hashing are structural on the two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusRange {
    from: Option<StatusCode>,
    to: Option<StatusCode>,
}

impl StatusRange {
    /// Creates a range from optional bounds.
    ///
    /// `None` leaves that end unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Order`] when both bounds are present and
    /// `from > to`.
    pub fn new(from: Option<StatusCode>, to: Option<StatusCode>) -> Result<Self, RangeError> {
        match (from, to) {
            (Some(from), Some(to)) if from > to => Err(RangeError::Order { from, to }),
            _ => Ok(Self { from, to }),
        }
    }

    /// The wildcard range `(*)`.
    #[inline]
    pub const fn any() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// A range holding exactly one code.
    #[inline]
    pub const fn code(code: StatusCode) -> Self {
        Self {
            from: Some(code),
            to: Some(code),
        }
    }

    /// A closed range `(from-to)`.
    pub fn closed(from: StatusCode, to: StatusCode) -> Result<Self, RangeError> {
        Self::new(Some(from), Some(to))
    }

    /// A range open above: `(from-*)`.
    #[inline]
    pub const fn at_least(from: StatusCode) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// A range open below: `(*-to)`.
    #[inline]
    pub const fn at_most(to: StatusCode) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// All codes sharing a leading digit, e.g. `class(4)` is `(400-499)`.
    #[inline]
    pub const fn class(digit: u8) -> Self {
        let base = digit as StatusCode * 100;
        Self {
            from: Some(base),
            to: Some(base + 99),
        }
    }

    /// Lower bound, `None` when unbounded.
    #[inline]
    pub fn lower(&self) -> Option<StatusCode> {
        self.from
    }

    /// Upper bound, `None` when unbounded.
    #[inline]
    pub fn upper(&self) -> Option<StatusCode> {
        self.to
    }

    /// Whether this is the wildcard `(*)`.
    #[inline]
    pub fn is_any(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether this range holds exactly one code.
    #[inline]
    pub fn is_code(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from == to)
    }

    /// Returns `true` if `code` falls inside the range.
    #[inline]
    pub fn matches(&self, code: StatusCode) -> bool {
        self.from.is_none_or(|from| code >= from) && self.to.is_none_or(|to| code <= to)
    }

    /// Returns `true` if the two ranges share at least one code.
    pub fn overlaps(&self, other: &StatusRange) -> bool {
        let lower = max_lower(self.from, other.from);
        let upper = min_upper(self.to, other.to);
        match (lower, upper) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }

    /// Returns `true` if every code of `other` is also matched by `self`.
    pub fn contains(&self, other: &StatusRange) -> bool {
        let lower_ok = match (self.from, other.from) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer <= inner,
        };
        let upper_ok = match (self.to, other.to) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer >= inner,
        };
        lower_ok && upper_ok
    }
}

fn max_lower(a: Option<StatusCode>, b: Option<StatusCode>) -> Option<StatusCode> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

fn min_upper(a: Option<StatusCode>, b: Option<StatusCode>) -> Option<StatusCode> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self::any()
    }
}

impl From<StatusCode> for StatusRange {
    fn from(code: StatusCode) -> Self {
        Self::code(code)
    }
}

impl fmt::Display for StatusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => f.write_str("(*)"),
            (Some(from), Some(to)) if from == to => write!(f, "({from})"),
            (Some(from), Some(to)) => write!(f, "({from}-{to})"),
            (None, Some(to)) => write!(f, "(*-{to})"),
            (Some(from), None) => write!(f, "({from}-*)"),
        }
    }
}

impl FromStr for StatusRange {
    type Err = RangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed)
            .trim();
        let invalid = || RangeError::Parse(input.to_owned());

        if body == "*" {
            return Ok(Self::any());
        }
        if let Some(class) = parse_class(body) {
            return Ok(class);
        }
        match body.split_once('-') {
            None => body.parse().map(Self::code).map_err(|_| invalid()),
            Some((from, to)) => {
                let from = parse_bound(from.trim()).ok_or_else(invalid)?;
                let to = parse_bound(to.trim()).ok_or_else(invalid)?;
                Self::new(from, to)
            }
        }
    }
}

/// `2XX`-style shorthand: one leading digit followed by two `X`s.
fn parse_class(body: &str) -> Option<StatusRange> {
    let mut chars = body.chars();
    let digit = chars.next()?.to_digit(10)?;
    let rest = chars.as_str();
    if !rest.eq_ignore_ascii_case("xx") {
        return None;
    }
    Some(StatusRange::class(u8::try_from(digit).ok()?))
}

fn parse_bound(bound: &str) -> Option<Option<StatusCode>> {
    if bound == "*" {
        Some(None)
    } else {
        bound.parse().ok().map(Some)
    }
}

impl Serialize for StatusRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RangeVisitor;

        impl Visitor<'_> for RangeVisitor {
            type Value = StatusRange;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a status code or a status range such as \"200-299\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<StatusRange, E> {
                StatusCode::try_from(value)
                    .map(StatusRange::code)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<StatusRange, E> {
                StatusCode::try_from(value)
                    .map(StatusRange::code)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<StatusRange, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(RangeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reversed_bounds() {
        assert_eq!(
            StatusRange::closed(300, 200),
            Err(RangeError::Order { from: 300, to: 200 })
        );
        assert!(StatusRange::closed(200, 200).is_ok());
    }

    #[test]
    fn test_matches_respects_open_ends() {
        assert!(StatusRange::any().matches(0));
        assert!(StatusRange::any().matches(999));
        assert!(StatusRange::at_most(100).matches(100));
        assert!(!StatusRange::at_most(100).matches(101));
        assert!(StatusRange::at_least(500).matches(599));
        assert!(!StatusRange::at_least(500).matches(499));
        assert!(StatusRange::code(404).matches(404));
        assert!(!StatusRange::code(404).matches(405));
    }

    #[test]
    fn test_canonical_rendering() {
        assert_eq!(StatusRange::any().to_string(), "(*)");
        assert_eq!(StatusRange::code(400).to_string(), "(400)");
        assert_eq!(StatusRange::closed(200, 300).unwrap().to_string(), "(200-300)");
        assert_eq!(StatusRange::at_most(100).to_string(), "(*-100)");
        assert_eq!(StatusRange::at_least(500).to_string(), "(500-*)");
    }

    #[test]
    fn test_parse_accepts_every_rendered_form() {
        for text in ["(*)", "(400)", "(200-300)", "(*-100)", "(500-*)"] {
            let range: StatusRange = text.parse().unwrap();
            assert_eq!(range.to_string(), text);
        }
    }

    #[test]
    fn test_parse_bare_and_class_forms() {
        assert_eq!("*".parse::<StatusRange>().unwrap(), StatusRange::any());
        assert_eq!("404".parse::<StatusRange>().unwrap(), StatusRange::code(404));
        assert_eq!(
            " 200 - 299 ".parse::<StatusRange>().unwrap(),
            StatusRange::closed(200, 299).unwrap()
        );
        assert_eq!(
            "4xx".parse::<StatusRange>().unwrap(),
            StatusRange::closed(400, 499).unwrap()
        );
        assert_eq!(
            "5XX".parse::<StatusRange>().unwrap(),
            StatusRange::closed(500, 599).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("abc".parse::<StatusRange>(), Err(RangeError::Parse(_))));
        assert!(matches!("200-".parse::<StatusRange>(), Err(RangeError::Parse(_))));
        assert!(matches!("2X".parse::<StatusRange>(), Err(RangeError::Parse(_))));
        assert_eq!(
            "300-200".parse::<StatusRange>(),
            Err(RangeError::Order { from: 300, to: 200 })
        );
    }

    #[test]
    fn test_class_and_code_conversions() {
        assert_eq!(StatusRange::class(4), StatusRange::closed(400, 499).unwrap());
        assert_eq!(StatusRange::from(404u16), StatusRange::code(404));
        let range: StatusRange = 201u16.into();
        assert_eq!(range.lower(), Some(201));
        assert_eq!(range.upper(), Some(201));
        assert_eq!(StatusRange::at_least(500).upper(), None);
    }

    #[test]
    fn test_deserialize_integers_and_text() {
        let code: StatusRange = serde_json::from_str("404").unwrap();
        assert_eq!(code, StatusRange::code(404));

        let class: StatusRange = serde_json::from_str(r#""4XX""#).unwrap();
        assert_eq!(class, StatusRange::closed(400, 499).unwrap());

        let open: StatusRange = serde_json::from_str(r#""(*-100)""#).unwrap();
        assert_eq!(open, StatusRange::at_most(100));
    }

    #[test]
    fn test_deserialize_rejects_codes_outside_u16() {
        assert!(serde_json::from_str::<StatusRange>("70000").is_err());
        assert!(serde_json::from_str::<StatusRange>("-1").is_err());
        assert!(serde_json::from_str::<StatusRange>(r#""300-200""#).is_err());
        assert!(serde_json::from_str::<StatusRange>("true").is_err());
    }

    #[test]
    fn test_serializes_as_canonical_text() {
        let ranges = vec![
            StatusRange::code(404),
            StatusRange::class(2),
            StatusRange::at_least(500),
            StatusRange::any(),
        ];
        let json = serde_json::to_string(&ranges).unwrap();
        assert_eq!(json, r#"["(404)","(200-299)","(500-*)","(*)"]"#);

        let back: Vec<StatusRange> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ranges);
    }

    #[test]
    fn test_overlap_and_containment() {
        let wide = StatusRange::closed(200, 300).unwrap();
        let inner = StatusRange::closed(250, 260).unwrap();
        let shifted = StatusRange::closed(250, 350).unwrap();
        let disjoint = StatusRange::closed(400, 499).unwrap();

        assert!(wide.overlaps(&shifted));
        assert!(!wide.overlaps(&disjoint));
        assert!(wide.contains(&inner));
        assert!(!wide.contains(&shifted));
        assert!(StatusRange::any().contains(&StatusRange::at_most(100)));
        assert!(!StatusRange::at_most(100).contains(&StatusRange::any()));
        assert!(StatusRange::at_least(500).overlaps(&StatusRange::at_most(500)));
        assert!(!StatusRange::at_least(501).overlaps(&StatusRange::at_most(500)));
    }
}
