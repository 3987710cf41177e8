//! Response rules.
//!
//! A [`Rule`] states "for status codes in these ranges, decode the body as
//! this type". Rules are immutable; a rule set replaces them whole.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::codec::CodecFactory;
use crate::error::{DecodeError, RuleError};
use crate::range::{StatusCode, StatusRange};
use crate::type_name::TypeName;

/// Binds a non-empty set of status ranges to a target type and a codec
/// factory producing that type as `T`.
///
/// `T` is the value type of the whole rule set, typically a sum type over
/// every declared alternative.
pub struct Rule<T> {
    target: TypeName,
    ranges: Vec<StatusRange>,
    factory: Arc<dyn CodecFactory<T>>,
}

impl<T> Rule<T> {
    /// Creates a rule.
    ///
    /// Duplicate ranges are collapsed, keeping declaration order.
    ///
    /// # Errors
    ///
    /// [`RuleError::MissingTarget`] for an empty type name and
    /// [`RuleError::EmptyRangeSet`] when `ranges` yields nothing.
    pub fn new<I, F>(target: TypeName, ranges: I, factory: F) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = StatusRange>,
        F: CodecFactory<T> + 'static,
    {
        Self::with_shared_factory(target, ranges, Arc::new(factory))
    }

    /// Creates a rule around an already shared factory.
    pub fn with_shared_factory<I>(
        target: TypeName,
        ranges: I,
        factory: Arc<dyn CodecFactory<T>>,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = StatusRange>,
    {
        if target.is_empty() {
            return Err(RuleError::MissingTarget);
        }
        let mut unique = Vec::new();
        for range in ranges {
            if !unique.contains(&range) {
                unique.push(range);
            }
        }
        if unique.is_empty() {
            return Err(RuleError::EmptyRangeSet { target });
        }
        Ok(Self {
            target,
            ranges: unique,
            factory,
        })
    }

    /// The target type name.
    #[inline]
    pub fn target(&self) -> &TypeName {
        &self.target
    }

    /// The declared ranges, never empty.
    #[inline]
    pub fn ranges(&self) -> &[StatusRange] {
        &self.ranges
    }

    /// Returns `true` if any declared range matches `code`.
    pub fn matches(&self, code: StatusCode) -> bool {
        self.ranges.iter().any(|range| range.matches(code))
    }

    /// Returns the narrowest of this rule's ranges that matches `code`.
    ///
    /// Equally broad matches resolve to the one declared first.
    pub fn most_specific_range_for(&self, code: StatusCode) -> Option<&StatusRange> {
        self.ranges
            .iter()
            .filter(|range| range.matches(code))
            .min_by_key(|range| range.breadth())
    }

    /// Decodes a body with a fresh codec from the factory.
    pub fn decode(&self, body: &[u8]) -> Result<T, DecodeError> {
        let codec = self.factory.codec().ok_or_else(|| DecodeError::InvalidCodec {
            target: self.target.clone(),
        })?;
        codec.decode(body).map_err(|source| DecodeError::Body {
            target: self.target.clone(),
            source,
        })
    }

    /// Encodes a value with a fresh codec from the factory.
    pub fn encode(&self, value: &T) -> Result<Bytes, DecodeError> {
        let codec = self.factory.codec().ok_or_else(|| DecodeError::InvalidCodec {
            target: self.target.clone(),
        })?;
        codec.encode(value).map_err(|source| DecodeError::Body {
            target: self.target.clone(),
            source,
        })
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            ranges: self.ranges.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("target", &self.target)
            .field("ranges", &self.ranges)
            .field("factory", &"...")
            .finish()
    }
}

/// `TypeName: (r1), (r2), ...`
impl<T> fmt::Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.target)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{BoxCodec, Codec};
    use crate::error::BoxError;

    struct Utf8;

    impl Codec<String> for Utf8 {
        fn decode(&self, body: &[u8]) -> Result<String, BoxError> {
            Ok(String::from_utf8(body.to_vec())?)
        }

        fn encode(&self, value: &String) -> Result<Bytes, BoxError> {
            Ok(Bytes::copy_from_slice(value.as_bytes()))
        }
    }

    fn utf8() -> Option<BoxCodec<String>> {
        Some(Box::new(Utf8))
    }

    fn closed(from: u16, to: u16) -> StatusRange {
        StatusRange::closed(from, to).unwrap()
    }

    #[test]
    fn test_renders_target_and_ranges() {
        let rule = Rule::<String>::new(
            TypeName::new("NoContentType"),
            [
                closed(200, 300),
                StatusRange::code(400),
                StatusRange::any(),
                StatusRange::at_most(100),
            ],
            utf8,
        )
        .unwrap();
        assert_eq!(
            rule.to_string(),
            "NoContentType: (200-300), (400), (*), (*-100)"
        );
    }

    #[test]
    fn test_rejects_empty_ranges() {
        let result = Rule::<String>::new(TypeName::new("Empty"), Vec::new(), utf8);
        assert_eq!(
            result.unwrap_err(),
            RuleError::EmptyRangeSet {
                target: TypeName::new("Empty")
            }
        );
    }

    #[test]
    fn test_rejects_missing_target() {
        let result = Rule::<String>::new(TypeName::default(), [StatusRange::any()], utf8);
        assert_eq!(result.unwrap_err(), RuleError::MissingTarget);
    }

    #[test]
    fn test_collapses_duplicate_ranges() {
        let rule = Rule::<String>::new(
            TypeName::of::<String>(),
            [StatusRange::code(200), StatusRange::code(200), StatusRange::code(201)],
            utf8,
        )
        .unwrap();
        assert_eq!(rule.to_string(), "String: (200), (201)");
    }

    #[test]
    fn test_most_specific_range_for() {
        let rule = Rule::<String>::new(
            TypeName::of::<String>(),
            [StatusRange::any(), closed(400, 499), StatusRange::code(404)],
            utf8,
        )
        .unwrap();
        assert!(rule.matches(999));
        assert_eq!(
            rule.most_specific_range_for(404),
            Some(&StatusRange::code(404))
        );
        assert_eq!(rule.most_specific_range_for(450), Some(&closed(400, 499)));
        assert_eq!(rule.most_specific_range_for(500), Some(&StatusRange::any()));

        let narrow = Rule::<String>::new(TypeName::of::<String>(), [closed(200, 299)], utf8).unwrap();
        assert!(!narrow.matches(300));
        assert_eq!(narrow.most_specific_range_for(300), None);
    }

    #[test]
    fn test_decode_uses_factory() {
        let rule = Rule::<String>::new(TypeName::of::<String>(), [StatusRange::any()], utf8).unwrap();
        assert_eq!(rule.decode(b"hello").unwrap(), "hello");
        assert_eq!(rule.encode(&"hi".to_owned()).unwrap(), Bytes::from_static(b"hi"));

        let err = rule.decode(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DecodeError::Body { ref target, .. } if target.as_str() == "String"));
    }

    #[test]
    fn test_missing_codec_is_reported() {
        let rule = Rule::<String>::new(
            TypeName::of::<String>(),
            [StatusRange::any()],
            || -> Option<BoxCodec<String>> { None },
        )
        .unwrap();
        assert!(matches!(
            rule.decode(b"hello"),
            Err(DecodeError::InvalidCodec { .. })
        ));
    }
}
