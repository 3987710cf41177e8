//! Closed sum type over up to eight response alternatives.
//!
//! [`OneOf`] holds exactly one value out of its declared alternatives.
//! Unused slots default to the uninhabited [`Never`], so `OneOf<A, B>` is a
//! plain two-way union.
//!
//! ```
//! use statusmatch_http::{OneOf, Tag};
//!
//! let value: OneOf<String, u16> = OneOf::Second(404);
//! assert_eq!(value.tag(), Tag::Second);
//! assert_eq!(value.second(), Ok(&404));
//! assert!(value.first().is_err());
//! ```

use std::any::TypeId;
use std::fmt;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use statusmatch_core::{CodecFactory, Rule, RuleError, StatusRange, TypeName};
use statusmatch_format::{AnyFormat, Format, codec_factory};
use thiserror::Error;

use crate::alternative::alternative_rule;

/// Placeholder for undeclared alternatives. Has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Never {}

impl Serialize for Never {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {}
    }
}

impl<'de> Deserialize<'de> for Never {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("undeclared response alternative"))
    }
}

/// Discriminant of a [`OneOf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `OneOf::First`.
    First,
    /// `OneOf::Second`.
    Second,
    /// `OneOf::Third`.
    Third,
    /// `OneOf::Fourth`.
    Fourth,
    /// `OneOf::Fifth`.
    Fifth,
    /// `OneOf::Sixth`.
    Sixth,
    /// `OneOf::Seventh`.
    Seventh,
    /// `OneOf::Eighth`.
    Eighth,
}

impl Tag {
    /// Every tag in declaration order.
    pub const ALL: [Tag; 8] = [
        Tag::First,
        Tag::Second,
        Tag::Third,
        Tag::Fourth,
        Tag::Fifth,
        Tag::Sixth,
        Tag::Seventh,
        Tag::Eighth,
    ];

    /// Zero-based position of the alternative.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The tag at a zero-based position.
    pub fn from_index(index: usize) -> Option<Tag> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::First => "first",
            Tag::Second => "second",
            Tag::Third => "third",
            Tag::Fourth => "fourth",
            Tag::Fifth => "fifth",
            Tag::Sixth => "sixth",
            Tag::Seventh => "seventh",
            Tag::Eighth => "eighth",
        };
        f.write_str(name)
    }
}

/// An alternative was requested but another one was resolved.
///
/// Recoverable: check [`OneOf::tag`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested the {requested} alternative but the {resolved} one is present")]
pub struct WrongAlternative {
    /// The accessor that was called.
    pub requested: Tag,
    /// The alternative actually held.
    pub resolved: Tag,
}

/// Exactly one of up to eight alternative values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OneOf<A, B = Never, C = Never, D = Never, E = Never, F = Never, G = Never, H = Never> {
    /// First alternative.
    First(A),
    /// Second alternative.
    Second(B),
    /// Third alternative.
    Third(C),
    /// Fourth alternative.
    Fourth(D),
    /// Fifth alternative.
    Fifth(E),
    /// Sixth alternative.
    Sixth(F),
    /// Seventh alternative.
    Seventh(G),
    /// Eighth alternative.
    Eighth(H),
}

impl<A, B, C, D, E, F, G, H> OneOf<A, B, C, D, E, F, G, H> {
    /// Which alternative is present.
    pub fn tag(&self) -> Tag {
        match self {
            OneOf::First(_) => Tag::First,
            OneOf::Second(_) => Tag::Second,
            OneOf::Third(_) => Tag::Third,
            OneOf::Fourth(_) => Tag::Fourth,
            OneOf::Fifth(_) => Tag::Fifth,
            OneOf::Sixth(_) => Tag::Sixth,
            OneOf::Seventh(_) => Tag::Seventh,
            OneOf::Eighth(_) => Tag::Eighth,
        }
    }

    /// Returns `true` if the alternative at `tag` is present.
    pub fn is(&self, tag: Tag) -> bool {
        self.tag() == tag
    }

    fn wrong(&self, requested: Tag) -> WrongAlternative {
        WrongAlternative {
            requested,
            resolved: self.tag(),
        }
    }
}

macro_rules! accessors {
    ($($variant:ident: $ty:ident => $get:ident, $into:ident;)*) => {
        impl<A, B, C, D, E, F, G, H> OneOf<A, B, C, D, E, F, G, H> {
            $(
                #[doc = concat!("Borrows the ", stringify!($get), " alternative.")]
                pub fn $get(&self) -> Result<&$ty, WrongAlternative> {
                    match self {
                        OneOf::$variant(value) => Ok(value),
                        other => Err(other.wrong(Tag::$variant)),
                    }
                }

                #[doc = concat!("Takes the ", stringify!($get), " alternative.")]
                pub fn $into(self) -> Result<$ty, WrongAlternative> {
                    match self {
                        OneOf::$variant(value) => Ok(value),
                        other => Err(other.wrong(Tag::$variant)),
                    }
                }
            )*
        }
    };
}

accessors! {
    First: A => first, into_first;
    Second: B => second, into_second;
    Third: C => third, into_third;
    Fourth: D => fourth, into_fourth;
    Fifth: E => fifth, into_fifth;
    Sixth: F => sixth, into_sixth;
    Seventh: G => seventh, into_seventh;
    Eighth: H => eighth, into_eighth;
}

/// Response value types whose alternatives can be bound to rules by
/// position, e.g. from configuration.
pub trait Alternatives: Sized + Send + Sync + 'static {
    /// Returns `true` if the alternative at `tag` is a real type rather
    /// than a [`Never`] placeholder.
    fn is_declared(tag: Tag) -> bool;

    /// Name of the type bound at `tag`.
    fn type_name(tag: Tag) -> TypeName;

    /// Builds a rule decoding the alternative at `tag` with `format`.
    fn rule<I>(tag: Tag, ranges: I, format: AnyFormat) -> Result<Rule<Self>, RuleError>
    where
        I: IntoIterator<Item = StatusRange>;

    /// Number of declared alternatives.
    fn arity() -> usize {
        Tag::ALL.into_iter().filter(|tag| Self::is_declared(*tag)).count()
    }
}

fn declared<T: 'static>() -> bool {
    TypeId::of::<T>() != TypeId::of::<Never>()
}

macro_rules! rules {
    ($($variant:ident: $ty:ident => $get:ident, $rule:ident, $rule_with:ident;)*) => {
        impl<A, B, C, D, E, F, G, H> OneOf<A, B, C, D, E, F, G, H>
        where
            A: Send + Sync + 'static,
            B: Send + Sync + 'static,
            C: Send + Sync + 'static,
            D: Send + Sync + 'static,
            E: Send + Sync + 'static,
            F: Send + Sync + 'static,
            G: Send + Sync + 'static,
            H: Send + Sync + 'static,
        {
            $(
                #[doc = concat!("A rule decoding the ", stringify!($get), " alternative with `format`.")]
                pub fn $rule<Fmt, I>(ranges: I, format: Fmt) -> Result<Rule<Self>, RuleError>
                where
                    $ty: Serialize + DeserializeOwned,
                    Fmt: Format + Clone,
                    I: IntoIterator<Item = StatusRange>,
                {
                    Self::$rule_with(ranges, codec_factory::<$ty, Fmt>(format))
                }

                #[doc = concat!("A rule decoding the ", stringify!($get), " alternative with a custom codec factory.")]
                pub fn $rule_with<Cf, I>(ranges: I, factory: Cf) -> Result<Rule<Self>, RuleError>
                where
                    Cf: CodecFactory<$ty> + 'static,
                    I: IntoIterator<Item = StatusRange>,
                {
                    alternative_rule(
                        TypeName::of::<$ty>(),
                        ranges,
                        factory,
                        OneOf::$variant,
                        Self::$get,
                    )
                }
            )*
        }

        impl<A, B, C, D, E, F, G, H> Alternatives for OneOf<A, B, C, D, E, F, G, H>
        where
            A: Serialize + DeserializeOwned + Send + Sync + 'static,
            B: Serialize + DeserializeOwned + Send + Sync + 'static,
            C: Serialize + DeserializeOwned + Send + Sync + 'static,
            D: Serialize + DeserializeOwned + Send + Sync + 'static,
            E: Serialize + DeserializeOwned + Send + Sync + 'static,
            F: Serialize + DeserializeOwned + Send + Sync + 'static,
            G: Serialize + DeserializeOwned + Send + Sync + 'static,
            H: Serialize + DeserializeOwned + Send + Sync + 'static,
        {
            fn is_declared(tag: Tag) -> bool {
                match tag {
                    $(Tag::$variant => declared::<$ty>(),)*
                }
            }

            fn type_name(tag: Tag) -> TypeName {
                match tag {
                    $(Tag::$variant => TypeName::of::<$ty>(),)*
                }
            }

            fn rule<I>(tag: Tag, ranges: I, format: AnyFormat) -> Result<Rule<Self>, RuleError>
            where
                I: IntoIterator<Item = StatusRange>,
            {
                match tag {
                    $(Tag::$variant => Self::$rule(ranges, format),)*
                }
            }
        }
    };
}

rules! {
    First: A => first, first_rule, first_rule_with;
    Second: B => second, second_rule, second_rule_with;
    Third: C => third, third_rule, third_rule_with;
    Fourth: D => fourth, fourth_rule, fourth_rule_with;
    Fifth: E => fifth, fifth_rule, fifth_rule_with;
    Sixth: F => sixth, sixth_rule, sixth_rule_with;
    Seventh: G => seventh, seventh_rule, seventh_rule_with;
    Eighth: H => eighth, eighth_rule, eighth_rule_with;
}
