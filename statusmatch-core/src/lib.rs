#![warn(missing_docs)]
//! # statusmatch-core
//!
//! Core types for declaring which body type a response decodes into,
//! keyed by its status code.
//!
//! This crate is **protocol-agnostic**: status codes are plain integers and
//! bodies are byte slices. The `statusmatch-http` crate builds the typed
//! response on top of it.
//!
//! ## Building blocks
//!
//! - [`StatusRange`] - an interval of status codes, open at either end
//! - [`Breadth`] - the specificity order between ranges, plus conflict
//!   detection ([`StatusRange::conflicts_with`])
//! - [`Rule`] - ranges bound to a target type and a [`CodecFactory`]
//! - [`RuleSet`] - rules guaranteed never to conflict
//! - [`resolve`] - picks the single most specific rule for a status code
//!
//! ```
//! use statusmatch_core::{BoxCodec, Rule, RuleSet, StatusRange, TypeName};
//!
//! fn no_codec() -> Option<BoxCodec<()>> {
//!     None
//! }
//!
//! let mut rules = RuleSet::new();
//! rules.append(Rule::new(TypeName::new("Page"), ["2XX".parse::<StatusRange>().unwrap()], no_codec).unwrap()).unwrap();
//! rules.append(Rule::new(TypeName::new("NotFound"), [StatusRange::code(404)], no_codec).unwrap()).unwrap();
//! rules.append(Rule::new(TypeName::new("Problem"), [StatusRange::any()], no_codec).unwrap()).unwrap();
//!
//! assert_eq!(rules.resolve(404).unwrap().target().as_str(), "NotFound");
//! assert_eq!(rules.resolve(201).unwrap().target().as_str(), "Page");
//! assert_eq!(rules.resolve(503).unwrap().target().as_str(), "Problem");
//! ```

pub mod codec;
pub mod error;
pub mod range;
pub mod resolver;
pub mod rule;
pub mod rule_set;
pub mod specificity;
pub mod type_name;

pub use codec::{BoxCodec, Codec, CodecFactory, SharedCodec};
pub use error::{
    BoxError, ConflictingRanges, DecodeError, RangeConflict, RangeError, ResolveError, RuleError,
    RuleSetError,
};
pub use range::{StatusCode, StatusRange};
pub use resolver::resolve;
pub use rule::Rule;
pub use rule_set::RuleSet;
pub use specificity::Breadth;
pub use type_name::TypeName;
