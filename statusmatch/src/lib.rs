#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use statusmatch_core::{
    Breadth, ConflictingRanges, DecodeError, RangeConflict, RangeError, ResolveError, Rule,
    RuleError, RuleSet, RuleSetError, StatusCode, StatusRange, TypeName, resolve,
};
pub use statusmatch_http::{
    Never, OneOf, ResponseBody, ResponseError, StatusClass, Tag, TypedResponse, WrongAlternative,
};

/// Body codecs.
///
/// Re-exports the [`Codec`](codec::Codec) seam from `statusmatch-core` and
/// the serde formats from `statusmatch-format`.
pub mod codec {
    pub use statusmatch_core::{BoxCodec, BoxError, Codec, CodecFactory, SharedCodec};
    pub use statusmatch_format::{
        AnyFormat, BincodeFormat, Format, FormatCodec, FormatError, FormatTypeId, JsonFormat,
        RonFormat, codec_factory,
    };
}

/// Rules loaded from YAML.
#[cfg(feature = "configuration")]
#[cfg_attr(docsrs, doc(cfg(feature = "configuration")))]
pub mod configuration {
    pub use statusmatch_configuration::{
        AlternativeConfig, ConfigError, ResponsesConfig, ValueSerialization,
    };
}

/// The `statusmatch` prelude.
///
/// ```rust
/// use statusmatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{AnyFormat, BincodeFormat, JsonFormat, RonFormat};
    pub use crate::{OneOf, Rule, RuleSet, StatusClass, StatusRange, Tag, TypedResponse};
}
