//! Codecs that decode one alternative of a sum type.
//!
//! A rule set over `OneOf<A, B, ..>` needs every rule to produce the whole
//! sum type. [`AlternativeCodec`] wraps a codec for a single alternative,
//! injecting decoded values into their slot and refusing to encode values
//! that hold a different slot.

use bytes::Bytes;
use statusmatch_core::{
    BoxCodec, BoxError, Codec, CodecFactory, Rule, RuleError, StatusRange, TypeName,
};

use crate::one_of::WrongAlternative;

type Inject<A, V> = fn(A) -> V;
type Project<A, V> = fn(&V) -> Result<&A, WrongAlternative>;

/// Adapts a `Codec<A>` into a `Codec<V>` for a sum type `V` holding `A`.
pub struct AlternativeCodec<A, V> {
    inner: BoxCodec<A>,
    inject: Inject<A, V>,
    project: Project<A, V>,
}

impl<A, V> AlternativeCodec<A, V> {
    /// Wraps `inner`, placing decoded values with `inject` and reading
    /// values to encode with `project`.
    pub fn new(inner: BoxCodec<A>, inject: Inject<A, V>, project: Project<A, V>) -> Self {
        Self {
            inner,
            inject,
            project,
        }
    }
}

impl<A, V> Codec<V> for AlternativeCodec<A, V> {
    fn decode(&self, body: &[u8]) -> Result<V, BoxError> {
        self.inner.decode(body).map(self.inject)
    }

    fn encode(&self, value: &V) -> Result<Bytes, BoxError> {
        let value = (self.project)(value)?;
        self.inner.encode(value)
    }
}

/// Builds a rule for one alternative of `V` from a factory for `A`.
///
/// The factory is asked for a fresh codec on every decode; a factory that
/// yields nothing still yields nothing after wrapping.
pub fn alternative_rule<A, V, Cf, I>(
    target: TypeName,
    ranges: I,
    factory: Cf,
    inject: Inject<A, V>,
    project: Project<A, V>,
) -> Result<Rule<V>, RuleError>
where
    A: 'static,
    V: 'static,
    Cf: CodecFactory<A> + 'static,
    I: IntoIterator<Item = StatusRange>,
{
    Rule::new(target, ranges, move || -> Option<BoxCodec<V>> {
        let inner = factory.codec()?;
        Some(Box::new(AlternativeCodec::new(inner, inject, project)))
    })
}
