use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use statusmatch_core::{BoxCodec, BoxError, Codec, CodecFactory};

use crate::Format;

/// A [`Codec`] for `A` backed by a [`Format`].
pub struct FormatCodec<F, A> {
    format: F,
    _payload: PhantomData<fn() -> A>,
}

impl<F, A> FormatCodec<F, A> {
    /// Wraps a format.
    pub fn new(format: F) -> Self {
        Self {
            format,
            _payload: PhantomData,
        }
    }

    /// The wrapped format.
    pub fn format(&self) -> &F {
        &self.format
    }
}

impl<F: Clone, A> Clone for FormatCodec<F, A> {
    fn clone(&self) -> Self {
        Self::new(self.format.clone())
    }
}

impl<F: fmt::Debug, A> fmt::Debug for FormatCodec<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatCodec")
            .field("format", &self.format)
            .finish()
    }
}

impl<F, A> Codec<A> for FormatCodec<F, A>
where
    F: Format,
    A: Serialize + DeserializeOwned,
{
    fn decode(&self, body: &[u8]) -> Result<A, BoxError> {
        tracing::trace!(
            format = ?self.format.format_type_id(),
            len = body.len(),
            "decoding body"
        );
        Ok(self.format.deserialize(body)?)
    }

    fn encode(&self, value: &A) -> Result<Bytes, BoxError> {
        Ok(self.format.serialize(value)?)
    }
}

/// A codec factory handing out [`FormatCodec`]s over clones of `format`.
///
/// ```
/// use statusmatch_core::{Rule, StatusRange, TypeName};
/// use statusmatch_format::{JsonFormat, codec_factory};
///
/// let rule = Rule::new(
///     TypeName::of::<Vec<u32>>(),
///     [StatusRange::code(200)],
///     codec_factory::<Vec<u32>, _>(JsonFormat),
/// )
/// .unwrap();
/// assert_eq!(rule.decode(b"[1,2]").unwrap(), vec![1, 2]);
/// ```
pub fn codec_factory<A, F>(format: F) -> impl CodecFactory<A> + Clone + 'static
where
    A: Serialize + DeserializeOwned + 'static,
    F: Format + Clone,
{
    move || -> Option<BoxCodec<A>> { Some(Box::new(FormatCodec::<F, A>::new(format.clone()))) }
}
