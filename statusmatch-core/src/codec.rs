//! Body codec collaborator traits.
//!
//! The engine never parses bytes itself. A [`Rule`](crate::Rule) carries a
//! [`CodecFactory`] and asks it for a fresh [`Codec`] whenever a body has
//! to be decoded (or, for requests, encoded).

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::BoxError;

/// Decodes bodies into `T` and encodes `T` back into bytes.
pub trait Codec<T>: Send + Sync {
    /// Parses a complete body.
    fn decode(&self, body: &[u8]) -> Result<T, BoxError>;

    /// Serializes a value into a body.
    fn encode(&self, value: &T) -> Result<Bytes, BoxError>;
}

impl<T, C> Codec<T> for Box<C>
where
    C: Codec<T> + ?Sized,
{
    fn decode(&self, body: &[u8]) -> Result<T, BoxError> {
        (**self).decode(body)
    }

    fn encode(&self, value: &T) -> Result<Bytes, BoxError> {
        (**self).encode(value)
    }
}

impl<T, C> Codec<T> for Arc<C>
where
    C: Codec<T> + ?Sized,
{
    fn decode(&self, body: &[u8]) -> Result<T, BoxError> {
        (**self).decode(body)
    }

    fn encode(&self, value: &T) -> Result<Bytes, BoxError> {
        (**self).encode(value)
    }
}

/// A boxed codec as handed out by factories.
pub type BoxCodec<T> = Box<dyn Codec<T>>;

/// Produces codecs for a rule's target type.
///
/// Returning `None` is a configuration bug and surfaces as
/// [`DecodeError::InvalidCodec`](crate::error::DecodeError::InvalidCodec).
///
/// Implemented for any `Fn() -> Option<BoxCodec<T>>` closure.
pub trait CodecFactory<T>: Send + Sync {
    /// Returns a codec instance, or `None` if none is available.
    fn codec(&self) -> Option<BoxCodec<T>>;
}

impl<T, F> CodecFactory<T> for F
where
    F: Fn() -> Option<BoxCodec<T>> + Send + Sync,
{
    fn codec(&self) -> Option<BoxCodec<T>> {
        self()
    }
}

/// Factory that hands out clones of one shared codec.
pub struct SharedCodec<C>(Arc<C>);

impl<C> SharedCodec<C> {
    /// Wraps a codec for sharing between every decode of a rule.
    pub fn new(codec: C) -> Self {
        Self(Arc::new(codec))
    }
}

impl<C> fmt::Debug for SharedCodec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCodec").finish()
    }
}

impl<T, C> CodecFactory<T> for SharedCodec<C>
where
    C: Codec<T> + 'static,
{
    fn codec(&self) -> Option<BoxCodec<T>> {
        Some(Box::new(Arc::clone(&self.0)))
    }
}
