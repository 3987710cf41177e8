//! Typed responses decoded on first access.
//!
//! A [`TypedResponse`] pairs a completed exchange with the rule set declared
//! for it. The first call to [`value`](TypedResponse::value) resolves the
//! rule for the status code, reads the body and decodes it; the outcome,
//! success or failure, is cached for the lifetime of the response.
//!
//! Concurrent first callers do not race: one of them decodes while the
//! others wait for it, so the codec runs once and a streaming body is read
//! once.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use http::response::Parts;
use http::{HeaderMap, Response};
use http_body::Body as HttpBody;
use http_body_util::Full;
use statusmatch_core::{BoxError, RuleSet};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::body::ResponseBody;
use crate::error::ResponseError;
use crate::one_of::{OneOf, Tag};

/// A response whose body decodes lazily into `V` according to a shared
/// [`RuleSet`].
pub struct TypedResponse<V, B = Full<Bytes>> {
    parts: Parts,
    body: Mutex<Option<ResponseBody<B>>>,
    rules: Arc<RuleSet<V>>,
    value: OnceCell<Result<V, ResponseError>>,
}

impl<V, B> TypedResponse<V, B> {
    /// Creates an unresolved response from its parts.
    pub fn new(parts: Parts, body: ResponseBody<B>, rules: Arc<RuleSet<V>>) -> Self {
        Self {
            parts,
            body: Mutex::new(Some(body)),
            rules,
            value: OnceCell::new(),
        }
    }

    /// Wraps a response with a streaming body.
    pub fn from_response(response: Response<B>, rules: Arc<RuleSet<V>>) -> Self {
        let (parts, body) = response.into_parts();
        Self::new(parts, ResponseBody::Stream(body), rules)
    }

    /// The response status.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// The rule set this response decodes against.
    pub fn rules(&self) -> &Arc<RuleSet<V>> {
        &self.rules
    }

    /// Returns `true` once a decode attempt has finished.
    pub fn is_resolved(&self) -> bool {
        self.value.initialized()
    }

    /// The decoded value, if it was already produced successfully.
    ///
    /// Never triggers a decode.
    pub fn try_value(&self) -> Option<&V> {
        self.value.get().and_then(|result| result.as_ref().ok())
    }

    fn take_body(&self) -> Result<ResponseBody<B>, ResponseError> {
        self.body
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(ResponseError::BodyConsumed)
    }
}

impl<V> TypedResponse<V> {
    /// Wraps an in-memory body.
    pub fn from_bytes(
        status: http::StatusCode,
        body: impl Into<Bytes>,
        rules: Arc<RuleSet<V>>,
    ) -> Self {
        let (mut parts, ()) = Response::new(()).into_parts();
        parts.status = status;
        Self::new(parts, ResponseBody::Complete(body.into()), rules)
    }
}

impl<V, B> TypedResponse<V, B>
where
    V: Send + Sync,
    B: HttpBody + Send,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    /// Returns the decoded value, decoding it on first access.
    ///
    /// # Errors
    ///
    /// - [`ResponseError::UnhandledStatusCode`] if no rule covers the status.
    /// - [`ResponseError::InvalidCodec`] if the rule's factory yields no codec.
    /// - [`ResponseError::BodyDecoding`] if the codec rejects the body.
    /// - [`ResponseError::BodyCollect`] if the body stream fails.
    ///
    /// Failures are cached like values; later calls return the same error.
    #[tracing::instrument(level = "debug", skip(self), fields(status = %self.parts.status))]
    pub async fn value(&self) -> Result<&V, ResponseError> {
        self.value
            .get_or_init(|| self.resolve_and_decode())
            .await
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Consumes the response and returns the decoded value.
    pub async fn into_value(mut self) -> Result<V, ResponseError> {
        match self.value.take() {
            Some(result) => result,
            None => self.resolve_and_decode().await,
        }
    }

    async fn resolve_and_decode(&self) -> Result<V, ResponseError> {
        let status = self.parts.status.as_u16();
        let rule = self.rules.resolve(status)?;
        let body = self.take_body()?.into_bytes().await?;
        debug!(status, rule = %rule, len = body.len(), "decoding response body");
        Ok(rule.decode(&body)?)
    }
}

impl<V, B> TypedResponse<V, B>
where
    V: AlternativeTag + Send + Sync,
    B: HttpBody + Send,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    /// Which alternative the body decoded into.
    pub async fn tag(&self) -> Result<Tag, ResponseError> {
        self.value().await.map(AlternativeTag::tag)
    }
}

/// Sum types that can report which alternative they hold.
pub trait AlternativeTag {
    /// The alternative present.
    fn tag(&self) -> Tag;
}

impl<A, B, C, D, E, F, G, H> AlternativeTag for OneOf<A, B, C, D, E, F, G, H> {
    fn tag(&self) -> Tag {
        OneOf::tag(self)
    }
}

impl<V, B> fmt::Debug for TypedResponse<V, B>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedResponse")
            .field("status", &self.parts.status)
            .field("rules", &self.rules)
            .field("value", &self.value.get())
            .finish()
    }
}
