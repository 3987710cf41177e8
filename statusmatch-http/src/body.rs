//! Response bodies handed to a typed response.
//!
//! A body is either already in memory or a stream that can be read exactly
//! once. Either way the decoder sees one contiguous buffer.

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use http_body::Body as HttpBody;
use statusmatch_core::BoxError;

use crate::error::ResponseError;

/// A response body, complete or still streaming.
#[derive(Debug)]
pub enum ResponseBody<B> {
    /// Body bytes already in memory.
    Complete(Bytes),
    /// A single-consumption body stream.
    Stream(B),
}

impl<B> ResponseBody<B>
where
    B: HttpBody,
    B::Error: Into<BoxError>,
{
    /// Reads the whole body into memory.
    pub async fn into_bytes(self) -> Result<Bytes, ResponseError> {
        match self {
            ResponseBody::Complete(bytes) => Ok(bytes),
            ResponseBody::Stream(body) => body
                .collect()
                .await
                .map(|collected| collected.to_bytes())
                .map_err(|error| {
                    let error: BoxError = error.into();
                    ResponseError::BodyCollect(Arc::from(error))
                }),
        }
    }
}

impl<B> From<Bytes> for ResponseBody<B> {
    fn from(bytes: Bytes) -> Self {
        ResponseBody::Complete(bytes)
    }
}
