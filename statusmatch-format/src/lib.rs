#![warn(missing_docs)]
//! # statusmatch-format
//!
//! Serde-based body formats for statusmatch rules.
//!
//! A [`Format`] turns any serde type into bytes and back. [`FormatCodec`]
//! adapts a format to the [`Codec`](statusmatch_core::Codec) collaborator
//! trait so it can back a [`Rule`](statusmatch_core::Rule).
//!
//! | Format | Content type |
//! |--------|--------------|
//! | [`JsonFormat`] | `application/json` |
//! | [`BincodeFormat`] | `application/octet-stream` |
//! | [`RonFormat`] | `application/ron` |
//! | [`AnyFormat`] | chosen at runtime, e.g. from configuration |
//!
//! ```
//! use statusmatch_format::{Format, JsonFormat};
//!
//! let bytes = JsonFormat.serialize(&vec![1, 2, 3]).unwrap();
//! let back: Vec<u32> = JsonFormat.deserialize(&bytes).unwrap();
//! assert_eq!(back, [1, 2, 3]);
//! ```

use std::fmt::Debug;

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use statusmatch_core::BoxError;
use thiserror::Error;

mod any;
mod bincode;
mod codec;
mod json;
mod ron;

pub use any::AnyFormat;
pub use self::bincode::BincodeFormat;
pub use codec::{FormatCodec, codec_factory};
pub use json::JsonFormat;
pub use self::ron::RonFormat;

/// Serialization or deserialization failure.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The value could not be written.
    #[error(transparent)]
    Serialize(BoxError),

    /// The bytes could not be read as the requested type.
    #[error(transparent)]
    Deserialize(BoxError),
}

/// Identifies a format without knowing its concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTypeId {
    /// [`JsonFormat`].
    Json,
    /// [`BincodeFormat`].
    Bincode,
    /// [`RonFormat`].
    Ron,
    /// For user-defined formats. The string should be a unique identifier.
    Custom(&'static str),
}

/// A body format able to handle any serde type.
pub trait Format: Debug + Send + Sync + 'static {
    /// Writes a value into bytes.
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize + ?Sized;

    /// Reads a value from bytes.
    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned;

    /// Returns the identifier of this format.
    fn format_type_id(&self) -> FormatTypeId;

    /// Media type of bodies in this format.
    fn content_type(&self) -> &'static str;
}
