use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{BincodeFormat, Format, FormatError, FormatTypeId, JsonFormat, RonFormat};

/// One of the built-in formats, picked at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyFormat {
    /// [`JsonFormat`].
    #[default]
    Json,
    /// [`BincodeFormat`].
    Bincode,
    /// [`RonFormat`].
    Ron,
}

impl Format for AnyFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize + ?Sized,
    {
        match self {
            AnyFormat::Json => JsonFormat.serialize(value),
            AnyFormat::Bincode => BincodeFormat.serialize(value),
            AnyFormat::Ron => RonFormat.serialize(value),
        }
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        match self {
            AnyFormat::Json => JsonFormat.deserialize(data),
            AnyFormat::Bincode => BincodeFormat.deserialize(data),
            AnyFormat::Ron => RonFormat.deserialize(data),
        }
    }

    fn format_type_id(&self) -> FormatTypeId {
        match self {
            AnyFormat::Json => FormatTypeId::Json,
            AnyFormat::Bincode => FormatTypeId::Bincode,
            AnyFormat::Ron => FormatTypeId::Ron,
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            AnyFormat::Json => JsonFormat.content_type(),
            AnyFormat::Bincode => BincodeFormat.content_type(),
            AnyFormat::Ron => RonFormat.content_type(),
        }
    }
}
