use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use super::{Format, FormatError, FormatTypeId};

/// RON (Rusty Object Notation) format - human-readable alternative to JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RonFormat;

impl Format for RonFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize + ?Sized,
    {
        // RON writes to a String rather than a byte buffer
        ::ron::to_string(value)
            .map(|text| Bytes::from(text.into_bytes()))
            .map_err(|error| FormatError::Serialize(Box::new(error)))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        let text =
            std::str::from_utf8(data).map_err(|error| FormatError::Deserialize(Box::new(error)))?;
        ::ron::de::from_str(text).map_err(|error| FormatError::Deserialize(Box::new(error)))
    }

    fn format_type_id(&self) -> FormatTypeId {
        FormatTypeId::Ron
    }

    fn content_type(&self) -> &'static str {
        "application/ron"
    }
}
