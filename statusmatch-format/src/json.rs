use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use super::{Format, FormatError, FormatTypeId};

/// JSON format (default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|error| FormatError::Serialize(Box::new(error)))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(data).map_err(|error| FormatError::Deserialize(Box::new(error)))
    }

    fn format_type_id(&self) -> FormatTypeId {
        FormatTypeId::Json
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
