use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use super::{Format, FormatError, FormatTypeId};

/// Bincode format, standard configuration through the serde bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BincodeFormat;

impl Format for BincodeFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize + ?Sized,
    {
        ::bincode::serde::encode_to_vec(value, ::bincode::config::standard())
            .map(Bytes::from)
            .map_err(|error| FormatError::Serialize(Box::new(error)))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        let (value, read) =
            ::bincode::serde::decode_from_slice::<T, _>(data, ::bincode::config::standard())
                .map_err(|error| FormatError::Deserialize(Box::new(error)))?;
        if read != data.len() {
            return Err(FormatError::Deserialize(
                format!("{} trailing bytes after bincode value", data.len() - read).into(),
            ));
        }
        Ok(value)
    }

    fn format_type_id(&self) -> FormatTypeId {
        FormatTypeId::Bincode
    }

    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }
}
