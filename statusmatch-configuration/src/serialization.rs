use serde::{Deserialize, Serialize};
use statusmatch_format::AnyFormat;

/// Body serialization selectable from configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ValueSerialization {
    #[default]
    Json,
    Bincode,
    Ron,
}

impl ValueSerialization {
    /// Convert configuration serialization to a body format
    pub fn to_format(self) -> AnyFormat {
        match self {
            ValueSerialization::Json => AnyFormat::Json,
            ValueSerialization::Bincode => AnyFormat::Bincode,
            ValueSerialization::Ron => AnyFormat::Ron,
        }
    }
}

impl From<ValueSerialization> for AnyFormat {
    fn from(value: ValueSerialization) -> Self {
        value.to_format()
    }
}
