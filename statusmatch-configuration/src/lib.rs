//! Response rules from configuration files.
//!
//! A [`ResponsesConfig`] lists, in order, the status ranges of each
//! alternative of a [`OneOf`](statusmatch_http::OneOf) response type:
//!
//! ```yaml
//! format: Json
//! alternatives:
//!   - status: ["2XX"]
//!   - status: [404, 410]
//!     name: NotFound
//!   - status: ["*"]
//!     format: Ron
//! ```
//!
//! Entry K binds the K-th type parameter. Building the rule set runs the
//! same conflict checks as building it in code.

pub mod error;
pub mod responses;
pub mod serialization;

pub use error::ConfigError;
pub use responses::{AlternativeConfig, ResponsesConfig};
pub use serialization::ValueSerialization;
