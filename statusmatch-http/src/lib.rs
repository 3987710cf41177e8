//! Typed HTTP responses for statusmatch.
//!
//! Declare one rule per response alternative, collect them into a
//! [`RuleSet`](statusmatch_core::RuleSet) and wrap each incoming response
//! in a [`TypedResponse`]. The body is decoded on first access by the rule
//! whose status range is the most specific match.
//!
//! ```
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! use std::sync::Arc;
//!
//! use http::StatusCode;
//! use serde::{Deserialize, Serialize};
//! use statusmatch_core::{RuleSet, StatusRange};
//! use statusmatch_format::JsonFormat;
//! use statusmatch_http::{OneOf, StatusClass, TypedResponse};
//!
//! #[derive(Debug, Serialize, Deserialize, PartialEq)]
//! struct User { name: String }
//!
//! #[derive(Debug, Serialize, Deserialize, PartialEq)]
//! struct Problem { detail: String }
//!
//! type Reply = OneOf<User, Problem>;
//!
//! let rules = Arc::new(RuleSet::try_from_rules([
//!     Reply::first_rule([StatusRange::from(StatusClass::Success)], JsonFormat)?,
//!     Reply::second_rule([StatusRange::any()], JsonFormat)?,
//! ])?);
//!
//! let response = TypedResponse::from_bytes(
//!     StatusCode::NOT_FOUND,
//!     r#"{"detail":"no such user"}"#,
//!     rules,
//! );
//! let problem = response.value().await?.second()?;
//! assert_eq!(problem.detail, "no such user");
//! # Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
//! # }).unwrap();
//! ```

mod alternative;
pub mod body;
pub mod error;
pub mod one_of;
pub mod response;
mod status;

pub use alternative::{AlternativeCodec, alternative_rule};
pub use body::ResponseBody;
pub use error::{ResponseError, SharedError};
pub use one_of::{Alternatives, Never, OneOf, Tag, WrongAlternative};
pub use response::{AlternativeTag, TypedResponse};
pub use status::{StatusClass, code};
