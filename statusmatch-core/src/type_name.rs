//! Target type identifiers for rules.
//!
//! `TypeName` is a newtype over `SmolStr` naming the type a rule decodes
//! into. It only serves diagnostics: rule rendering, conflict reports and
//! wrong-alternative errors.

use smol_str::SmolStr;
use std::fmt;

/// The display name of a rule's target type.
///
/// # Example
/// ```
/// use statusmatch_core::TypeName;
///
/// assert_eq!(TypeName::of::<Vec<String>>().as_str(), "Vec<String>");
/// assert_eq!(TypeName::new("NoContentType").as_str(), "NoContentType");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(SmolStr);

impl TypeName {
    /// Creates a type name from an explicit label.
    #[inline]
    pub fn new(s: impl Into<SmolStr>) -> Self {
        Self(s.into())
    }

    /// Creates a type name from a static string (no allocation).
    #[inline]
    pub const fn new_static(s: &'static str) -> Self {
        Self(SmolStr::new_static(s))
    }

    /// Derives the name from a Rust type, with module paths stripped.
    pub fn of<T: ?Sized>() -> Self {
        Self(SmolStr::from(strip_paths(std::any::type_name::<T>())))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for an empty label.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TypeName {
    #[inline]
    fn from(s: &str) -> Self {
        Self(SmolStr::new(s))
    }
}

impl From<String> for TypeName {
    #[inline]
    fn from(s: String) -> Self {
        Self(SmolStr::from(s))
    }
}
