use serde::{Deserialize, Serialize};
use statusmatch_core::StatusRange;

/// HTTP status code classes for broad matching.
///
/// Use this to declare a rule for an entire category of responses instead
/// of specific codes.
///
/// # Examples
///
/// ```
/// use statusmatch_core::StatusRange;
/// use statusmatch_http::StatusClass;
///
/// // Any 2xx response
/// let range = StatusRange::from(StatusClass::Success);
/// assert_eq!(range.to_string(), "(200-299)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    /// 1xx (100-199): Informational responses.
    Informational,
    /// 2xx (200-299): Successful responses.
    Success,
    /// 3xx (300-399): Redirection responses.
    Redirect,
    /// 4xx (400-499): Client error responses.
    ClientError,
    /// 5xx (500-599): Server error responses.
    ServerError,
}

impl StatusClass {
    /// Leading digit shared by every code of the class.
    pub fn digit(self) -> u8 {
        match self {
            StatusClass::Informational => 1,
            StatusClass::Success => 2,
            StatusClass::Redirect => 3,
            StatusClass::ClientError => 4,
            StatusClass::ServerError => 5,
        }
    }

    /// First code of the class.
    pub fn base(self) -> u16 {
        u16::from(self.digit()) * 100
    }

    /// The class `code` belongs to, if any.
    pub fn of(code: http::StatusCode) -> Option<Self> {
        if code.is_informational() {
            Some(StatusClass::Informational)
        } else if code.is_success() {
            Some(StatusClass::Success)
        } else if code.is_redirection() {
            Some(StatusClass::Redirect)
        } else if code.is_client_error() {
            Some(StatusClass::ClientError)
        } else if code.is_server_error() {
            Some(StatusClass::ServerError)
        } else {
            None
        }
    }
}

impl From<StatusClass> for StatusRange {
    fn from(class: StatusClass) -> Self {
        StatusRange::class(class.digit())
    }
}

/// A single-code range for an `http` status.
pub fn code(status: http::StatusCode) -> StatusRange {
    StatusRange::code(status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ranges() {
        assert_eq!(StatusRange::from(StatusClass::Informational).to_string(), "(100-199)");
        assert_eq!(StatusRange::from(StatusClass::ServerError).to_string(), "(500-599)");
        assert!(StatusRange::from(StatusClass::ClientError).matches(404));
        assert_eq!(StatusClass::Redirect.base(), 300);
        assert_eq!(
            StatusRange::from(StatusClass::Success),
            "2XX".parse::<StatusRange>().unwrap()
        );
    }

    #[test]
    fn test_class_of() {
        assert_eq!(StatusClass::of(http::StatusCode::OK), Some(StatusClass::Success));
        assert_eq!(
            StatusClass::of(http::StatusCode::NOT_FOUND),
            Some(StatusClass::ClientError)
        );
        let unusual = http::StatusCode::from_u16(999).unwrap();
        assert_eq!(StatusClass::of(unusual), None);
        assert_eq!(code(unusual), StatusRange::code(999));
    }
}
