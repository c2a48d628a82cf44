use reqwest::StatusCode;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// An attendee's sanitized hourly rate is negative
    InvalidRate { name: String, rate: f64 },
    /// A candidate email collides with an existing attendee's email
    DuplicateEmail(String),
    /// Rate-lookup service returned a non-success status
    UpstreamError { status: StatusCode, message: String },
    /// Rate-lookup service responded without a usable rate value
    InvalidRatePayload(String),
    /// HTTP request error (preserves reqwest::Error for failure classification)
    HttpRequest(reqwest::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRate { name, rate } => {
                write!(f, "Invalid rate for \"{}\": hourly rate cannot be negative (got {})", name, rate)
            }
            Self::DuplicateEmail(email) => {
                write!(f, "Duplicate email: \"{}\" already belongs to another attendee", email)
            }
            Self::UpstreamError { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            Self::InvalidRatePayload(msg) => write!(f, "Invalid rate payload: {}", msg),
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

/// Stable label for an error, used by lookup-failure logging
pub fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidRate { .. } => "invalid_rate",
        AppError::DuplicateEmail(_) => "duplicate_email",
        AppError::UpstreamError { .. } => "upstream_error",
        AppError::InvalidRatePayload(_) => "invalid_rate_payload",
        AppError::HttpRequest(_) => "http_request_error",
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rate_display_names_attendee() {
        let error = AppError::InvalidRate {
            name: "John".to_string(),
            rate: -50.0,
        };
        let msg = error.to_string();
        assert!(msg.contains("John"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn test_duplicate_email_display() {
        let error = AppError::DuplicateEmail("john@example.com".to_string());
        assert!(error.to_string().contains("john@example.com"));
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(
            error_type_name(&AppError::DuplicateEmail("test".to_string())),
            "duplicate_email"
        );
        assert_eq!(
            error_type_name(&AppError::InvalidRate { name: "x".to_string(), rate: -1.0 }),
            "invalid_rate"
        );
        assert_eq!(
            error_type_name(&AppError::UpstreamError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "down".to_string(),
            }),
            "upstream_error"
        );
        assert_eq!(
            error_type_name(&AppError::InvalidRatePayload("bad rate".to_string())),
            "invalid_rate_payload"
        );
    }
}
