use crm_contracts::shared::api_error::{ErrorPayload, FieldErrors};
use thiserror::Error;

/// Failure of a request to the REST server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// 401. Handled globally: the shell sends the user to the login screen.
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden { message: Option<String> },
    #[error("not found")]
    NotFound,
    /// Rejected 4xx with an optional message and field-keyed errors
    #[error("request rejected ({status})")]
    Validation {
        status: u16,
        message: Option<String>,
        fields: FieldErrors,
    },
    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden {
                message: ErrorPayload::parse(body).message,
            },
            404 => Self::NotFound,
            400..=499 => {
                let payload = ErrorPayload::parse(body);
                Self::Validation {
                    status,
                    message: payload.message,
                    fields: payload.fields,
                }
            }
            _ => Self::Server {
                status,
                message: ErrorPayload::parse(body).message,
            },
        }
    }

    /// Worth retrying for reads
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Forbidden { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    /// Server-provided message when there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
        assert!(matches!(
            ApiError::from_status(503, ""),
            ApiError::Server { status: 503, .. }
        ));

        let rejected = ApiError::from_status(400, r#"{"phone": ["Invalid phone"]}"#);
        assert_eq!(
            rejected.field_errors().and_then(|f| f.get("phone")),
            Some("Invalid phone")
        );
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_status(500, r#"{"detail": "Database is down"}"#);
        assert_eq!(err.user_message("Something went wrong"), "Database is down");

        let err = ApiError::from_status(500, "");
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }
}
