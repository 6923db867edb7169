use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown when a credential resolves to an empty role set.
pub const NO_ROLES_MESSAGE: &str = "No roles assigned to this user.";

const DEFAULT_LOGIN_FAILURE: &str = "Invalid email or password";

/// Categorization of client errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Bad credentials at login.
    AuthenticationFailure,
    /// Backend accepted the credential but returned no roles.
    NoRolesAssigned,
    ValidationError,
    /// The request never produced a usable response.
    NetworkError,
    /// Navigation to a page the session may not view. Handled by redirect.
    UnauthorizedNavigation,
    NotFound,
    Forbidden,
    ServerError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthenticationFailure => write!(f, "AuthenticationFailure"),
            AppErrorKind::NoRolesAssigned => write!(f, "NoRolesAssigned"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::UnauthorizedNavigation => write!(f, "UnauthorizedNavigation"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured error surfaced to the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Body shape of backend error responses (`{"detail": "..."}` plus
/// optional per-field lists).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, serde_json::Value>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::AuthenticationFailure, message)
    }

    pub fn no_roles() -> Self {
        Self::new(AppErrorKind::NoRolesAssigned, NO_ROLES_MESSAGE)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NetworkError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ServerError, message)
    }

    /// Map a non-success HTTP response to an error.
    ///
    /// `is_login` selects the credential interpretation of 400/401: the
    /// login endpoint answers bad credentials with either status.
    pub fn from_response(status: u16, body: &str, is_login: bool) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let field_errors = field_errors_from(&parsed.fields);
        let detail = parsed.detail;

        match status {
            400 | 401 if is_login => {
                Self::authentication(detail.unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string()))
            }
            400 | 422 if !field_errors.is_empty() => Self::validation(
                detail.unwrap_or_else(|| "Validation failed".to_string()),
                field_errors,
            ),
            401 | 403 => Self::forbidden(
                detail.unwrap_or_else(|| "You do not have access to this resource.".to_string()),
            ),
            404 => Self::not_found(detail.unwrap_or_else(|| "Not found".to_string())),
            _ => Self::server(detail.unwrap_or_else(|| format!("Server responded with {status}"))),
        }
    }

    /// Text to show inline in the UI.
    pub fn user_message(&self) -> String {
        match self.kind {
            AppErrorKind::NetworkError => {
                "Unable to reach the clinic server. Please try again.".to_string()
            }
            _ if self.message.is_empty() => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }

    /// Whether a manual retry of the same request can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::NetworkError | AppErrorKind::ServerError
        )
    }
}

/// First message of every `{"field": ["msg", ...]}` entry.
fn field_errors_from(fields: &HashMap<String, serde_json::Value>) -> HashMap<String, String> {
    fields
        .iter()
        .filter_map(|(field, value)| {
            let msg = match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(items) => {
                    items.first().and_then(|v| v.as_str()).map(str::to_string)
                }
                _ => None,
            }?;
            Some((field.clone(), msg))
        })
        .collect()
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
