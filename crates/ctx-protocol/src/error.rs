//! Context error types and their wire codes.

use serde::{Deserialize, Serialize};

/// Integer codes carried in error bodies. Values follow the JSON-RPC 2.0
/// reserved ranges so clients can treat them the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidParams,
    InternalError,
    AttributeMissing,
    AttributeTypeMismatch,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::AttributeMissing => -32001,
            Self::AttributeTypeMismatch => -32002,
        }
    }

    /// True when the caller sent something unusable, as opposed to the
    /// server relying on state that was never set.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidParams)
    }
}

/// Everything that can go wrong reading or resolving context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("attribute `{name}` is not set")]
    Missing { name: String },

    #[error("attribute `{name}` is not a `{expected}`")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("cannot bind `{param}`: {reason}")]
    Binding { param: String, reason: String },

    #[error("request scope is not installed for this route")]
    ScopeUnavailable,
}

impl ContextError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub fn type_mismatch<T>(name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: std::any::type_name::<T>(),
        }
    }

    pub fn binding(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Binding {
            param: param.into(),
            reason: reason.into(),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Missing { .. } => ErrorCode::AttributeMissing,
            Self::TypeMismatch { .. } => ErrorCode::AttributeTypeMismatch,
            Self::Binding { .. } => ErrorCode::InvalidParams,
            Self::ScopeUnavailable => ErrorCode::InternalError,
        }
    }

    /// The serializable form sent to HTTP clients.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.error_code().code(),
            message: self.to_string(),
        }
    }
}

/// JSON error object: `{"code": i32, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
}
