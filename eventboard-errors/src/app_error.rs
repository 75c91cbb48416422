use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Event is at capacity")]
    CapacityExhausted,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    /// Recovers a variant from the message carried by a server function error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("Event not found") {
            Ok(AppError::EventNotFound)
        } else if s.starts_with("Not signed in") {
            Ok(AppError::NotSignedIn)
        } else if s.starts_with("Event is at capacity") {
            Ok(AppError::CapacityExhausted)
        } else if let Some(rest) = s.strip_prefix("Rate limited: ") {
            Ok(AppError::RateLimited(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("Database error: ") {
            Ok(AppError::Database(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("Network error: ") {
            Ok(AppError::Network(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix("Internal error: ") {
            Ok(AppError::Internal(rest.to_string()))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::EventNotFound => "That event no longer exists.",
            Self::NotSignedIn => "Sign in to vote or reserve tickets.",
            Self::CapacityExhausted => "This event is full.",
            Self::RateLimited(_) => "Slow down a little and try again shortly.",
            Self::Database(_) => "Something went wrong on our side. Try again later.",
            Self::Network(_) => "Could not reach the server. Check your connection.",
            Self::Internal(_) => "Something went wrong. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::EventNotFound => StatusCode::NOT_FOUND,
                AppError::NotSignedIn => StatusCode::UNAUTHORIZED,
                AppError::CapacityExhausted => StatusCode::CONFLICT,
                AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AppError::Network(_) => StatusCode::BAD_GATEWAY,
                AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
