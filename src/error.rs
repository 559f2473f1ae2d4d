//! Error Types
//!
//! `ApiError` describes what went wrong on the wire, `ClientError` what the
//! user was trying to do when it happened.

use thiserror::Error;

use crate::models::Category;

/// Transport / decoding failure of a single request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Body text the backend sent with a failed status, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } if !detail.trim().is_empty() => Some(detail.as_str()),
            _ => None,
        }
    }
}

/// Booking form input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Время начала должно быть раньше времени окончания")]
    StartNotBeforeEnd,

    #[error("Максимальная длительность бронирования: {max_hours} часа")]
    TooLong { max_hours: i64 },

    #[error("Некорректная дата: {0}")]
    InvalidInput(String),
}

/// Failure of a user-facing operation. `Display` is the toast text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Ошибка аутентификации: {0}")]
    Auth(#[source] ApiError),

    #[error("{}", load_message(.category))]
    Load {
        category: Category,
        #[source]
        source: ApiError,
    },

    #[error("Ошибка создания бронирования: {detail}")]
    Create { detail: String },

    #[error("Ошибка удаления бронирования")]
    Delete {
        category: Category,
        id: i64,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Сессия не найдена, перезагрузите страницу")]
    NotAuthenticated,
}

fn load_message(category: &Category) -> &'static str {
    match category {
        Category::Laundry => "Ошибка загрузки данных прачечной",
        Category::Kitchen => "Ошибка загрузки данных кухни",
    }
}

impl ClientError {
    /// Wraps a failed create, keeping the backend's own explanation when it sent one
    pub fn create(source: ApiError) -> Self {
        let detail = match (source.detail(), &source) {
            (Some(text), _) => text.to_string(),
            (None, ApiError::Status { .. }) => "Failed to create booking".to_string(),
            (None, other) => other.to_string(),
        };
        ClientError::Create { detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_prefers_backend_detail() {
        let err = ClientError::create(ApiError::Status {
            status: 409,
            detail: "slot already taken".to_string(),
        });
        assert_eq!(err.to_string(), "Ошибка создания бронирования: slot already taken");
    }

    #[test]
    fn test_create_error_empty_body_falls_back() {
        let err = ClientError::create(ApiError::Status {
            status: 500,
            detail: "  ".to_string(),
        });
        assert_eq!(
            err,
            ClientError::Create { detail: "Failed to create booking".to_string() }
        );
    }

    #[test]
    fn test_load_message_per_category() {
        let err = ClientError::Load {
            category: Category::Kitchen,
            source: ApiError::Network("offline".to_string()),
        };
        assert_eq!(err.to_string(), "Ошибка загрузки данных кухни");
    }
}
