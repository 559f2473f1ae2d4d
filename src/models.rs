//! Frontend Models
//!
//! Canonical shapes the rest of the app works with. Wire decoding lives in
//! `api::wire` and normalises into these types.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Bookable resource type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Laundry,
    Kitchen,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Laundry, Category::Kitchen];

    /// Path segment used by the backend (`/api/v1/{slug}/bookings`)
    pub fn slug(self) -> &'static str {
        match self {
            Category::Laundry => "laundry",
            Category::Kitchen => "kitchen",
        }
    }

    /// Longest booking the client accepts for this category
    pub fn max_duration(self) -> Duration {
        Duration::hours(self.max_hours())
    }

    pub fn max_hours(self) -> i64 {
        match self {
            Category::Laundry => 2,
            Category::Kitchen => 3,
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Category::Laundry => "Прачечная",
            Category::Kitchen => "Кухня",
        }
    }

    /// Title of the create-booking modal
    pub fn form_title(self) -> &'static str {
        match self {
            Category::Laundry => "Создать бронирование прачечной (макс. 2 часа)",
            Category::Kitchen => "Создать бронирование кухни (макс. 3 часа)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Authenticated user plus the bearer token for follow-up requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl Session {
    /// Header label: username, or `ID n` when the backend sent none
    pub fn display_name(&self) -> String {
        if self.username.is_empty() {
            format!("ID {}", self.user_id)
        } else {
            self.username.clone()
        }
    }
}

/// Booking record. Timestamps are `None` when the backend value was missing
/// or could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub owner_user_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Both lists of one category, replaced wholesale on every reload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBookings {
    pub mine: Vec<Booking>,
    pub all: Vec<Booking>,
}

/// Kind of transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Error => "❌",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    /// CSS modifier, e.g. `toast-error`
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast-error",
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_limits() {
        assert_eq!(Category::Laundry.max_duration(), Duration::hours(2));
        assert_eq!(Category::Kitchen.max_duration(), Duration::hours(3));
        assert_eq!(Category::Kitchen.to_string(), "kitchen");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut session = Session {
            token: "t".to_string(),
            user_id: 7,
            username: String::new(),
        };
        assert_eq!(session.display_name(), "ID 7");

        session.username = "alice".to_string();
        assert_eq!(session.display_name(), "alice");
    }
}
