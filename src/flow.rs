//! Operation Outcomes
//!
//! Each user-facing operation settles into an `Outcome`: what to record, what
//! to tell the user, and which category to reload. `AppContext` applies it.

use chrono::TimeZone;

use crate::api::Transport;
use crate::client::BookingClient;
use crate::form::{BookingForm, FormUpdate};
use crate::models::{Category, Session, ToastKind};
use crate::storage::TokenStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Authenticated session to record
    pub session: Option<Session>,
    /// Change to the create form
    pub form: Option<FormUpdate>,
    pub toast: Option<(ToastKind, String)>,
    /// Category whose lists must be reloaded
    pub refresh: Option<Category>,
}

impl Outcome {
    fn error(message: String) -> Self {
        Self {
            toast: Some((ToastKind::Error, message)),
            ..Default::default()
        }
    }
}

/// Authenticates and, on success, loads the visible category
pub async fn sign_in<T: Transport, S: TokenStore>(client: &BookingClient<T, S>, visible: Category) -> Outcome {
    match client.authenticate().await {
        Ok(session) => Outcome {
            toast: Some((ToastKind::Info, format!("Вы вошли как {}", session.display_name()))),
            session: Some(session),
            refresh: Some(visible),
            ..Default::default()
        },
        Err(e) => {
            log::error!("[AUTH] {}", e);
            Outcome::error(e.to_string())
        }
    }
}

/// Submits the form. A created booking closes the form and reloads its
/// category; a rejected one keeps the form open with its values.
pub async fn submit<T: Transport, S: TokenStore, Tz: TimeZone>(
    client: &BookingClient<T, S>,
    form: &BookingForm,
    tz: &Tz,
) -> Outcome {
    match client.submit(form, tz).await {
        Ok((category, id)) => Outcome {
            form: Some(FormUpdate::Close),
            toast: Some((ToastKind::Success, format!("Бронирование создано! ID: {}", id))),
            refresh: Some(category),
            ..Default::default()
        },
        Err(e) => {
            log::error!("[APP] Create failed: {:?}", e);
            Outcome {
                form: Some(FormUpdate::KeepOpen),
                ..Outcome::error(e.to_string())
            }
        }
    }
}

/// Deletes a booking; only a successful delete reloads the category
pub async fn delete<T: Transport, S: TokenStore>(
    client: &BookingClient<T, S>,
    category: Category,
    booking_id: i64,
) -> Outcome {
    match client.delete(category, booking_id).await {
        Ok(()) => Outcome {
            toast: Some((ToastKind::Success, "Бронирование успешно удалено".to_string())),
            refresh: Some(category),
            ..Default::default()
        },
        Err(e) => {
            log::error!("[APP] Delete failed: {:?}", e);
            Outcome::error(e.to_string())
        }
    }
}
