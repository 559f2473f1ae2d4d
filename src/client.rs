//! Booking Client
//!
//! User-level operations on top of `ApiClient`: authentication with the stored
//! token, per-category loads, and the create/delete flows. Every failure is
//! mapped to the `ClientError` the UI shows.

use chrono::TimeZone;

use crate::api::{ApiClient, Transport};
use crate::error::ClientError;
use crate::form::BookingForm;
use crate::models::{CategoryBookings, Category, Session};
use crate::storage::TokenStore;

pub struct BookingClient<T, S> {
    api: ApiClient<T>,
    tokens: S,
}

impl<T: Transport, S: TokenStore> BookingClient<T, S> {
    pub fn new(api: ApiClient<T>, tokens: S) -> Self {
        Self { api, tokens }
    }

    #[cfg(test)]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[cfg(test)]
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Exchanges the stored token (possibly empty) for a fresh session and
    /// persists the refreshed token
    pub async fn authenticate(&self) -> Result<Session, ClientError> {
        let token = self.tokens.token();
        let session = self.api.check_token(&token).await.map_err(ClientError::Auth)?;

        if let Err(e) = self.tokens.set_token(&session.token) {
            log::warn!("[AUTH] Could not persist token: {}", e);
        }
        log::info!(
            "[AUTH] Authenticated user {} ({}), token {}",
            session.user_id,
            session.username,
            token_preview(&session.token)
        );
        Ok(session)
    }

    /// Loads the caller's own and the full booking list of one category
    pub async fn load(&self, category: Category) -> Result<CategoryBookings, ClientError> {
        let token = self.tokens.token();
        let as_load_error = |source| ClientError::Load { category, source };

        let mine = self.api.list_mine(category, &token).await.map_err(as_load_error)?;
        let all = self.api.list_all(category).await.map_err(as_load_error)?;

        log::debug!(
            "[API] {}: {} own bookings, {} total",
            category,
            mine.len(),
            all.len()
        );
        Ok(CategoryBookings { mine, all })
    }

    /// Validates the open form and creates the booking. Returns the category
    /// and the new booking id; invalid input never reaches the backend.
    pub async fn submit<Tz: TimeZone>(&self, form: &BookingForm, tz: &Tz) -> Result<(Category, i64), ClientError> {
        let draft = form.validate(tz)?;
        let token = self.tokens.token();

        let id = self
            .api
            .create(draft.category, &token, draft.start, draft.end)
            .await
            .map_err(ClientError::create)?;

        log::info!(
            "[API] Created {} booking {} ({} min)",
            draft.category,
            id,
            draft.duration().num_minutes()
        );
        Ok((draft.category, id))
    }

    pub async fn delete(&self, category: Category, booking_id: i64) -> Result<(), ClientError> {
        let token = self.tokens.token();
        self.api
            .remove(category, &token, booking_id)
            .await
            .map_err(|source| ClientError::Delete {
                category,
                id: booking_id,
                source,
            })?;

        log::info!("[API] Deleted {} booking {}", category, booking_id);
        Ok(())
    }
}

fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(8).collect();
    format!("{}…", head)
}
