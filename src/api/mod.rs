//! Backend API
//!
//! HTTP bindings to the booking backend, organized by concern. Only request
//! building and response decoding happen here; no UI state.

mod fetch;
pub mod wire;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Booking, Category, Session};
use wire::{AuthCheckBody, AuthResponse, BookingList, CreateBookingBody, CreatedBooking};

pub use fetch::FetchTransport;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self { method: Method::Delete, url: url.into(), body: None }
    }

    pub fn post_json<T: Serialize>(url: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(format!("serialization error: {}", e)))?;
        Ok(Self { method: Method::Post, url: url.into(), body: Some(body) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request. Non-success statuses are returned as responses, not errors.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

// ========================
// Client
// ========================

/// Stateless booking API client bound to one backend address
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST /api/v1/auth/check
    pub async fn check_token(&self, token: &str) -> Result<Session, ApiError> {
        let url = format!("{}/api/v1/auth/check", self.base_url);
        let request = ApiRequest::post_json(url, &AuthCheckBody { token })?;
        let response = self.send_ok(request).await?;
        response.json::<AuthResponse>()?.into_session()
    }

    /// GET /api/v1/{category}/bookings/my?token=...
    pub async fn list_mine(&self, category: Category, token: &str) -> Result<Vec<Booking>, ApiError> {
        let url = format!(
            "{}/api/v1/{}/bookings/my?token={}",
            self.base_url,
            category.slug(),
            encode_query(token)
        );
        let response = self.send_ok(ApiRequest::get(url)).await?;
        Ok(response.json::<BookingList>()?.into_bookings())
    }

    /// GET /api/v1/{category}/bookings
    pub async fn list_all(&self, category: Category) -> Result<Vec<Booking>, ApiError> {
        let url = format!("{}/api/v1/{}/bookings", self.base_url, category.slug());
        let response = self.send_ok(ApiRequest::get(url)).await?;
        Ok(response.json::<BookingList>()?.into_bookings())
    }

    /// POST /api/v1/{category}/bookings, returns the new booking id
    pub async fn create(
        &self,
        category: Category,
        token: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        let url = format!("{}/api/v1/{}/bookings", self.base_url, category.slug());
        let body = CreateBookingBody {
            token,
            start_time: iso_timestamp(start),
            end_time: iso_timestamp(end),
        };
        let response = self.send_ok(ApiRequest::post_json(url, &body)?).await?;
        response.json::<CreatedBooking>()?.into_id()
    }

    /// DELETE /api/v1/{category}/bookings/{id}?token=...
    pub async fn remove(&self, category: Category, token: &str, booking_id: i64) -> Result<(), ApiError> {
        let url = format!(
            "{}/api/v1/{}/bookings/{}?token={}",
            self.base_url,
            category.slug(),
            booking_id,
            encode_query(token)
        );
        self.send_ok(ApiRequest::delete(url)).await?;
        Ok(())
    }

    async fn send_ok(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("[API] {:?} {}", request.method, redact_token(&request.url));
        let response = self.transport.send(request).await?;
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status,
                detail: response.body,
            })
        }
    }
}

/// `2024-01-01T10:00:00.000Z`, the shape a browser's `toISOString` produces
pub fn iso_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn redact_token(url: &str) -> String {
    match url.find("token=") {
        Some(pos) => format!("{}token=…", &url[..pos]),
        None => url.to_string(),
    }
}
