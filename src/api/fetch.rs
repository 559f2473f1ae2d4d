//! Browser `fetch` transport via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body on an otherwise valid response is treated as empty
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
