use http::HeaderMap;
use http::StatusCode;
use reqwest::Response;
use thiserror::Error;

/// A response that came back outside the 2xx range, kept whole so callers
/// can inspect the status, headers, and body the server actually sent.
#[derive(Debug, Error)]
#[error("{}", .status.canonical_reason().unwrap_or("unknown status"))]
pub struct ResponseError {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ResponseError {
    /// Buffer the received response into an owned error value. An unreadable
    /// body is recorded as empty rather than masking the status failure.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();
        Self {
            status,
            headers,
            body,
        }
    }
}
