use crate::response_error::ResponseError;
use http::StatusCode;
use reqwest::Response;
use serde_json::Value;

/// Checks if a network request came back fine, and errors if not. Success is
/// any status in the 2xx range; the response passes through untouched.
pub async fn check_status(response: Response) -> Result<Response, ResponseError> {
    if response.status().is_success() {
        return Ok(response);
    }
    Err(ResponseError::from_response(response).await)
}

/// Parses the JSON returned by a network request. 204 and 205 carry no body
/// by definition and parse to `Value::Null` without reading anything.
pub async fn parse_json(response: Response) -> eyre::Result<Value> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return Ok(Value::Null);
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
