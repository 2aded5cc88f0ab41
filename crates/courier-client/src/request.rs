use crate::config::ApiConfig;
use crate::options::RequestOptions;
use crate::response::check_status;
use crate::response::parse_json;
use http::Method;
use serde_json::Value;
use tracing::debug;

/// Requests a path below the configured base address, returning the parsed
/// response body. One network call per invocation, no retries; a non-2xx
/// status surfaces as a `ResponseError`.
pub async fn request(
    config: &ApiConfig,
    path: &str,
    options: Option<RequestOptions>,
) -> eyre::Result<Value> {
    let url = format!("{}{}", config.base_url, path);
    let options = options.unwrap_or_default();
    let method: Method = options.method.parse()?;
    debug!("{} {}", method, url);

    let client = reqwest::Client::new();
    let mut req = client.request(method, &url).headers(options.headers);
    if let Some(body) = options.body {
        req = req.body(body);
    }
    let response = req.send().await?;

    let response = check_status(response).await?;
    parse_json(response).await
}
