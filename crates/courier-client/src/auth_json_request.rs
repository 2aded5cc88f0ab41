use crate::bearer_token::TokenProvider;
use crate::config::ApiConfig;
use crate::response::check_status;
use crate::response::parse_json;
use http::Method;
use http::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Requests a path below the configured base address with a bearer token and
/// a JSON-encoded payload attached. The token is read from the provider on
/// every call; `None` for `data` sends no request body.
pub async fn auth_json_request<P, T>(
    config: &ApiConfig,
    tokens: &P,
    path: &str,
    http_method: &str,
    data: Option<&T>,
) -> eyre::Result<Value>
where
    P: TokenProvider,
    T: Serialize,
{
    let url = format!("{}{}", config.base_url, path);
    let access_token = tokens.access_token().await?;
    let method: Method = http_method.parse()?;
    debug!("{} {} (authenticated)", method, url);

    let client = reqwest::Client::new();
    let mut req = client
        .request(method, &url)
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(access_token);
    if let Some(data) = data {
        req = req.body(serde_json::to_string(data)?);
    }
    let response = req.send().await?;

    let response = check_status(response).await?;
    parse_json(response).await
}
