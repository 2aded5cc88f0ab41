use crate::auth_json_request::auth_json_request;
use crate::bearer_token::TokenProvider;
use crate::config::ApiConfig;
use crate::method::RequestMethod;
use serde_json::Value;

/// Typed GET over the authenticated path: fetch a resource and deserialize
/// it into `T`.
pub async fn fetch<P, T>(config: &ApiConfig, tokens: &P, path: &str) -> eyre::Result<T>
where
    P: TokenProvider,
    T: serde::de::DeserializeOwned,
{
    let value = auth_json_request(
        config,
        tokens,
        path,
        RequestMethod::Get.as_str(),
        None::<&Value>,
    )
    .await?;

    let raw = value.to_string();
    match serde_json::from_value(value) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", raw))),
    }
}
