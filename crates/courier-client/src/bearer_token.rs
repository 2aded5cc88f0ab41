use serde::Deserialize;
use serde::Serialize;

/// Hands out the credential attached to authenticated requests. Looked up
/// fresh on every call, so a rotated token is picked up without restarting.
pub trait TokenProvider {
    async fn access_token(&self) -> eyre::Result<String>;
}

#[derive(Serialize, Deserialize, Clone)]
pub struct BearerToken(pub String);

impl TokenProvider for BearerToken {
    async fn access_token(&self) -> eyre::Result<String> {
        Ok(self.0.clone())
    }
}
