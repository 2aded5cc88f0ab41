use eyre::Result;
use eyre::eyre;

/// Environment variable naming the API base address.
pub const API_URI_VAR: &str = "COURIER_API_URI";

/// Where requests go. Every path handed to the request functions is appended
/// to `base_url` as-is, so include any prefix the deployment needs.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load .env variables early, then read the base address from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            base_url: var(API_URI_VAR)?,
        })
    }
}

/// Read the required environment variable or error
fn var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| eyre!("Missing env var: {}", name))
}
