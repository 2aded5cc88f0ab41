use crate::bearer_token::TokenProvider;
use eyre::Result;
use eyre::eyre;
use std::collections::HashMap;
use std::path::PathBuf;

const SETTINGS_FILE: &'static str = "local_settings.json";

/// Keys the settings store is queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    AccessToken,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::AccessToken => "AccessToken",
        }
    }
}

/// A key-value settings store backed by a flat JSON file. Every read goes
/// back to the file, so a value changed by another process is observed on
/// the next call.
#[derive(Debug, Clone)]
pub struct LocalSettings {
    path: PathBuf,
}

impl LocalSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn get(&self, key: SettingKey) -> Result<Option<String>> {
        Ok(self.read_all().await?.get(key.as_str()).cloned())
    }

    pub async fn set(&self, key: SettingKey, value: impl Into<String>) -> Result<()> {
        let mut settings = self.read_all().await?;
        settings.insert(key.as_str().to_string(), value.into());
        tokio::fs::write(&self.path, serde_json::to_string_pretty(&settings)?).await?;
        Ok(())
    }

    async fn read_all(&self) -> Result<HashMap<String, String>> {
        if let Ok(bytes) = tokio::fs::read(&self.path).await {
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Ok(HashMap::new())
        }
    }
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self::new(SETTINGS_FILE)
    }
}

impl TokenProvider for LocalSettings {
    async fn access_token(&self) -> Result<String> {
        self.get(SettingKey::AccessToken)
            .await?
            .ok_or_else(|| eyre!("Missing setting: {}", SettingKey::AccessToken.as_str()))
    }
}
