use std::path::PathBuf;

use crate::types::Token;

/// File-backed token storage for the CLI boundary.
///
/// Lives outside the token lifecycle on purpose: `TokenManager` hands back
/// updated token values and the CLI decides to park them here, in the local
/// data directory.
pub struct TokenCache;

impl TokenCache {
    pub async fn load() -> Result<Token, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    pub async fn store(token: &Token) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("setlistify/cache/token.json");
        path
    }
}
