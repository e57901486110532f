use anyhow::{Context, Result};

/// Default text-to-image endpoint. The prompt is appended as a path segment.
pub const DEFAULT_IMAGE_API_BASE: &str = "https://image.pollinations.ai/prompt";

/// Values people paste into `.env` templates instead of a real key.
const PLACEHOLDER_KEYS: &[&str] = &["ここにAPIキー", "YOUR_API_KEY", "your-api-key"];

/// Application configuration loaded from environment variables.
///
/// The API key is optional at startup: a missing key is reported to the user
/// on the page when they try to generate a plan.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub public_base_url: String,
    pub image_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            google_api_key: api_key_from(std::env::var("GOOGLE_API_KEY").ok()),
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_base_url: optional_env("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            image_api_base: optional_env("IMAGE_API_BASE")
                .unwrap_or_else(|| DEFAULT_IMAGE_API_BASE.to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

/// Treats empty and placeholder keys as unset.
fn api_key_from(raw: Option<String>) -> Option<String> {
    let key = raw?.trim().to_string();
    if key.is_empty() || PLACEHOLDER_KEYS.contains(&key.as_str()) {
        None
    } else {
        Some(key)
    }
}
