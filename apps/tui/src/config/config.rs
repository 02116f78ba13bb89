use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use url::Url;

use crate::domain::Lang;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub lang: Lang,
}

/// Initializes the application configuration from .env and the process
/// environment.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let raw_url = env::var("LABDATA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    // A trailing slash matters: Url::join would otherwise replace the last
    // path segment instead of appending data/... under it.
    let normalized = if raw_url.ends_with('/') {
        raw_url
    } else {
        format!("{raw_url}/")
    };

    let base_url =
        Url::parse(&normalized).map_err(|e| eyre!("Invalid base URL {normalized}: {e}"))?;

    let lang = env::var("LABDATA_LANG")
        .ok()
        .as_deref()
        .and_then(Lang::parse)
        .unwrap_or(Lang::En);

    Ok(AppConfig { base_url, lang })
}
