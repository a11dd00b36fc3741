//! Runtime Configuration
//!
//! API base URL and log level. Compile-time values come from the
//! `API_BASE_URL` / `LOG_LEVEL` environment variables at build time;
//! a `<meta name="api-base-url">` tag in index.html overrides the URL.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5032/";
const API_BASE_URL_META: &str = "api-base-url";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Always ends with `/`
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve configuration for the running page
    pub fn load() -> Self {
        Self::resolve(
            read_meta(API_BASE_URL_META).as_deref(),
            option_env!("API_BASE_URL"),
            option_env!("LOG_LEVEL"),
        )
    }

    /// Meta override wins over the compiled URL; blanks are ignored
    pub fn resolve(meta_url: Option<&str>, compiled_url: Option<&str>, log_level: Option<&str>) -> Self {
        let url = [meta_url, compiled_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        Self {
            api_base_url: normalize_base_url(url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
