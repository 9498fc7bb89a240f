use std::path::PathBuf;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Low temperature keeps corrections close to deterministic.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the API listens on
    pub port: u16,
    /// Key for the Gemini API. Requests fail upstream-side when absent.
    pub gemini_api_key: Option<String>,
    /// Model id passed to `models/{id}:generateContent`
    pub gemini_model: String,
    /// Base URL of the Gemini REST API, without trailing slash
    pub gemini_base_url: String,
    pub temperature: f32,
    /// Browser origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Directory holding the built Dioxus bundle
    pub frontend_dist: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            port: env_parse("POLISH_PORT", 8080)?,
            gemini_api_key,
            gemini_model: env_str("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: env_str("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            temperature: env_parse("GEMINI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            allowed_origins: env_csv(
                "POLISH_ALLOWED_ORIGINS",
                &["http://localhost:8080", "http://127.0.0.1:8080"],
            ),
            frontend_dist: frontend_dist_from_env(),
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, val: &str) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    val.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}"))
}

fn env_csv(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => split_csv(&raw),
        Err(_) => default.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolve the Dioxus frontend dist directory.
///
/// If `FRONTEND_DIST` is set, that value is used as-is.
/// Otherwise resolve from the workspace root so this works whether the
/// server is launched from repository root or from `polish-server/`.
pub fn frontend_dist_from_env() -> String {
    if let Ok(path) = std::env::var("FRONTEND_DIST") {
        return path;
    }

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    workspace_root
        .join("polish-ui/target/dx/polish-ui/debug/web/public")
        .to_string_lossy()
        .to_string()
}
