#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Origin the catalog is fetched from; `/products.json` is appended.
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    /// Total attempts per catalog fetch, including the first one.
    pub retry_attempts: u32,
    /// Base delay for exponential backoff: `retry_delay_ms * 2^(attempt - 1)`.
    pub retry_delay_ms: u64,
    pub user_agent: String,
}
