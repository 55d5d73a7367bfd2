use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;
pub const DEFAULT_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Immutable client configuration, fixed at construction.
///
/// Defaults are production-friendly and env-overridable:
/// - `RELAYWARDEN_MAX_RETRIES` (default 3)
/// - `RELAYWARDEN_TIMEOUT_SECS` (default 30)
/// - `RELAYWARDEN_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
/// - `RELAYWARDEN_HTTP_POOL_IDLE_TIMEOUT_SECS` (default 90)
/// - `RELAYWARDEN_PROXY_URL` (unset)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    /// Retries after the first attempt; total attempts is `max_retries + 1`.
    pub max_retries: u32,
    /// Per-attempt timeout applied by the HTTP client.
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT_SECS),
            proxy_url: None,
        }
    }

    /// Defaults overlaid with `RELAYWARDEN_*` environment variables.
    pub fn from_env(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::from_lookup(base_url, token, |key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable lookup.
    /// Unparseable values fall back to the default.
    pub fn from_lookup<F>(base_url: impl Into<String>, token: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(base_url, token);

        if let Some(n) = lookup("RELAYWARDEN_MAX_RETRIES").and_then(|s| s.trim().parse::<u32>().ok()) {
            config.max_retries = n;
        }
        if let Some(secs) = lookup("RELAYWARDEN_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(n) = lookup("RELAYWARDEN_HTTP_POOL_MAX_IDLE_PER_HOST")
            .and_then(|s| s.trim().parse::<usize>().ok())
        {
            config.pool_max_idle_per_host = n;
        }
        if let Some(secs) = lookup("RELAYWARDEN_HTTP_POOL_IDLE_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            config.pool_idle_timeout = Duration::from_secs(secs);
        }
        config.proxy_url = lookup("RELAYWARDEN_PROXY_URL").filter(|s| !s.trim().is_empty());

        config
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("max_retries", &self.max_retries)
            .field("timeout", &self.timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}
