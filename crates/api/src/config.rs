/// Relay configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Base URL of the Discord API host the relay forwards to. Points at
    /// a local mock listener in integration tests.
    pub discord_base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for the outbound forward call in seconds (default: `30`).
    pub forward_timeout_secs: u64,
}

impl RelayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `DISCORD_BASE_URL`     | `https://discord.com`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `FORWARD_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let discord_base_url = std::env::var("DISCORD_BASE_URL")
            .unwrap_or_else(|_| "https://discord.com".into())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let forward_timeout_secs: u64 = std::env::var("FORWARD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("FORWARD_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            discord_base_url,
            request_timeout_secs,
            forward_timeout_secs,
        }
    }
}
