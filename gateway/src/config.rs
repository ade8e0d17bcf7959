use std::env;
use std::time::Duration;

/// Runtime configuration, resolved once at startup. No runtime mutation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin all relayed traffic is sent to (trailing `/` trimmed).
    pub backend_url: String,
    /// Port the front server listens on.
    pub port: u16,
    /// Directory holding the built SPA bundle.
    pub static_dir: String,
    /// Connect timeout for the outbound HTTP client.
    pub connect_timeout: Duration,
    /// Read timeout for the outbound HTTP client.
    pub read_timeout: Duration,
    /// Upper bound for buffering inbound request bodies.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            port: parse_or("PORT", 3000),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            connect_timeout: Duration::from_millis(parse_or("CONNECT_TIMEOUT_MS", 5_000)),
            read_timeout: Duration::from_millis(parse_or("READ_TIMEOUT_MS", 10_000)),
            max_body_bytes: parse_or("MAX_BODY_BYTES", 25 * 1024 * 1024),
        }
    }
}

/// Read an env var and parse it, falling back to `default` when unset or
/// unparseable.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
