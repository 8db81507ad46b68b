use serde_json::Value;
use tracing::warn;

/// Upstream proxy applied to every provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub server: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Accepts either a JSON object with at least `server`, or a bare URL
    /// string. A bare non-JSON string is always taken as the server URL; an
    /// unparseable URL only logs a warning.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let config = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => {
                let server = object.get("server").and_then(Value::as_str)?.to_string();
                Self {
                    server,
                    username: object
                        .get("username")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    password: object
                        .get("password")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                }
            }
            Ok(Value::String(server)) => Self {
                server,
                username: None,
                password: None,
            },
            // Any other JSON value is unusable as a proxy.
            Ok(_) => return None,
            // Not JSON at all: a bare URL string.
            Err(_) => Self {
                server: raw.to_string(),
                username: None,
                password: None,
            },
        };

        if url::Url::parse(&config.server).is_err() {
            warn!("Proxy server '{}' does not parse as a URL", config.server);
        }
        Some(config)
    }
}
