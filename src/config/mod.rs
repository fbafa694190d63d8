use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Lê `HOST` e `PORT` do ambiente (depois do `dotenv`).
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("⚠️  Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_address() {
        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(Some("127.0.0.1".into()), Some("9090".into()));
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = ServerConfig::from_vars(Some("  ".into()), Some("http".into()));
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
