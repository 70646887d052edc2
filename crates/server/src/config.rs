//! Server configuration from the environment

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `ANTHROPIC_API_KEY`
    pub ai_api_key: Option<String>,
    /// `CHAT_MODEL`
    pub model: String,
    /// `CHAT_API_URL`, overridable for local model gateways
    pub api_url: String,
    /// `BIND_ADDR`
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ai_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            ai_api_key: get("ANTHROPIC_API_KEY"),
            model: get("CHAT_MODEL").unwrap_or(defaults.model),
            api_url: get("CHAT_API_URL").unwrap_or(defaults.api_url),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_env_empty() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert!(cfg.ai_api_key.is_none());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("CHAT_MODEL", "small-model"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]
        .into_iter()
        .collect();
        let cfg = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.ai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.model, "small-model");
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_blank_key_is_unset() {
        let cfg = ServerConfig::from_lookup(|k| {
            (k == "ANTHROPIC_API_KEY").then(|| "   ".to_string())
        });
        assert!(cfg.ai_api_key.is_none());
    }
}
