pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub port: u16,
}

impl Config {
    /// Reads `OPENAI_API_KEY`, `OPENAI_API_BASE`, `OPENAI_MODEL` and `PORT`.
    /// A missing or blank key is kept as `None`; completions then fail.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty());
        let api_base = lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let port = lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { api_key, api_base, model, port }
    }

    /// Key with everything past the first few characters hidden, for logs.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let prefix: String = key.chars().take(3).collect();
            format!("{prefix}***")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_without_key() {
        let config = config_from(&[]);
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert_eq!(config_from(&[("OPENAI_API_KEY", "  ")]).api_key, None);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test-123"),
            ("OPENAI_API_BASE", "http://localhost:9000/v1"),
            ("OPENAI_MODEL", "davinci-002"),
            ("PORT", "3000"),
        ]);
        assert_eq!(config.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(config.api_base, "http://localhost:9000/v1");
        assert_eq!(config.model, "davinci-002");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, DEFAULT_PORT);
    }

    #[test]
    fn masks_key() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-secret-value")]);
        assert_eq!(config.masked_api_key().as_deref(), Some("sk-***"));
        assert_eq!(config_from(&[]).masked_api_key(), None);
    }
}
