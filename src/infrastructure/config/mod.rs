//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    /// Login endpoint, receives `{"email", "password"}` as JSON
    pub auth_url: String,
    /// WebSocket endpoint of the chat relay
    pub socket_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChatConfig {
    /// Dispatch a connect command at startup
    pub auto_connect: bool,
    pub prefix: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            auto_connect: true,
            prefix: "/".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                auth_url: "http://localhost:3001/login".to_string(),
                socket_url: "ws://localhost:3001".to_string(),
            },
            chat: ChatConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.auth_url.is_empty() {
            return Err(ConfigError::MissingField("server.auth-url".to_string()));
        }
        if !self.server.auth_url.starts_with("http://") && !self.server.auth_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!(
                "server.auth-url must be http(s): {}",
                self.server.auth_url
            )));
        }
        if self.server.socket_url.is_empty() {
            return Err(ConfigError::MissingField("server.socket-url".to_string()));
        }
        if !self.server.socket_url.starts_with("ws://") && !self.server.socket_url.starts_with("wss://") {
            return Err(ConfigError::InvalidValue(format!(
                "server.socket-url must be ws(s): {}",
                self.server.socket_url
            )));
        }
        if self.chat.prefix.is_empty() {
            return Err(ConfigError::MissingField("chat.prefix".to_string()));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(url) = std::env::var("CHAT_AUTH_URL") {
            config.server.auth_url = url;
        }

        if let Ok(url) = std::env::var("CHAT_SOCKET_URL") {
            config.server.socket_url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kebab_case_yaml() {
        let yaml = "server:\n  auth-url: http://chat.local/login\n  socket-url: ws://chat.local\nchat:\n  auto-connect: false\n  prefix: \"!\"\n";
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.server.auth_url, "http://chat.local/login");
        assert_eq!(config.server.socket_url, "ws://chat.local");
        assert!(!config.chat.auto_connect);
        assert_eq!(config.chat.prefix, "!");
    }

    #[test]
    fn test_chat_section_defaults() {
        let yaml = "server:\n  auth-url: http://chat.local/login\n  socket-url: ws://chat.local\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.chat, ChatConfig::default());
    }

    #[test]
    fn test_partial_chat_section_keeps_other_defaults() {
        let yaml = "server:\n  auth-url: http://chat.local/login\n  socket-url: ws://chat.local\nchat:\n  auto-connect: false\n";
        let config = Config::from_yaml(yaml).unwrap();

        assert!(!config.chat.auto_connect);
        assert_eq!(config.chat.prefix, "/");
    }

    #[test]
    fn test_defaults_round_trip_through_yaml() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("auth-url"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_wrong_schemes() {
        let yaml = "server:\n  auth-url: ws://chat.local/login\n  socket-url: ws://chat.local\n";
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::InvalidValue(_))));

        let yaml = "server:\n  auth-url: http://chat.local/login\n  socket-url: http://chat.local\n";
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        assert!(matches!(
            Config::load("/nonexistent/chat-relay.yaml"),
            Err(ConfigError::Parse(_))
        ));
    }
}
