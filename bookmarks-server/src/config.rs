//! Runtime configuration for the bookmarks server

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Deployment mode.
///
/// Only `Production` changes behavior: storage failures are reported with a
/// generic message instead of the underlying error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            other => Err(format!(
                "unknown environment '{}' (expected production, development or test)",
                other
            )),
        }
    }
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Shared secret every request must present as `Authorization: Bearer <token>`
    pub api_token: String,

    pub environment: Environment,

    /// Allow any origin (default: true; false = localhost only)
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            api_token: api_token.into(),
            environment: Environment::default(),
            cors_permissive: true,
        }
    }
}

// Keep the token out of debug logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("cors_permissive", &self.cors_permissive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::new("secret");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.environment, Environment::Development);
        assert!(config.cors_permissive);
    }

    #[test]
    fn parses_environment_names() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("test".parse::<Environment>(), Ok(Environment::Test));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn debug_redacts_token() {
        let config = ServerConfig::new("hunter2");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
