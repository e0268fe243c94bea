use std::env;

use log::info;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a port number between 1 and 65535, got '{value}'")]
    InvalidPort { name: &'static str, value: String },
}

/// Where the calculator service lives and how chatty the client is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_host: String,
    pub service_port: u16,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_host: DEFAULT_HOST.to_string(),
            service_port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn log_summary(&self) {
        info!("Client configuration loaded:");
        info!("  Calculator service: {}", self.service_addr());
        info!("  Log level: {}", self.log_level);
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("CALCULATOR_HOST").filter(|h| !h.trim().is_empty()) {
            config.service_host = host.trim().to_string();
        }
        if let Some(port) = lookup("CALCULATOR_PORT") {
            config.service_port = parse_port("CALCULATOR_PORT", &port)?;
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|l| !l.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }
        Ok(config)
    }

    pub fn service_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.service_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn reads_host_port_and_level() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("CALCULATOR_HOST", " calc.internal "),
            ("CALCULATOR_PORT", "7001"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.service_addr(), "calc.internal:7001");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_host_keeps_default() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("CALCULATOR_HOST", "  ")])).unwrap();
        assert_eq!(config.service_host, DEFAULT_HOST);
    }

    #[test]
    fn rejects_invalid_ports() {
        for bad in ["0", "70000", "http"] {
            let err = ClientConfig::from_lookup(lookup_from(&[("CALCULATOR_PORT", bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidPort {
                    name: "CALCULATOR_PORT",
                    value: bad.to_string()
                }
            );
        }
    }
}
