//! Server configuration from the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "MINIMAX_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "MINIMAX_PORT";
/// Environment variable switching on the debug response view.
pub const DEBUG_VAR: &str = "MINIMAX_DEBUG";

/// Settings for the HTTP move server.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServerConfig {
    /// Host to bind to.
    host: String,
    /// Port to bind to.
    port: u16,
    /// Render the score and ranked moves instead of the bare board.
    debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from explicit values.
    pub fn new(host: impl Into<String>, port: u16, debug: bool) -> Self {
        Self {
            host: host.into(),
            port,
            debug,
        }
    }

    /// Reads the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults.
    #[instrument(skip(lookup))]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR).unwrap_or(defaults.host);

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::new(format!("{} must be a port number, got {:?}: {}", PORT_VAR, raw, e))
            })?,
            None => defaults.port,
        };

        let debug_view = lookup(DEBUG_VAR)
            .map(|raw| is_truthy(&raw))
            .unwrap_or(defaults.debug);

        debug!(%host, port, debug_view, "Configuration resolved");
        Ok(Self {
            host,
            port,
            debug: debug_view,
        })
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// A `false` debug flag leaves an environment-enabled debug view on.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        debug_view: bool,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if debug_view {
            info!("Debug view enabled from command line");
            self.debug = true;
        }
        self
    }
}

/// Interprets a flag value: `1`, `true`, `yes` and `on` (any case) are set.
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(!*config.debug());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "8080"),
            (DEBUG_VAR, "1"),
        ]))
        .unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 8080);
        assert!(*config.debug());
    }

    #[test]
    fn test_truthy_values() {
        for raw in ["1", "true", "TRUE", "yes", " on "] {
            assert!(is_truthy(raw), "{raw:?} should enable debug");
        }
        for raw in ["", "0", "false", "off", "nope"] {
            assert!(!is_truthy(raw), "{raw:?} should not enable debug");
        }
    }

    #[test]
    fn test_malformed_port() {
        let err = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(err.message.contains(PORT_VAR));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default().with_overrides(None, Some(9000), true);
        assert_eq!(*config.port(), 9000);
        assert_eq!(config.host(), "127.0.0.1");
        assert!(*config.debug());
    }

    #[test]
    fn test_overrides_keep_env_debug_view() {
        let config = ServerConfig::from_lookup(lookup(&[(DEBUG_VAR, "yes")]))
            .unwrap()
            .with_overrides(Some("0.0.0.0".to_string()), None, false);
        assert!(*config.debug());
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 3000);
    }
}
