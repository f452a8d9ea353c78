//! Server configuration loaded from environment variables.

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        /// Name of the environment variable.
        name: &'static str,
        /// The raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Listener address and logging options for the inspection server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Whether traversal hops are logged at `debug` for every request.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8083,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `PEEPHOLE_HOST` -- bind address (default `0.0.0.0`)
    /// - `PEEPHOLE_PORT` -- TCP port (default `8083`)
    /// - `PEEPHOLE_VERBOSE` -- log every traversal hop (default `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("PEEPHOLE_HOST").unwrap_or(defaults.host);

        let port = lookup("PEEPHOLE_PORT")
            .map(|value| {
                value.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                    name: "PEEPHOLE_PORT",
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()?
            .unwrap_or(defaults.port);

        let verbose = lookup("PEEPHOLE_VERBOSE")
            .map(|value| {
                parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                    name: "PEEPHOLE_VERBOSE",
                    reason: String::from("expected true/false, 1/0, or yes/no"),
                    value,
                })
            })
            .transpose()?
            .unwrap_or(defaults.verbose);

        Ok(Self {
            host,
            port,
            verbose,
        })
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
