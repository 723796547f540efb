//! Environment configuration for the `wumpus` binary.
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`). Command-line flags
/// take precedence over every field here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Agent configuration file used when `--config` is not given.
    pub agent_config: Option<PathBuf>,
    pub logging: LogConfig,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WUMPUS_CONFIG` - Agent configuration TOML file
    /// - `WUMPUS_LOG_FILE` - Also write logs to this file name
    /// - `WUMPUS_LOG_DIR` - Directory for the log file (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            agent_config: read_env("WUMPUS_CONFIG"),
            logging: LogConfig {
                file_name: read_env::<String>("WUMPUS_LOG_FILE").filter(|name| !name.is_empty()),
                directory: read_env("WUMPUS_LOG_DIR"),
            },
        }
    }
}

/// Optional file logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub file_name: Option<String>,
    pub directory: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
