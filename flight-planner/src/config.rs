//! Process configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use crate::planner::{LayoverRule, QueryConfig};

/// Path of the flight CSV file.
pub const DATA_VAR: &str = "FLIGHT_DATA";
/// Listen address in server mode.
pub const ADDR_VAR: &str = "FLIGHT_PLANNER_ADDR";
/// `console` or `server`.
pub const MODE_VAR: &str = "FLIGHT_PLANNER_MODE";
/// `inclusive` or `strict`.
pub const LAYOVER_VAR: &str = "FLIGHT_PLANNER_LAYOVER";

const DEFAULT_DATA: &str = "flight-data.csv";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid FLIGHT_PLANNER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid FLIGHT_PLANNER_MODE {0:?}: expected `console` or `server`")]
    InvalidMode(String),

    #[error("invalid FLIGHT_PLANNER_LAYOVER {0:?}: expected `inclusive` or `strict`")]
    InvalidLayover(String),

    #[error("unknown argument {0:?}: expected `--console` or `--server`")]
    UnknownArgument(String),
}

/// How the binary answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Line-oriented commands on stdin, results on stdout.
    #[default]
    Console,

    /// JSON over HTTP.
    Server,
}

impl Mode {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("console") {
            Some(Mode::Console)
        } else if s.eq_ignore_ascii_case("server") {
            Some(Mode::Server)
        } else {
            None
        }
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
    pub mode: Mode,
    pub query: QueryConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set. Unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));

        let addr_text = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_text
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_text.clone(),
                source,
            })?;

        let mode = match lookup(MODE_VAR) {
            Some(value) => Mode::parse(&value).ok_or(ConfigError::InvalidMode(value))?,
            None => Mode::default(),
        };

        let layover = match lookup(LAYOVER_VAR) {
            Some(value) => LayoverRule::parse(&value).ok_or(ConfigError::InvalidLayover(value))?,
            None => LayoverRule::default(),
        };

        Ok(Self {
            data_path,
            addr,
            mode,
            query: QueryConfig::new(layover),
        })
    }

    /// Apply command-line flags. The last of `--console` / `--server` wins.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--console" => self.mode = Mode::Console,
                "--server" => self.mode = Mode::Server,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(self)
    }
}
