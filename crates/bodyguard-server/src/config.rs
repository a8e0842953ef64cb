use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Larger bodies are not read; the request is accepted as undecodable.
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `BODYGUARD_*` environment variables.
    ///
    /// Runs before logging is set up, so bad values are reported on stderr and skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = lookup("BODYGUARD_BIND") {
            match v.parse() {
                Ok(addr) => cfg.bind = addr,
                Err(e) => eprintln!("WARN: ignoring BODYGUARD_BIND='{}': {}", v, e),
            }
        }

        if let Some(v) = lookup("BODYGUARD_MAX_BODY_BYTES") {
            match v.parse::<usize>() {
                Ok(0) => eprintln!("WARN: ignoring BODYGUARD_MAX_BODY_BYTES=0"),
                Ok(n) => cfg.max_body_bytes = n,
                Err(e) => eprintln!("WARN: ignoring BODYGUARD_MAX_BODY_BYTES='{}': {}", v, e),
            }
        }

        if let Some(v) = lookup("BODYGUARD_LOG_FORMAT") {
            match v.parse() {
                Ok(format) => cfg.log_format = format,
                Err(e) => eprintln!("WARN: ignoring BODYGUARD_LOG_FORMAT: {}", e),
            }
        }

        cfg
    }
}
