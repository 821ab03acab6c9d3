//! Process Configuration
//!
//! Command-line flags, each with an environment-variable fallback:
//!
//! | Flag                  | Env               | Default        |
//! |-----------------------|-------------------|----------------|
//! | `--bind <addr:port>`  | `CSV_SEARCH_BIND` | `0.0.0.0:3000` |
//! | `--port <n>`          | `PORT`            | `3000`         |
//! | `--log-level <level>` | `CSV_SEARCH_LOG`  | `info`         |
//!
//! `--bind` wins over `--port` when both are given.

use anyhow::{Context, Result, anyhow};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Reads the process arguments and environment.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Builds a config from explicit arguments (program name excluded) and an env lookup.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut port: Option<String> = None;
        let mut log_level: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--bind" | "--port" | "--log-level" => {
                    let value = args
                        .get(i + 1)
                        .cloned()
                        .ok_or_else(|| anyhow!("{} requires a value", flag))?;
                    match flag {
                        "--bind" => bind = Some(value),
                        "--port" => port = Some(value),
                        _ => log_level = Some(value),
                    }
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind.or_else(|| env("CSV_SEARCH_BIND"));
        let port = port.or_else(|| env("PORT"));
        let log_level = log_level.or_else(|| env("CSV_SEARCH_LOG"));

        let mut config = Config::default();

        if let Some(bind) = bind {
            config.bind_addr = bind
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid bind address: {}", bind))?;
        } else if let Some(port) = port {
            let port: u16 = port
                .parse()
                .with_context(|| format!("Invalid port: {}", port))?;
            config.bind_addr.set_port(port);
        }

        if let Some(level) = log_level {
            config.log_level = level
                .parse::<Level>()
                .map_err(|_| anyhow!("Invalid log level: {}", level))?;
        }

        Ok(config)
    }
}
