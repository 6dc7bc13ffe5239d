// src/config.rs

//! Runtime configuration: defaults, resolution from the command line, and
//! validation.

use crate::core::errors::ZkctlError;
use anyhow::{Result, anyhow};
use std::time::Duration;

/// The connect string used when `--server` is not given.
pub const DEFAULT_SERVER: &str = "localhost:2181";

/// Upper bound on establishing the session. If no dispatch grant arrives
/// within this window, the run is abandoned as a connection failure.
pub const INITIAL_CONNECT_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Comma-separated `host:port` list, optionally followed by a chroot
    /// path (e.g. `"zk1:2181,zk2:2181/app"`).
    pub connect_string: String,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_string: DEFAULT_SERVER.to_string(),
            connect_timeout: INITIAL_CONNECT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_cli(server: &str) -> Self {
        Self {
            connect_string: server.to_string(),
            ..Self::default()
        }
    }

    /// Validates the resolved configuration to ensure logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.connect_string.is_empty() {
            return Err(anyhow!("server cannot be empty"));
        }

        let (hosts, chroot) = match self.connect_string.find('/') {
            Some(idx) => (
                &self.connect_string[..idx],
                Some(&self.connect_string[idx..]),
            ),
            None => (self.connect_string.as_str(), None),
        };

        if hosts.is_empty() {
            return Err(anyhow!("server cannot consist of a chroot path alone"));
        }

        for entry in hosts.split(',') {
            let (host, port) = entry
                .rsplit_once(':')
                .ok_or_else(|| anyhow!("invalid server entry {entry:?}: expected host:port"))?;
            if host.is_empty() {
                return Err(anyhow!("invalid server entry {entry:?}: host cannot be empty"));
            }
            let port: u16 = port.parse().map_err(|_| {
                anyhow!("invalid server entry {entry:?}: port must be between 1 and 65535")
            })?;
            if port == 0 {
                return Err(anyhow!("invalid server entry {entry:?}: port cannot be 0"));
            }
        }

        if let Some(chroot) = chroot {
            validate_node_path(chroot).map_err(|err| anyhow!("invalid chroot: {err}"))?;
        }

        Ok(())
    }
}

/// Checks that `path` is a well-formed absolute node path: it starts with
/// `/`, has no empty segments, and does not end with a trailing slash
/// (except for the root itself).
pub fn validate_node_path(path: &str) -> Result<(), ZkctlError> {
    let invalid = |reason: &str| ZkctlError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path == "/" {
        return Ok(());
    }
    if path.ends_with('/') {
        return Err(invalid("must not end with '/'"));
    }
    if path.split('/').skip(1).any(str::is_empty) {
        return Err(invalid("must not contain empty segments"));
    }
    Ok(())
}
