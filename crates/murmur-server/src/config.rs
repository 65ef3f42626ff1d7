use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Runtime settings, read from `MURMUR_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub db_readers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("MURMUR_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("MURMUR_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("MURMUR_PORT must be a port number")?;
        let db_path: PathBuf = lookup("MURMUR_DB_PATH")
            .unwrap_or_else(|| "murmur.db".into())
            .into();
        let db_readers: usize = lookup("MURMUR_DB_READERS")
            .unwrap_or_else(|| "4".into())
            .parse()
            .context("MURMUR_DB_READERS must be a positive integer")?;
        if db_readers == 0 {
            bail!("MURMUR_DB_READERS must be at least 1");
        }

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", host, port))?;

        Ok(Self {
            addr,
            db_path,
            db_readers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_path, PathBuf::from("murmur.db"));
        assert_eq!(cfg.db_readers, 4);
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("MURMUR_HOST", "127.0.0.1"),
            ("MURMUR_PORT", "9000"),
            ("MURMUR_DB_PATH", "/tmp/social.db"),
            ("MURMUR_DB_READERS", "2"),
        ])
        .unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/social.db"));
        assert_eq!(cfg.db_readers, 2);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(config(&[("MURMUR_PORT", "http")]).is_err());
        assert!(config(&[("MURMUR_DB_READERS", "0")]).is_err());
        assert!(config(&[("MURMUR_HOST", "not a host")]).is_err());
    }
}
