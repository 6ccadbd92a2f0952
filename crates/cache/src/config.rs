use std::env;

use crate::core::domain::models::CacheError;

pub const DEFAULT_REPLICAS: usize = 3;

pub const SERVERS_VAR: &str = "CACHE_SERVERS";
pub const REPLICAS_VAR: &str = "CACHE_REPLICAS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    pub servers: Vec<String>,
    pub replicas: usize,
}

impl CacheConfig {
    /// Reads `CACHE_SERVERS` (comma separated, required) and
    /// `CACHE_REPLICAS` (optional, defaults to [`DEFAULT_REPLICAS`]).
    pub fn from_env() -> Result<Self, CacheError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CacheError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let servers_var =
            lookup(SERVERS_VAR).ok_or_else(|| CacheError::Config(format!("{SERVERS_VAR} not set")))?;

        let servers: Vec<String> = servers_var
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if servers.is_empty() {
            return Err(CacheError::Config(format!("{SERVERS_VAR} is empty")));
        }

        let replicas = match lookup(REPLICAS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|r| *r > 0)
                .ok_or_else(|| {
                    CacheError::Config(format!("{REPLICAS_VAR} must be a positive integer: {raw}"))
                })?,
            None => DEFAULT_REPLICAS,
        };

        Ok(Self { servers, replicas })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            servers: vec!["127.0.0.1:6379".to_string()],
            replicas: DEFAULT_REPLICAS,
        }
    }
}
