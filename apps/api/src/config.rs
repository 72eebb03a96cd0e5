use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::recommendation::engine::DEFAULT_LIMIT;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog file; the built-in catalog is used when unset.
    pub career_catalog_path: Option<PathBuf>,
    pub recommendation_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let recommendation_limit = match lookup("RECOMMENDATION_LIMIT") {
            Some(v) => v
                .parse::<usize>()
                .context("RECOMMENDATION_LIMIT must be a positive integer")?,
            None => DEFAULT_LIMIT,
        };
        if recommendation_limit == 0 {
            bail!("RECOMMENDATION_LIMIT must be at least 1");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            career_catalog_path: lookup("CAREER_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            recommendation_limit,
        })
    }
}
