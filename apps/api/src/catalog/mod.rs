//! Career catalog feed: read-only source of `CareerRecord`s for the engine.
//!
//! Default: `StaticCareerCatalog` holding the built-in seed data, or a JSON file named by
//! `CAREER_CATALOG_PATH`. Carried in `AppState` as `Arc<dyn CareerCatalog>`.

pub mod seed;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::career::CareerRecord;

#[async_trait]
pub trait CareerCatalog: Send + Sync {
    async fn list_careers(&self) -> Result<Vec<CareerRecord>, AppError>;
}

/// Catalog fixed at startup.
#[derive(Debug, Clone)]
pub struct StaticCareerCatalog {
    careers: Vec<CareerRecord>,
}

impl StaticCareerCatalog {
    /// Builds a catalog, keeping the first record for each career name.
    pub fn new(careers: Vec<CareerRecord>) -> Self {
        let mut seen = HashSet::new();
        let careers = careers
            .into_iter()
            .filter(|career| {
                let fresh = seen.insert(career.name.clone());
                if !fresh {
                    warn!("Ignoring duplicate career '{}'", career.name);
                }
                fresh
            })
            .collect();
        Self { careers }
    }

    pub fn seeded() -> Self {
        Self::new(seed::default_careers())
    }

    /// Loads a JSON array of careers whose `required_interests` is a list of labels.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read career catalog {}", path.display()))?;
        let entries: Vec<CareerFileEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed career catalog {}", path.display()))?;

        let careers = entries
            .into_iter()
            .map(|entry| {
                let labels: Vec<&str> = entry.required_interests.iter().map(String::as_str).collect();
                CareerRecord::new(entry.name, entry.description, &labels, entry.skills)
            })
            .collect();

        let catalog = Self::new(careers);
        info!(
            "Loaded {} careers from {}",
            catalog.careers.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

#[async_trait]
impl CareerCatalog for StaticCareerCatalog {
    async fn list_careers(&self) -> Result<Vec<CareerRecord>, AppError> {
        Ok(self.careers.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CareerFileEntry {
    name: String,
    description: String,
    #[serde(default)]
    required_interests: Vec<String>,
    #[serde(default)]
    skills: String,
}
