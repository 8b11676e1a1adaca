// src/config.rs

use crate::errors::{AppError, AppResult};
use crate::inventory::SpotQuery;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Filter bar values applied when the command line does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub search: String,
    pub status: String,
    #[serde(rename = "type")]
    pub spot_type: String,
    pub sort: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            spot_type: "all".to_string(),
            sort: "number".to_string(),
        }
    }
}

impl QueryDefaults {
    pub fn to_query(&self) -> AppResult<SpotQuery> {
        SpotQuery::from_raw(&self.search, &self.status, &self.spot_type, &self.sort)
            .map_err(AppError::Config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed file with the inventory. The bundled sample is used when unset.
    pub seed_path: Option<PathBuf>,
    /// Default `tracing` directive; `RUST_LOG` wins when set.
    pub log_filter: String,
    /// Title shown on the rendered parking page.
    pub building_name: String,
    /// Worksheet name used by the xlsx export.
    pub sheet_name: String,
    pub query: QueryDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_filter: "parking_admin=info".to_string(),
            building_name: "Conjunto Residencial".to_string(),
            sheet_name: "Parqueaderos".to_string(),
            query: QueryDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let cfg: AppConfig = serde_json::from_str(raw)
            .map_err(|e| AppError::Config(format!("Invalid config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// `None` falls back to defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.sheet_name.trim().is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(AppError::Config(
                "sheet_name must be 1 to 31 characters".to_string(),
            ));
        }
        self.query.to_query().map(|_| ())
    }
}
