//! Space Catalog - in-memory space pricing configurations
//!
//! Loaded once from `SPACES_FILE` and updated by admins at runtime.
//! Concurrent updates are last-write-wins; prices stay advisory until a
//! submission recomputes them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use pricing_engine::{PricingResult, validate_space_config};
use shared::models::SpacePricingConfig;

use crate::core::{Result, ServerError};

/// Space pricing catalog keyed by `spaceType`
#[derive(Clone, Default)]
pub struct SpaceCatalog {
    spaces: Arc<RwLock<HashMap<String, SpacePricingConfig>>>,
}

impl std::fmt::Debug for SpaceCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceCatalog")
            .field("spaces", &self.spaces.read().len())
            .finish()
    }
}

impl SpaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from configs, validating each one
    pub fn from_configs(configs: Vec<SpacePricingConfig>) -> Result<Self> {
        let catalog = Self::new();
        {
            let mut spaces = catalog.spaces.write();
            for config in configs {
                validate_space_config(&config)?;
                if spaces.contains_key(&config.space_type) {
                    tracing::warn!(
                        space_type = %config.space_type,
                        "Duplicate space config, keeping the last one"
                    );
                }
                spaces.insert(config.space_type.clone(), config);
            }
        }
        Ok(catalog)
    }

    /// Load a JSON array of `SpacePricingConfig`
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|source| ServerError::CatalogLoad {
            path: display.clone(),
            source,
        })?;
        let configs: Vec<SpacePricingConfig> =
            serde_json::from_str(&content).map_err(|source| ServerError::CatalogParse {
                path: display.clone(),
                source,
            })?;

        let catalog = Self::from_configs(configs)?;
        tracing::info!(path = %path.display(), spaces = catalog.len(), "Space catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, space_type: &str) -> Option<SpacePricingConfig> {
        self.spaces.read().get(space_type).cloned()
    }

    /// All configs, sorted by `spaceType`
    pub fn list(&self) -> Vec<SpacePricingConfig> {
        let mut spaces: Vec<_> = self.spaces.read().values().cloned().collect();
        spaces.sort_by(|a, b| a.space_type.cmp(&b.space_type));
        spaces
    }

    /// Validate and insert or replace a config. Returns the previous one.
    pub fn upsert(&self, config: SpacePricingConfig) -> PricingResult<Option<SpacePricingConfig>> {
        validate_space_config(&config)?;
        let space_type = config.space_type.clone();
        let previous = self.spaces.write().insert(space_type.clone(), config);
        tracing::info!(
            space_type = %space_type,
            replaced = previous.is_some(),
            "Space pricing config updated"
        );
        Ok(previous)
    }

    pub fn len(&self) -> usize {
        self.spaces.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PricingTier;
    use std::io::Write;

    const SPACES_JSON: &str = r#"[
        {
            "spaceType": "open-space",
            "hourlyRate": 10,
            "dailyRate": 60,
            "perPerson": true
        },
        {
            "spaceType": "salle-reunion",
            "tiers": [
                {"minPeople": 1, "maxPeople": 5, "hourlyRate": 10, "dailyRate": 80},
                {"minPeople": 6, "maxPeople": 10, "hourlyRate": 15, "dailyRate": 120,
                 "extraPersonHourly": 3, "extraPersonDaily": 20}
            ]
        },
        {
            "spaceType": "evenementiel",
            "requiresQuote": true
        }
    ]"#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SPACES_JSON.as_bytes()).unwrap();

        let catalog = SpaceCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let room = catalog.get("salle-reunion").unwrap();
        assert_eq!(room.tiers.len(), 2);
        assert_eq!(room.tiers[1].extra_person_daily, Some(20.0));
        assert!(catalog.get("evenementiel").unwrap().requires_quote);

        let keys: Vec<_> = catalog.list().into_iter().map(|s| s.space_type).collect();
        assert_eq!(keys, vec!["evenementiel", "open-space", "salle-reunion"]);
    }

    #[test]
    fn test_load_rejects_overlapping_tiers() {
        let json = r#"[{"spaceType": "salle-x", "tiers": [
            {"minPeople": 1, "maxPeople": 6, "hourlyRate": 10, "dailyRate": 80},
            {"minPeople": 5, "maxPeople": 10, "hourlyRate": 15, "dailyRate": 120}
        ]}]"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = SpaceCatalog::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::InvalidSpace(_)));
    }

    #[test]
    fn test_load_errors() {
        let err = SpaceCatalog::load_from_file("/nonexistent/spaces.json").unwrap_err();
        assert!(matches!(err, ServerError::CatalogLoad { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = SpaceCatalog::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::CatalogParse { .. }));
    }

    #[test]
    fn test_upsert_last_write_wins() {
        let catalog = SpaceCatalog::new();
        assert!(catalog.is_empty());

        let mut config = SpacePricingConfig::new("bureau");
        config.hourly_rate = 12.0;
        assert_eq!(catalog.upsert(config.clone()).unwrap(), None);

        config.hourly_rate = 15.0;
        let previous = catalog.upsert(config).unwrap().unwrap();
        assert_eq!(previous.hourly_rate, 12.0);
        assert_eq!(catalog.get("bureau").unwrap().hourly_rate, 15.0);
    }

    #[test]
    fn test_upsert_rejects_invalid() {
        let catalog = SpaceCatalog::new();
        let config = SpacePricingConfig {
            tiers: vec![PricingTier::new(5, 2, 10.0, 50.0)],
            ..SpacePricingConfig::new("salle-y")
        };
        assert!(catalog.upsert(config).is_err());
        assert!(catalog.get("salle-y").is_none());
    }
}
