use std::path::Path;

use log::info;
use serde::Deserialize;

use quiz_core::catalog::{Catalog, CatalogError, default_catalog};
use quiz_core::model::FoodItem;

use crate::error::ConfigError;

/// On-disk shape of a food item. `name_en` and `imageUrl` are accepted as
/// aliases.
#[derive(Debug, Deserialize)]
struct FoodItemRecord {
    id: String,
    #[serde(alias = "name_en")]
    display_name: String,
    #[serde(alias = "imageUrl")]
    image: String,
}

/// Provides the food table for a run: the built-in one or a JSON file.
pub struct CatalogService;

impl CatalogService {
    /// Loads `path` when given, otherwise the built-in table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid JSON,
    /// is empty, or contains invalid or duplicate items.
    pub fn load(path: Option<&Path>) -> Result<Catalog, ConfigError> {
        let Some(path) = path else {
            return Ok(default_catalog());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!("loaded {} food items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// # Errors
    ///
    /// See [`CatalogService::load`].
    pub fn from_json(raw: &str) -> Result<Catalog, ConfigError> {
        let records: Vec<FoodItemRecord> = serde_json::from_str(raw)?;
        if records.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let items = records
            .into_iter()
            .map(|r| FoodItem::new(r.id, r.display_name, r.image))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::from)?;
        Ok(Catalog::new(items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::FoodItemError;

    #[test]
    fn no_path_means_builtin_table() {
        let catalog = CatalogService::load(None).unwrap();
        assert_eq!(catalog, default_catalog());
    }

    #[test]
    fn accepts_field_aliases() {
        let json = r#"[
            { "id": "corn", "name_en": "Corn", "imageUrl": "https://example.com/corn.jpg" },
            { "id": "milk", "display_name": "Milk", "image": "img/milk.png" }
        ]"#;
        let catalog = CatalogService::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].display_name(), "Corn");
        assert!(catalog.items()[1].image().as_path().is_some());
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            CatalogService::from_json("[]"),
            Err(ConfigError::EmptyCatalog)
        ));
    }

    #[test]
    fn invalid_items_are_rejected() {
        let json = r#"[{ "id": "corn", "name_en": "  ", "imageUrl": "corn.jpg" }]"#;
        let err = CatalogService::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(CatalogError::Item(FoodItemError::EmptyDisplayName))
        ));

        let json = r#"[
            { "id": "corn", "name_en": "Corn", "imageUrl": "a.jpg" },
            { "id": "corn", "name_en": "Maize", "imageUrl": "b.jpg" }
        ]"#;
        assert!(matches!(
            CatalogService::from_json(json),
            Err(ConfigError::Catalog(CatalogError::DuplicateId(_)))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            CatalogService::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
