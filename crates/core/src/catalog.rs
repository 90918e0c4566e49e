//! The vocabulary table a quiz draws its questions from.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{FoodId, FoodItem, FoodItemError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate food id: {0}")]
    DuplicateId(FoodId),

    #[error("duplicate display name: {0}")]
    DuplicateDisplayName(String),

    #[error(transparent)]
    Item(#[from] FoodItemError),
}

/// Immutable, ordered set of food items with unique ids and display names.
///
/// Display names are compared case-insensitively so typed answers can never
/// match two entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError` when ids or display names repeat.
    pub fn new(items: Vec<FoodItem>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(items.len());
        let mut names = HashSet::with_capacity(items.len());
        for item in &items {
            if !ids.insert(item.id().clone()) {
                return Err(CatalogError::DuplicateId(item.id().clone()));
            }
            if !names.insert(item.display_name().to_lowercase()) {
                return Err(CatalogError::DuplicateDisplayName(
                    item.display_name().to_string(),
                ));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &FoodId) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id() == id)
    }
}

const DEFAULT_FOOD_ITEMS: &[(&str, &str, &str)] = &[
    ("pasta", "Pasta", "https://geasacperu.com/imagenes/pasta.jpg"),
    ("corn", "Corn", "https://geasacperu.com/imagenes/corn.jpg"),
    ("sausage", "Sausage", "https://geasacperu.com/imagenes/sausage.jpg"),
    ("cucumber", "Cucumber", "https://geasacperu.com/imagenes/CUCUMBER.jpg"),
    ("butter", "Butter", "https://geasacperu.com/imagenes/BUTTER.jpg"),
    ("steak", "Steak", "https://geasacperu.com/imagenes/STEAK.jpg"),
    ("yogurt", "Yogurt", "https://geasacperu.com/imagenes/yogurt.png"),
    ("lettuce", "Lettuce", "https://geasacperu.com/imagenes/LETTUCE.png"),
    ("bread", "Bread", "https://geasacperu.com/imagenes/BREAD.png"),
    ("tuna", "Tuna", "https://geasacperu.com/imagenes/TUNA.png"),
    (
        "milk",
        "Milk",
        "https://images.pexels.com/photos/248412/pexels-photo-248412.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
    ),
    (
        "eggs",
        "Eggs",
        "https://images.pexels.com/photos/162712/egg-white-food-protein-162712.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
    ),
    ("cheese", "Cheese", "https://geasacperu.com/imagenes/cheese.png"),
    ("rice", "Rice", "https://geasacperu.com/imagenes/rice.png"),
    ("fish", "Fish", "https://geasacperu.com/imagenes/fish.png"),
    ("meat", "Meat", "https://geasacperu.com/imagenes/meat.jpg"),
];

/// The built-in 16-item food table.
///
/// # Panics
///
/// Panics if the built-in table is malformed, which the tests below rule out.
#[must_use]
pub fn default_catalog() -> Catalog {
    let items = DEFAULT_FOOD_ITEMS
        .iter()
        .map(|(id, name, image)| FoodItem::new(*id, *name, image))
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in food items should be valid");
    Catalog::new(items).expect("built-in food table should be unique")
}
