use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::model::ids::FoodId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FoodItemError {
    #[error("food id cannot be empty")]
    EmptyId,

    #[error("display name cannot be empty")]
    EmptyDisplayName,

    #[error("image reference cannot be empty")]
    EmptyImageRef,
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Where the picture for a food item lives. Loading it is up to the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(Url),
    FilePath(PathBuf),
}

impl ImageRef {
    /// Parses an absolute URL, falling back to a file path for anything else.
    ///
    /// # Errors
    ///
    /// Returns `FoodItemError::EmptyImageRef` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FoodItemError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(FoodItemError::EmptyImageRef);
        }
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https" | "file") => Ok(ImageRef::Url(url)),
            _ => Ok(ImageRef::FilePath(PathBuf::from(s))),
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ImageRef::Url(u) => Some(u),
            ImageRef::FilePath(_) => None,
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ImageRef::FilePath(p) => Some(p.as_path()),
            ImageRef::Url(_) => None,
        }
    }

    /// Display form used by text front-ends.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            ImageRef::Url(u) => u.to_string(),
            ImageRef::FilePath(p) => p.display().to_string(),
        }
    }
}

//
// ─── FOOD ITEM ─────────────────────────────────────────────────────────────────
//

/// One entry of the vocabulary table: a picture and the English word for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    id: FoodId,
    display_name: String,
    image: ImageRef,
}

impl FoodItem {
    /// # Errors
    ///
    /// Returns `FoodItemError` when any field is blank.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        image: impl AsRef<str>,
    ) -> Result<Self, FoodItemError> {
        let id = FoodId::new(id).ok_or(FoodItemError::EmptyId)?;
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(FoodItemError::EmptyDisplayName);
        }
        let image = ImageRef::parse(image)?;

        Ok(Self {
            id,
            display_name,
            image,
        })
    }

    #[must_use]
    pub fn id(&self) -> &FoodId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_distinguishes_urls_and_paths() {
        let url = ImageRef::parse("https://example.com/corn.jpg").unwrap();
        assert_eq!(url.as_url().unwrap().host_str(), Some("example.com"));

        let path = ImageRef::parse("assets/corn.png").unwrap();
        assert_eq!(path.as_path(), Some(Path::new("assets/corn.png")));

        assert_eq!(ImageRef::parse("  "), Err(FoodItemError::EmptyImageRef));
    }

    #[test]
    fn food_item_rejects_blank_fields() {
        assert_eq!(
            FoodItem::new("", "Corn", "corn.png").unwrap_err(),
            FoodItemError::EmptyId
        );
        assert_eq!(
            FoodItem::new("corn", "  ", "corn.png").unwrap_err(),
            FoodItemError::EmptyDisplayName
        );
        assert_eq!(
            FoodItem::new("corn", "Corn", "").unwrap_err(),
            FoodItemError::EmptyImageRef
        );
    }

    #[test]
    fn display_name_is_trimmed() {
        let item = FoodItem::new("corn", " Corn ", "corn.png").unwrap();
        assert_eq!(item.display_name(), "Corn");
        assert_eq!(item.id().as_str(), "corn");
    }
}
