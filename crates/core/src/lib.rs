#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{Catalog, CatalogError, default_catalog};
pub use time::Clock;
