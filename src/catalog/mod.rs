//! Read-only star data: the validated catalog, its entities and the spectral
//! classification feeding styling and info-card portraits.

mod spectral;
mod star_catalog;
mod star_entity;

pub use spectral::{SpectralClass, StarStyle, classify};
pub use star_catalog::{CatalogError, StarCatalog};
pub use star_entity::StarEntity;
