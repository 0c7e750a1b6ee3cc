//! Core module - catalog model, loader, and selection engine

pub mod catalog;
pub mod loader;
pub mod schema;
pub mod select;

pub use catalog::{Catalog, HoseRecord};
pub use loader::{CatalogError, Delimiter};
pub use schema::Column;
pub use select::{select, ConstraintSet, QueryResult};
