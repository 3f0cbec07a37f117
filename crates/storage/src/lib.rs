#![forbid(unsafe_code)]

pub mod embedded;
pub mod repository;

pub use embedded::StaticCatalog;
pub use repository::{CatalogError, CatalogRepository};
