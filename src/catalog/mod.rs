// Catalog module: remote version/build listings and artifact downloads

pub mod client;
pub mod http;
pub mod model;

pub use client::{CatalogClient, PaperApiClient};
pub use model::{Build, BuildCatalog, Catalog, Version, VersionCatalog};
