pub mod bridge;
pub mod deezer;
pub mod error;
pub mod models;

pub use deezer::*;
pub use error::CatalogError;
pub use models::*;
