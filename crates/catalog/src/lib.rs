//! Genre and movie catalogs.
//!
//! The catalogs hold the referential rules between genres and the
//! denormalized genre-name lists stored on movies. They talk to storage only
//! through [`store::GenreStore`] and [`store::MovieStore`], so a different
//! schema (for example a movie/genre join table) can sit behind the same
//! contracts.

pub mod error;
pub mod genre;
pub mod movie;
pub mod store;

#[cfg(test)]
mod memory;

pub use error::{CatalogError, CatalogResult};
pub use genre::GenreCatalog;
pub use movie::MovieCatalog;
pub use store::PgStore;
