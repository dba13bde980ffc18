//! # Catalog Crate
//!
//! This crate owns the immutable, process-wide collection of historical
//! film records used for recommendation and lookup.
//!
//! ## Main Components
//!
//! - **types**: [`FilmRecord`] with derived financial fields, [`Catalog`]
//! - **loader**: Load the cleaned JSON dataset exported by the ingestion pipeline
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_catalog;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("data/films.json"))?;
//! println!("{} films admitted", catalog.len());
//!
//! if let Some(film) = catalog.find_by_title("alien") {
//!     println!("{}: roi {:.2}", film.title, film.roi);
//! }
//! ```
//!
//! The catalog is built once at startup and shared via `Arc`; nothing
//! mutates it afterwards, so reads need no locking.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::load_catalog;
pub use types::{Catalog, FilmRecord, SUCCESS_ROI_THRESHOLD};
