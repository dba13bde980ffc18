//! Loader for the cleaned film dataset.
//!
//! The ingestion pipeline that produces the dataset lives outside this
//! repository; it exports one JSON array of film objects with genres already
//! parsed into a list. The loader re-applies the admission rules (positive
//! budget and revenue, a title, an overview) so a stale or hand-edited
//! export cannot smuggle unusable records into the catalog, then computes
//! the derived fields once.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, FilmRecord};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// One film object as exported by the ingestion pipeline.
///
/// Optional numeric fields default to zero; `release_date` stays optional
/// all the way into [`FilmRecord`].
#[derive(Debug, Deserialize)]
struct RawFilm {
    title: String,
    budget: f64,
    revenue: f64,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    vote_count: u32,
    #[serde(default)]
    runtime: u32,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
}

impl RawFilm {
    /// Admission rules for the catalog.
    fn is_admissible(&self) -> bool {
        self.budget > 0.0
            && self.revenue > 0.0
            && !self.title.trim().is_empty()
            && !self.overview.trim().is_empty()
    }

    fn into_record(self) -> FilmRecord {
        FilmRecord {
            title: self.title,
            budget: self.budget,
            revenue: self.revenue,
            overview: self.overview,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            runtime: self.runtime,
            release_date: self.release_date,
            genres: self.genres,
            roi: 0.0,
            is_successful: false,
        }
        .finalize()
    }
}

/// Load the catalog from a cleaned JSON dataset file.
///
/// Records failing the admission rules are dropped, not errors; an entirely
/// unusable document is [`CatalogError::Empty`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let raw: Vec<RawFilm> = serde_json::from_str(&contents)?;
    let total = raw.len();

    // Derived-field computation is load-time only; requests never touch it.
    let films: Vec<FilmRecord> = raw
        .into_par_iter()
        .filter(RawFilm::is_admissible)
        .map(RawFilm::into_record)
        .collect();

    if films.is_empty() {
        return Err(CatalogError::Empty);
    }

    info!(
        "Catalog loaded: {} films admitted, {} dropped",
        films.len(),
        total - films.len()
    );

    Ok(Catalog::new(films))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(name: &str, json: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("catalog-test-{}-{}.json", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loader_drops_records_with_nonpositive_financials() {
        let path = write_dataset(
            "admission",
            r#"[
                {"title": "Kept", "budget": 1000000.0, "revenue": 3000000.0,
                 "overview": "A film.", "vote_average": 6.5, "vote_count": 10,
                 "runtime": 100, "genres": ["Drama"]},
                {"title": "Zero Budget", "budget": 0.0, "revenue": 3000000.0,
                 "overview": "A film.", "vote_average": 6.5},
                {"title": "Zero Revenue", "budget": 1000000.0, "revenue": 0.0,
                 "overview": "A film.", "vote_average": 6.5}
            ]"#,
        );

        let catalog = load_catalog(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        let film = &catalog.films()[0];
        assert_eq!(film.title, "Kept");
        assert_eq!(film.roi, 2.0);
    }

    #[test]
    fn loader_rejects_entirely_unusable_documents() {
        let path = write_dataset("unusable", r#"[{"title": "", "budget": 0.0, "revenue": 0.0}]"#);
        let result = load_catalog(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn loader_surfaces_missing_file_as_io_error() {
        let result = load_catalog(Path::new("/nonexistent/films.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
