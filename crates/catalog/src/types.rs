//! Core domain types for the historical film catalog.

use serde::Serialize;
use std::collections::HashMap;

/// Threshold on return-on-investment above which a film counts as successful.
pub const SUCCESS_ROI_THRESHOLD: f64 = 1.0;

/// One historical film with its derived financial fields.
///
/// `roi` and `is_successful` are computed exactly once when the record is
/// admitted into the [`Catalog`] and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct FilmRecord {
    pub title: String,
    /// Production budget in currency units; always > 0 for admitted records
    pub budget: f64,
    /// Worldwide revenue in currency units; always > 0 for admitted records
    pub revenue: f64,
    pub overview: String,
    /// Audience rating on a 0-10 scale
    pub vote_average: f64,
    pub vote_count: u32,
    /// Runtime in minutes
    pub runtime: u32,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    /// `(revenue - budget) / budget`; may be negative
    pub roi: f64,
    /// `roi > 1.0`
    pub is_successful: bool,
}

impl FilmRecord {
    /// Compute the derived fields for a record whose raw fields are set.
    ///
    /// Callers must have already verified `budget > 0`.
    pub(crate) fn finalize(mut self) -> Self {
        self.roi = (self.revenue - self.budget) / self.budget;
        self.is_successful = self.roi > SUCCESS_ROI_THRESHOLD;
        self
    }
}

/// The immutable in-memory collection of historical films.
///
/// Built once at startup and shared read-only for the process lifetime.
/// Records keep their insertion order; the title index maps each
/// lowercased title to the first record that carries it.
#[derive(Debug)]
pub struct Catalog {
    films: Vec<FilmRecord>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-admitted records.
    pub fn new(films: Vec<FilmRecord>) -> Self {
        let mut title_index = HashMap::with_capacity(films.len());
        for (idx, film) in films.iter().enumerate() {
            // First occurrence wins for duplicate titles
            title_index
                .entry(film.title.to_lowercase())
                .or_insert(idx);
        }
        Self { films, title_index }
    }

    /// All records in insertion order.
    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Case-insensitive exact title match.
    ///
    /// When several records share a title, the first one in catalog order is
    /// returned. A miss is a normal outcome, not an error.
    pub fn find_by_title(&self, title: &str) -> Option<&FilmRecord> {
        self.title_index
            .get(&title.to_lowercase())
            .map(|&idx| &self.films[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, budget: f64, revenue: f64) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            budget,
            revenue,
            overview: "An overview.".to_string(),
            vote_average: 7.0,
            vote_count: 100,
            runtime: 110,
            release_date: None,
            genres: vec!["Drama".to_string()],
            roi: 0.0,
            is_successful: false,
        }
        .finalize()
    }

    #[test]
    fn derived_fields_are_computed_once() {
        // budget 40M, revenue 400M => roi 9.0, successful
        let film = record("Big Hit", 40_000_000.0, 400_000_000.0);
        assert_eq!(film.roi, 9.0);
        assert!(film.is_successful);
    }

    #[test]
    fn roi_may_be_negative_for_flops() {
        let film = record("Flop", 100_000_000.0, 25_000_000.0);
        assert_eq!(film.roi, -0.75);
        assert!(!film.is_successful);
    }

    #[test]
    fn roi_exactly_at_threshold_is_not_successful() {
        // roi == 1.0 must not count as successful (strict inequality)
        let film = record("Break Even Twice", 50_000_000.0, 100_000_000.0);
        assert_eq!(film.roi, 1.0);
        assert!(!film.is_successful);
    }

    #[test]
    fn find_by_title_is_case_insensitive() {
        let catalog = Catalog::new(vec![
            record("The Matrix", 63_000_000.0, 463_517_383.0),
            record("Alien", 11_000_000.0, 104_931_801.0),
        ]);

        assert!(catalog.find_by_title("the matrix").is_some());
        assert!(catalog.find_by_title("ALIEN").is_some());
        assert!(catalog.find_by_title("Blade Runner").is_none());
    }

    #[test]
    fn duplicate_titles_resolve_to_first_in_catalog_order() {
        let catalog = Catalog::new(vec![
            record("Remake", 10_000_000.0, 20_000_000.0),
            record("Remake", 90_000_000.0, 95_000_000.0),
        ]);

        let found = catalog.find_by_title("remake").unwrap();
        assert_eq!(found.budget, 10_000_000.0, "first record should win");
    }
}
