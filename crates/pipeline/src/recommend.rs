//! Recommendation engine: comparable historical films for a request.
//!
//! Filters the catalog down to films with overlapping genres, comparable
//! budget and comparable rating, then ranks the survivors by return on
//! investment and keeps the best few as evidence for the prediction.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{BudgetBandFilter, GenreOverlapFilter, RatingBandFilter};
use crate::request::PredictionRequest;
use anyhow::Result;
use catalog::{Catalog, FilmRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of recommended films per request.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Request-derived values the filters compare against.
#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub budget: f64,
    pub rating: f64,
    /// Parsed, trimmed genre names from the request
    pub genres: Vec<String>,
}

impl RecommendationQuery {
    pub fn from_request(request: &PredictionRequest) -> Self {
        Self {
            budget: request.budget,
            rating: request.rating,
            genres: request.genre_list(),
        }
    }
}

/// One comparable film projected for display.
///
/// Carries both the raw numeric values and their display-formatted copies;
/// the source record is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationItem {
    pub title: String,
    pub budget: f64,
    pub revenue: f64,
    pub roi: f64,
    pub rating: f64,
    pub success: bool,
    pub budget_display: String,
    pub revenue_display: String,
    pub roi_display: String,
    pub rating_display: String,
    pub success_display: &'static str,
}

impl RecommendationItem {
    fn from_record(film: &FilmRecord) -> Self {
        Self {
            title: film.title.clone(),
            budget: film.budget,
            revenue: film.revenue,
            roi: film.roi,
            rating: film.vote_average,
            success: film.is_successful,
            budget_display: format_millions(film.budget),
            revenue_display: format_millions(film.revenue),
            roi_display: format!("{:.2}x", film.roi),
            rating_display: format!("{:.1}", film.vote_average),
            success_display: if film.is_successful {
                "Successful"
            } else {
                "Not Successful"
            },
        }
    }
}

/// Currency amounts render in millions, e.g. `"$12.0M"`.
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1e6)
}

/// Ranks comparable catalog films for prediction requests.
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    pipeline: Arc<FilterPipeline>,
}

impl RecommendationEngine {
    /// Create an engine over the shared catalog with the standard three
    /// predicates: genre overlap, budget band, rating band.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let pipeline = Arc::new(
            FilterPipeline::new()
                .add_filter(GenreOverlapFilter)
                .add_filter(BudgetBandFilter)
                .add_filter(RatingBandFilter),
        );
        Self { catalog, pipeline }
    }

    /// Comparable films for one query, best return on investment first.
    ///
    /// Survivors are sorted by `roi` descending; ties keep catalog order so
    /// repeated calls return identical results. At most
    /// [`MAX_RECOMMENDATIONS`] items come back, and an empty result is a
    /// valid outcome, not an error.
    pub fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<RecommendationItem>> {
        let candidates: Vec<&FilmRecord> = self.catalog.films().iter().collect();
        let mut survivors = self.pipeline.apply(candidates, query)?;

        // Stable sort: equal roi keeps catalog insertion order
        survivors.sort_by(|a, b| b.roi.partial_cmp(&a.roi).unwrap_or(std::cmp::Ordering::Equal));
        survivors.truncate(MAX_RECOMMENDATIONS);

        debug!(
            "Recommendation ranking kept {} of {} catalog films",
            survivors.len(),
            self.catalog.len()
        );

        Ok(survivors
            .into_iter()
            .map(RecommendationItem::from_record)
            .collect())
    }
}
