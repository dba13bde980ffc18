//! # Prediction Orchestrator
//!
//! This module coordinates the entire prediction pipeline for one request:
//! 1. Validate the request
//! 2. Synthesize a placeholder overview for the text channel
//! 3. Build the fused feature vector
//! 4. Run the signal stack (fitted model + synthetic signals)
//! 5. Aggregate the ensemble decision
//! 6. Rank comparable films from the catalog
//! 7. Assemble the combined report
//!
//! The catalog and fitted artifacts are loaded once at startup and shared
//! read-only; the random generator is the only mutable shared state and
//! sits behind a mutex.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use artifacts::ArtifactSet;
use catalog::{Catalog, FilmRecord};
use pipeline::recommend::format_millions;
use pipeline::{
    aggregate, EnsembleOutcome, FeatureBuilder, PredictError, PredictionOutcome,
    PredictionRequest, RecommendationEngine, RecommendationItem, RecommendationQuery, SignalStack,
    synthesizer,
};

/// Echo of the request alongside the synthesized overview.
#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub budget: String,
    pub rating: f64,
    pub genre: String,
    pub generated_overview: String,
}

/// The combined response for one prediction request.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub models: Vec<PredictionOutcome>,
    pub ensemble: EnsembleOutcome,
    pub recommended_films: Vec<RecommendationItem>,
    pub input_summary: InputSummary,
}

/// Service health snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub models: Vec<String>,
}

/// Full projection of one catalog record for the lookup endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FilmDetail {
    pub title: String,
    pub overview: String,
    pub budget: f64,
    pub revenue: f64,
    pub roi: f64,
    /// Gross return as a multiplier, e.g. roi 8.33 renders as "9.33x"
    pub roi_multiplier: String,
    /// Capped at 999% for display
    pub roi_percentage: String,
    pub vote_average: f64,
    pub vote_count: u32,
    pub release_date: String,
    pub runtime: u32,
    pub genres: Vec<String>,
    pub success: &'static str,
    pub success_rate: String,
}

impl FilmDetail {
    fn from_record(film: &FilmRecord) -> Self {
        let multiplier = format!("{:.2}x", film.roi + 1.0);
        Self {
            title: film.title.clone(),
            overview: if film.overview.is_empty() {
                "No overview available".to_string()
            } else {
                film.overview.clone()
            },
            budget: film.budget,
            revenue: film.revenue,
            roi: film.roi,
            roi_multiplier: multiplier.clone(),
            roi_percentage: format!("{:.0}%", (film.roi * 100.0).min(999.0)),
            vote_average: film.vote_average,
            vote_count: film.vote_count,
            release_date: film
                .release_date
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            runtime: film.runtime,
            genres: film.genres.clone(),
            success: if film.is_successful {
                "Successful"
            } else {
                "Not Successful"
            },
            success_rate: multiplier,
        }
    }
}

/// Main service that coordinates the prediction pipeline.
///
/// One instance serves all in-flight requests; everything it holds except
/// the random generator is immutable after construction.
pub struct PredictionService {
    catalog: Arc<Catalog>,
    feature_builder: FeatureBuilder,
    signals: SignalStack,
    recommender: RecommendationEngine,
    rng: Mutex<StdRng>,
}

impl PredictionService {
    /// Create a service with an OS-seeded generator.
    pub fn new(catalog: Arc<Catalog>, artifacts: Arc<ArtifactSet>) -> Self {
        Self::with_rng(catalog, artifacts, StdRng::from_os_rng())
    }

    /// Create a service with a caller-supplied generator.
    ///
    /// Tests and reproducible CLI runs pass `StdRng::seed_from_u64(..)`.
    pub fn with_rng(catalog: Arc<Catalog>, artifacts: Arc<ArtifactSet>, rng: StdRng) -> Self {
        Self {
            catalog: catalog.clone(),
            feature_builder: FeatureBuilder::new(artifacts.clone()),
            signals: SignalStack::new(artifacts),
            recommender: RecommendationEngine::new(catalog),
            rng: Mutex::new(rng),
        }
    }

    /// Main entry point: evaluate one hypothetical film.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionReport, PredictError> {
        let start_time = Instant::now();
        request.validate()?;

        // The generator is shared across requests; hold the lock for the
        // whole drawing phase so one request's draws stay contiguous.
        let (overview, outcomes) = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let overview = synthesizer::synthesize(&request.genre, &mut *rng);
            let features = self.feature_builder.build(request, overview)?;
            let outcomes = self.signals.run(&features, &mut *rng)?;
            (overview, outcomes)
        };

        let ensemble = aggregate(&outcomes)?;

        let query = RecommendationQuery::from_request(request);
        let recommended_films = self.recommender.recommend(&query)?;

        info!(
            "Prediction served in {:.2?}: {} vote(s) successful, {} comparable film(s)",
            start_time.elapsed(),
            ensemble.votes.successful,
            recommended_films.len()
        );

        Ok(PredictionReport {
            models: outcomes,
            ensemble,
            recommended_films,
            input_summary: InputSummary {
                budget: format_millions(request.budget),
                rating: request.rating,
                genre: request.genre.clone(),
                generated_overview: overview.to_string(),
            },
        })
    }

    /// Health snapshot; always succeeds once startup completed.
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            models: self.signals.model_names(),
        }
    }

    /// Look up one catalog record by title, case-insensitive.
    ///
    /// `None` is the normal miss outcome the API maps to 404.
    pub fn lookup_film(&self, title: &str) -> Option<FilmDetail> {
        self.catalog.find_by_title(title).map(FilmDetail::from_record)
    }

    /// Number of films in the catalog.
    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }
}
