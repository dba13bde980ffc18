//! # Pipeline Crate
//!
//! The success-prediction pipeline for hypothetical films.
//!
//! ## Main Components
//!
//! - **request**: [`PredictionRequest`] and its validation
//! - **synthesizer**: placeholder overview text per genre
//! - **features**: fuse numeric attributes and vectorized text into the
//!   classifier's fixed-layout row
//! - **signals**: the fitted classifier plus two clearly-labeled synthetic
//!   signals derived from it
//! - **ensemble**: majority vote and probability averaging over the stack
//! - **filters** / **filter_pipeline** / **recommend**: comparable-film
//!   recommendation over the historical catalog
//! - **error**: the per-request error taxonomy
//!
//! ## Control flow
//!
//! ```text
//! request --> synthesizer --> features --> signals --> ensemble
//!        \
//!         --> recommend (reads the catalog)
//! ```
//!
//! Both branches are pure in-memory computation; the only mutable shared
//! resource is the random generator the caller injects.

// Public modules
pub mod ensemble;
pub mod error;
pub mod features;
pub mod filter_pipeline;
pub mod filters;
pub mod recommend;
pub mod request;
pub mod signals;
pub mod synthesizer;
pub mod traits;

// Re-export commonly used types for convenience
pub use ensemble::{EnsembleOutcome, VoteCount, aggregate, ENSEMBLE_SIZE};
pub use error::{PredictError, Result};
pub use features::{FeatureBuilder, FeatureVector, NUMERIC_FEATURE_COUNT};
pub use filter_pipeline::FilterPipeline;
pub use recommend::{
    RecommendationEngine, RecommendationItem, RecommendationQuery, MAX_RECOMMENDATIONS,
};
pub use request::PredictionRequest;
pub use signals::{
    PredictionOutcome, SignalStack, SuccessLabel, SyntheticSignalModel, FITTED_MODEL_NAME,
};
pub use traits::Filter;
