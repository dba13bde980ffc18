//! Core traits for the recommendation filtering pipeline.

use crate::recommend::RecommendationQuery;
use anyhow::Result;
use catalog::FilmRecord;

/// A predicate applied to catalog records during recommendation.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters borrow records from the shared catalog and return the surviving
/// subset; they never mutate the catalog. `Send + Sync` allows one pipeline
/// instance to serve concurrent requests.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidate records.
    ///
    /// # Arguments
    /// * `candidates` - The candidate records to filter (takes ownership of the Vec)
    /// * `query` - The request-derived comparison values
    ///
    /// # Returns
    /// * `Ok(Vec<&FilmRecord>)` - The surviving candidates, order preserved
    /// * `Err` - If filtering fails
    fn apply<'c>(
        &self,
        candidates: Vec<&'c FilmRecord>,
        query: &RecommendationQuery,
    ) -> Result<Vec<&'c FilmRecord>>;
}
