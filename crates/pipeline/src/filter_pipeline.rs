//! The FilterPipeline chains the recommendation predicates.
//!
//! Predicate order does not change the surviving set, only how much work
//! later filters see, so cheaper filters go first.

use crate::recommend::RecommendationQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::FilmRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreOverlapFilter)
///     .add_filter(BudgetBandFilter)
///     .add_filter(RatingBandFilter);
///
/// let survivors = pipeline.apply(candidates, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    pub fn apply<'c>(
        &self,
        candidates: Vec<&'c FilmRecord>,
        query: &RecommendationQuery,
    ) -> Result<Vec<&'c FilmRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
