//! Filter to keep only films of comparable budget.

use crate::recommend::RecommendationQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::FilmRecord;

/// Lower multiplier of the comparable-budget band.
pub const BUDGET_BAND_LOWER: f64 = 0.5;
/// Upper multiplier of the comparable-budget band.
pub const BUDGET_BAND_UPPER: f64 = 2.0;

/// Keeps records with `budget` inside `[0.5 * b, 2.0 * b]` of the request.
///
/// The band is multiplicative, so the filter behaves the same for a
/// 500k short and a 200M tentpole. Both bounds are inclusive.
pub struct BudgetBandFilter;

impl Filter for BudgetBandFilter {
    fn name(&self) -> &str {
        "BudgetBandFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c FilmRecord>,
        query: &RecommendationQuery,
    ) -> Result<Vec<&'c FilmRecord>> {
        let min = query.budget * BUDGET_BAND_LOWER;
        let max = query.budget * BUDGET_BAND_UPPER;

        let filtered = candidates
            .into_iter()
            .filter(|film| film.budget >= min && film.budget <= max)
            .collect();
        Ok(filtered)
    }
}
