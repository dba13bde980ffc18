//! Filter to keep only films of comparable audience rating.

use crate::recommend::RecommendationQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::FilmRecord;

/// Half-width of the comparable-rating band on the 0-10 scale.
pub const RATING_BAND: f64 = 1.0;

/// Keeps records with `vote_average` inside `[r - 1.0, r + 1.0]` of the
/// request. The band is additive on the 0-10 scale; both bounds inclusive.
pub struct RatingBandFilter;

impl Filter for RatingBandFilter {
    fn name(&self) -> &str {
        "RatingBandFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c FilmRecord>,
        query: &RecommendationQuery,
    ) -> Result<Vec<&'c FilmRecord>> {
        let min = query.rating - RATING_BAND;
        let max = query.rating + RATING_BAND;

        let filtered = candidates
            .into_iter()
            .filter(|film| film.vote_average >= min && film.vote_average <= max)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::film;

    fn query(rating: f64) -> RecommendationQuery {
        RecommendationQuery {
            budget: 10_000_000.0,
            rating,
            genres: vec![],
        }
    }

    #[test]
    fn keeps_films_inside_the_band() {
        let close = film("Close", 1.0e7, 2.0e7, 7.4, &["Drama"]);
        let edge = film("Edge", 1.0e7, 2.0e7, 8.0, &["Drama"]);
        let far = film("Far", 1.0e7, 2.0e7, 9.2, &["Drama"]);

        let survivors = RatingBandFilter
            .apply(vec![&close, &edge, &far], &query(7.0))
            .unwrap();

        assert_eq!(survivors.len(), 2);
        assert!(survivors.iter().all(|f| f.title != "Far"));
    }

    #[test]
    fn low_rated_films_fall_outside() {
        let weak = film("Weak", 1.0e7, 2.0e7, 5.5, &["Drama"]);

        let survivors = RatingBandFilter.apply(vec![&weak], &query(7.0)).unwrap();
        assert!(survivors.is_empty());
    }
}
