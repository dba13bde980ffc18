//! Filter to keep only films sharing a genre with the request.

use crate::recommend::RecommendationQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::FilmRecord;

/// Keeps records whose genre set intersects the request's genre list.
///
/// Matching is exact string equality on the trimmed genre names; a record
/// with no overlap is excluded. A request genre absent from the whole
/// catalog simply yields zero survivors.
pub struct GenreOverlapFilter;

impl Filter for GenreOverlapFilter {
    fn name(&self) -> &str {
        "GenreOverlapFilter"
    }

    fn apply<'c>(
        &self,
        candidates: Vec<&'c FilmRecord>,
        query: &RecommendationQuery,
    ) -> Result<Vec<&'c FilmRecord>> {
        let filtered = candidates
            .into_iter()
            .filter(|film| {
                query
                    .genres
                    .iter()
                    .any(|wanted| film.genres.iter().any(|g| g == wanted))
            })
            .collect();
        Ok(filtered)
    }
}
