//! Per-item responses to raw subscale sums.

use tetrad_core::models::response::ResponseSet;
use tetrad_core::models::scores::RawScores;

use crate::error::ScoringError;

/// Sum each scale's answered values into the four raw subscale totals.
///
/// Requires an answer for every catalog item; an incomplete set fails with
/// the absent ids (in presentation order) rather than silently summing
/// around the holes.
pub fn raw_scores(responses: &ResponseSet) -> Result<RawScores, ScoringError> {
    let missing = tetrad_inventory::missing_item_ids(responses);
    if !missing.is_empty() {
        return Err(ScoringError::MissingResponse {
            missing: missing.iter().map(|id| (*id).to_owned()).collect(),
        });
    }

    Ok(RawScores::from_fn(|scale| {
        tetrad_inventory::items_for(scale)
            .filter_map(|item| responses.get(&item.id))
            .map(u32::from)
            .sum()
    }))
}
