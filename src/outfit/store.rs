//! Garment store seam
//!
//! The composer walks an ordered list of stores per slot. Each store
//! answers the same tag query; gender, weather and color handling happen
//! in the matcher.

use crate::outfit::garment::{GarmentRecord, Slot, Source, WeatherBucket};
use crate::season::Season;

/// A queryable collection of garments
pub trait GarmentStore {
    /// Provenance of the records this store returns
    fn source(&self) -> Source;

    /// Records of `slot` whose tags accept the occasion, bucket and season
    fn query(
        &self,
        slot: Slot,
        occasion: &str,
        bucket: WeatherBucket,
        season: Option<Season>,
    ) -> Vec<GarmentRecord>;
}

/// Tag filter shared by stores and the matcher
///
/// Occasion is compared case-insensitively. A record without season tags
/// accepts every season, and a `None` season skips the check.
pub fn matches_tags(
    record: &GarmentRecord,
    slot: Slot,
    occasion: &str,
    bucket: WeatherBucket,
    season: Option<Season>,
) -> bool {
    if record.slot != slot {
        return false;
    }
    let occasion = occasion.trim().to_lowercase();
    if !record.occasions.iter().any(|o| *o == occasion) {
        return false;
    }
    if !record.climate_tags.contains(&bucket) {
        return false;
    }
    match season {
        Some(season) if !record.season_tags.is_empty() => record.season_tags.contains(&season),
        _ => true,
    }
}

/// Copy out the records of `items` accepted by [`matches_tags`]
pub(crate) fn filter_records<'a>(
    items: impl IntoIterator<Item = &'a GarmentRecord>,
    slot: Slot,
    occasion: &str,
    bucket: WeatherBucket,
    season: Option<Season>,
) -> Vec<GarmentRecord> {
    items
        .into_iter()
        .filter(|r| matches_tags(r, slot, occasion, bucket, season))
        .cloned()
        .collect()
}
