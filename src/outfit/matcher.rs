//! Garment Matcher
//!
//! Ranks the candidates of one source for one slot. Filtering runs in a
//! fixed order:
//!
//! 1. tag filter (slot, occasion, weather bucket, season)
//! 2. skirt/pants exclusion on the inferior slot
//! 3. feminine-coded name exclusion on footwear and accessories under a
//!    masculine preference
//! 4. rain and cold overrides
//! 5. fit preference
//!
//! Steps 2 and 3 remove candidates outright. Steps 4 and 5 only narrow:
//! when nothing satisfies them the earlier set is kept. The survivors are
//! then sorted by color affinity, keeping candidate order among ties.

use crate::config::OutfitConfig;
use crate::outfit::constraint::OutfitConstraint;
use crate::outfit::garment::{GarmentRecord, Slot};
use crate::outfit::store::matches_tags;

pub struct GarmentMatcher<'a> {
    config: &'a OutfitConfig,
}

impl<'a> GarmentMatcher<'a> {
    pub fn new(config: &'a OutfitConfig) -> Self {
        Self { config }
    }

    /// Filter and rank `candidates` for `slot`, best first
    ///
    /// An empty result tells the caller to try its next source.
    pub fn rank(
        &self,
        slot: Slot,
        constraint: &OutfitConstraint,
        candidates: Vec<GarmentRecord>,
    ) -> Vec<GarmentRecord> {
        let mut filtered: Vec<GarmentRecord> = candidates
            .into_iter()
            .filter(|r| {
                matches_tags(
                    r,
                    slot,
                    &constraint.occasion,
                    constraint.weather_bucket,
                    constraint.season,
                )
            })
            .collect();

        if slot == Slot::Inferior {
            let exclusions = &constraint.exclusions;
            if exclusions.no_skirt {
                filtered.retain(|r| !r.name_contains_any(&self.config.skirt_keywords));
            }
            if exclusions.no_pants {
                filtered.retain(|r| !r.name_contains_any(&self.config.pants_keywords));
            }
        }

        if constraint.prefers_masculine() {
            if let Some(keywords) = self.feminine_keywords(slot) {
                let before = filtered.len();
                filtered.retain(|r| !r.name_contains_any(keywords));
                if filtered.len() < before {
                    tracing::debug!(
                        slot = %slot,
                        removed = before - filtered.len(),
                        "removed feminine-coded candidates"
                    );
                }
            }
        }

        match slot {
            Slot::Footwear if constraint.rain_probability > self.config.rain_threshold => {
                narrow(&mut filtered, |r| r.name_contains_any(&self.config.rain_keywords));
            }
            Slot::Accessory if constraint.temperature < self.config.cold_threshold => {
                narrow(&mut filtered, |r| r.name_contains_any(&self.config.cold_keywords));
            }
            _ => {}
        }

        if let Some(fit) = constraint.fit {
            narrow(&mut filtered, |r| r.fit == fit);
        }

        let mut scored: Vec<(f32, GarmentRecord)> = filtered
            .into_iter()
            .map(|r| (color_affinity(&r, &constraint.palette_keywords), r))
            .collect();
        // sort_by is stable, ties keep candidate order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored.into_iter().map(|(_, r)| r).collect()
    }

    fn feminine_keywords(&self, slot: Slot) -> Option<&[String]> {
        match slot {
            Slot::Footwear => Some(&self.config.feminine_keywords.footwear),
            Slot::Accessory => Some(&self.config.feminine_keywords.accessory),
            _ => None,
        }
    }
}

/// Keep only the records satisfying `keep`, unless none do
fn narrow<F>(records: &mut Vec<GarmentRecord>, keep: F)
where
    F: Fn(&GarmentRecord) -> bool,
{
    if records.iter().any(&keep) {
        records.retain(keep);
    }
}

/// Percentage of the record's color tags that contain a palette word
///
/// Palette keywords are split into lowercase words; a color tag counts
/// once when any word is a substring of it.
pub fn color_affinity(record: &GarmentRecord, palette_keywords: &[String]) -> f32 {
    let words: Vec<String> = palette_keywords
        .iter()
        .flat_map(|k| k.split_whitespace())
        .map(str::to_lowercase)
        .collect();

    let matches = record
        .colors
        .iter()
        .filter(|color| {
            let color = color.to_lowercase();
            words.iter().any(|w| color.contains(w.as_str()))
        })
        .count();

    matches as f32 / record.colors.len().max(1) as f32 * 100.0
}
