//! Personal wardrobe
//!
//! Items get a wardrobe-prefixed identifier and a timestamp when added.
//! The prefix is what lets a composed outfit report wardrobe provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::outfit::garment::{GarmentRecord, Slot, Source, WeatherBucket};
use crate::outfit::store::{filter_records, GarmentStore};
use crate::season::Season;
use crate::{AnalysisError, Result};

/// Slots a balanced wardrobe should hold at least this many of
const SLOT_MINIMUM: usize = 3;
/// Occasions and climates a balanced wardrobe should cover this many times
const COVERAGE_MINIMUM: usize = 2;
const BALANCED_OCCASIONS: [&str; 3] = ["formal", "casual", "sport"];

/// Item counts per tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeStatistics {
    pub total_items: usize,
    pub by_slot: BTreeMap<Slot, usize>,
    pub by_occasion: BTreeMap<String, usize>,
    pub by_climate: BTreeMap<WeatherBucket, usize>,
    pub by_color: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wardrobe {
    owner_id: String,
    id_prefix: String,
    created_at: DateTime<Utc>,
    items: Vec<GarmentRecord>,
}

impl Wardrobe {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self::with_id_prefix(owner_id, "item_")
    }

    /// Wardrobe whose item ids start with `id_prefix`
    ///
    /// Must match `OutfitConfig::wardrobe_id_prefix` for provenance to
    /// be reported.
    pub fn with_id_prefix(owner_id: impl Into<String>, id_prefix: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            id_prefix: id_prefix.into(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add a garment and return its new identifier
    ///
    /// Any id on `record` is replaced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGarment` when colors or occasions are empty.
    pub fn add_item(&mut self, mut record: GarmentRecord) -> Result<String> {
        record.validate()?;

        record.id = format!("{}{}", self.id_prefix, Uuid::new_v4().simple());
        record.source = Source::Wardrobe;
        record.owner_id = Some(self.owner_id.clone());
        record.added_at = Some(Utc::now());

        tracing::debug!(id = %record.id, slot = %record.slot, "added wardrobe item");
        let id = record.id.clone();
        self.items.push(record);
        Ok(id)
    }

    /// Edit an item in place
    ///
    /// Returns `Ok(false)` when no item has this id. The edit is discarded
    /// if it changes the slot, the id or breaks validation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGarment` for a rejected edit.
    pub fn update_item<F>(&mut self, id: &str, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut GarmentRecord),
    {
        let Some(existing) = self.items.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        let mut updated = existing.clone();
        edit(&mut updated);

        if updated.slot != existing.slot || updated.id != existing.id {
            return Err(AnalysisError::InvalidGarment {
                id: id.to_string(),
                reason: "slot and id cannot change".to_string(),
            });
        }
        updated.validate()?;

        *existing = updated;
        Ok(true)
    }

    /// Remove an item, returning whether it existed
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() < before
    }

    pub fn get(&self, id: &str) -> Option<&GarmentRecord> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn items(&self) -> &[GarmentRecord] {
        &self.items
    }

    pub fn statistics(&self) -> WardrobeStatistics {
        let mut stats = WardrobeStatistics {
            total_items: self.items.len(),
            ..WardrobeStatistics::default()
        };

        for item in &self.items {
            *stats.by_slot.entry(item.slot).or_default() += 1;
            for occasion in &item.occasions {
                *stats.by_occasion.entry(occasion.clone()).or_default() += 1;
            }
            for bucket in &item.climate_tags {
                *stats.by_climate.entry(*bucket).or_default() += 1;
            }
            for color in &item.colors {
                *stats.by_color.entry(color.clone()).or_default() += 1;
            }
        }
        stats
    }

    /// Gaps that keep the wardrobe from covering common requests
    pub fn suggest_missing_items(&self) -> Vec<String> {
        let stats = self.statistics();
        let mut suggestions = Vec::new();

        let basics: [(Slot, &str); 4] = [
            (Slot::Superior, "basic t-shirt, shirt, sweater"),
            (Slot::Inferior, "trousers, jeans"),
            (Slot::Footwear, "sneakers, formal shoes"),
            (Slot::Accessory, "bag, belt"),
        ];
        for (slot, examples) in basics {
            if stats.by_slot.get(&slot).copied().unwrap_or(0) < SLOT_MINIMUM {
                suggestions.push(format!(
                    "Consider adding more {} garments (e.g. {})",
                    slot, examples
                ));
            }
        }

        for occasion in BALANCED_OCCASIONS {
            if stats.by_occasion.get(occasion).copied().unwrap_or(0) < COVERAGE_MINIMUM {
                suggestions.push(format!("Missing options for {} occasions", occasion));
            }
        }

        for bucket in WeatherBucket::ALL {
            if stats.by_climate.get(bucket).copied().unwrap_or(0) < COVERAGE_MINIMUM {
                suggestions.push(format!("Add garments for {} weather", bucket));
            }
        }

        suggestions
    }
}

impl GarmentStore for Wardrobe {
    fn source(&self) -> Source {
        Source::Wardrobe
    }

    fn query(
        &self,
        slot: Slot,
        occasion: &str,
        bucket: WeatherBucket,
        season: Option<Season>,
    ) -> Vec<GarmentRecord> {
        filter_records(&self.items, slot, occasion, bucket, season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> GarmentRecord {
        GarmentRecord::new("", "White Cotton Shirt", Slot::Superior)
            .with_colors(&["white"])
            .with_occasions(&["formal", "casual"])
            .with_climate(&[WeatherBucket::Mild, WeatherBucket::Hot])
    }

    fn jeans() -> GarmentRecord {
        GarmentRecord::new("", "Dark Blue Jeans", Slot::Inferior)
            .with_colors(&["blue"])
            .with_occasions(&["casual"])
            .with_climate(&[WeatherBucket::Mild, WeatherBucket::Cold])
    }

    #[test]
    fn test_add_assigns_prefixed_id() {
        let mut wardrobe = Wardrobe::new("ana@example.com");
        let id = wardrobe.add_item(shirt()).unwrap();
        let other = wardrobe.add_item(shirt()).unwrap();

        assert!(id.starts_with("item_"));
        assert_ne!(id, other);

        let stored = wardrobe.get(&id).unwrap();
        assert_eq!(stored.source, Source::Wardrobe);
        assert_eq!(stored.owner_id.as_deref(), Some("ana@example.com"));
        assert!(stored.added_at.is_some());
    }

    #[test]
    fn test_invalid_item_is_rejected() {
        let mut wardrobe = Wardrobe::new("ana");
        let err = wardrobe
            .add_item(GarmentRecord::new("", "Mystery", Slot::Superior))
            .unwrap_err();
        assert!(err.is_recoverable());
        assert!(wardrobe.items().is_empty());
    }

    #[test]
    fn test_update_keeps_slot() {
        let mut wardrobe = Wardrobe::new("ana");
        let id = wardrobe.add_item(shirt()).unwrap();

        assert!(wardrobe
            .update_item(&id, |r| r.colors = vec!["ivory".to_string()])
            .unwrap());
        assert_eq!(wardrobe.get(&id).unwrap().colors, vec!["ivory"]);

        assert!(wardrobe.update_item(&id, |r| r.slot = Slot::Dress).is_err());
        assert!(wardrobe.update_item(&id, |r| r.occasions.clear()).is_err());
        assert_eq!(wardrobe.get(&id).unwrap().slot, Slot::Superior);
        assert!(!wardrobe.update_item("item_missing", |_| {}).unwrap());
    }

    #[test]
    fn test_remove_item() {
        let mut wardrobe = Wardrobe::new("ana");
        let id = wardrobe.add_item(jeans()).unwrap();
        assert!(wardrobe.remove_item(&id));
        assert!(!wardrobe.remove_item(&id));
        assert!(wardrobe.get(&id).is_none());
    }

    #[test]
    fn test_statistics_count_tags() {
        let mut wardrobe = Wardrobe::new("ana");
        wardrobe.add_item(shirt()).unwrap();
        wardrobe.add_item(jeans()).unwrap();

        let stats = wardrobe.statistics();
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.by_slot[&Slot::Superior], 1);
        assert_eq!(stats.by_occasion["casual"], 2);
        assert_eq!(stats.by_climate[&WeatherBucket::Mild], 2);
        assert_eq!(stats.by_color["blue"], 1);
    }

    #[test]
    fn test_suggestions_for_sparse_wardrobe() {
        let mut wardrobe = Wardrobe::new("ana");
        wardrobe.add_item(shirt()).unwrap();
        wardrobe.add_item(jeans()).unwrap();

        let suggestions = wardrobe.suggest_missing_items();
        assert!(suggestions.iter().any(|s| s.contains("superior garments")));
        assert!(suggestions.iter().any(|s| s == "Missing options for formal occasions"));
        assert!(suggestions.iter().any(|s| s == "Missing options for sport occasions"));
        assert!(!suggestions.iter().any(|s| s.contains("casual occasions")));
        assert!(!suggestions.iter().any(|s| s.contains("mild weather")));
        assert!(suggestions.iter().any(|s| s == "Add garments for cold weather"));
    }

    #[test]
    fn test_query_uses_tags() {
        let mut wardrobe = Wardrobe::new("ana");
        wardrobe.add_item(shirt()).unwrap();
        assert_eq!(
            wardrobe.query(Slot::Superior, "formal", WeatherBucket::Hot, None).len(),
            1
        );
        assert!(wardrobe
            .query(Slot::Superior, "sport", WeatherBucket::Hot, None)
            .is_empty());
    }
}
