//! Outfit Composer
//!
//! Resolves slots in a fixed order: the dress-or-separates decision,
//! then footwear, then accessory. Each slot walks the ordered source
//! chain and takes the best-ranked candidate of the first source that
//! yields one. Missing garment slots other than the accessory are filled
//! with placeholders afterwards, so every outfit is wearable.

use serde::{Deserialize, Serialize};

use crate::config::{OutfitConfig, PlaceholderGarment, PlaceholderSet};
use crate::outfit::constraint::OutfitConstraint;
use crate::outfit::garment::{GarmentRecord, Slot, Source};
use crate::outfit::matcher::GarmentMatcher;
use crate::outfit::store::GarmentStore;
use crate::season::category::categorical;

/// Occasion tag given to placeholders when the request names none
const FALLBACK_OCCASION: &str = "casual";

categorical! {
    /// Origin reported for a whole outfit
    Provenance {
        Wardrobe => "wardrobe",
        Catalog => "catalog",
    }
}

/// One garment per slot, copied out of the stores
///
/// Holds either a dress or separates, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedOutfit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress: Option<GarmentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superior: Option<GarmentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferior: Option<GarmentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footwear: Option<GarmentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<GarmentRecord>,
    pub provenance: Provenance,
}

impl ComposedOutfit {
    fn empty() -> Self {
        Self {
            dress: None,
            superior: None,
            inferior: None,
            footwear: None,
            accessory: None,
            provenance: Provenance::Catalog,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&GarmentRecord> {
        match slot {
            Slot::Dress => self.dress.as_ref(),
            Slot::Superior => self.superior.as_ref(),
            Slot::Inferior => self.inferior.as_ref(),
            Slot::Footwear => self.footwear.as_ref(),
            Slot::Accessory => self.accessory.as_ref(),
        }
    }

    /// Resolved garments in wearing order
    pub fn items(&self) -> Vec<&GarmentRecord> {
        [
            &self.dress,
            &self.superior,
            &self.inferior,
            &self.footwear,
            &self.accessory,
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether any slot holds a placeholder
    pub fn uses_placeholders(&self) -> bool {
        self.items().iter().any(|r| r.source == Source::Default)
    }

    /// Display names joined by " + ", e.g. "black dress + boots"
    pub fn summary(&self) -> String {
        self.items()
            .iter()
            .map(|r| r.display_name())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<GarmentRecord> {
        match slot {
            Slot::Dress => &mut self.dress,
            Slot::Superior => &mut self.superior,
            Slot::Inferior => &mut self.inferior,
            Slot::Footwear => &mut self.footwear,
            Slot::Accessory => &mut self.accessory,
        }
    }
}

pub struct OutfitComposer<'a> {
    config: &'a OutfitConfig,
    matcher: GarmentMatcher<'a>,
}

impl<'a> OutfitComposer<'a> {
    pub fn new(config: &'a OutfitConfig) -> Self {
        Self {
            config,
            matcher: GarmentMatcher::new(config),
        }
    }

    /// Compose an outfit from `sources`, tried in order per slot
    ///
    /// Never fails: an empty chain still yields a placeholder outfit.
    pub fn compose(
        &self,
        constraint: &OutfitConstraint,
        sources: &[&dyn GarmentStore],
    ) -> ComposedOutfit {
        let mut outfit = ComposedOutfit::empty();

        if self.dress_allowed(constraint) {
            outfit.dress = self.resolve(Slot::Dress, constraint, sources);
        }
        if outfit.dress.is_none() {
            outfit.superior = self.resolve(Slot::Superior, constraint, sources);
            outfit.inferior = self.resolve(Slot::Inferior, constraint, sources);
        }
        outfit.footwear = self.resolve(Slot::Footwear, constraint, sources);
        outfit.accessory = self.resolve(Slot::Accessory, constraint, sources);

        self.complete(&mut outfit, constraint);

        let prefix = self.config.wardrobe_id_prefix.as_str();
        outfit.provenance = if outfit.items().iter().any(|r| r.id.starts_with(prefix)) {
            Provenance::Wardrobe
        } else {
            Provenance::Catalog
        };

        tracing::info!(
            occasion = %constraint.occasion,
            provenance = %outfit.provenance,
            outfit = %outfit.summary(),
            "composed outfit"
        );
        outfit
    }

    fn dress_allowed(&self, constraint: &OutfitConstraint) -> bool {
        !constraint.exclusions.no_dress
            && self
                .config
                .dress_occasions
                .iter()
                .any(|o| o.eq_ignore_ascii_case(&constraint.occasion))
    }

    fn resolve(
        &self,
        slot: Slot,
        constraint: &OutfitConstraint,
        sources: &[&dyn GarmentStore],
    ) -> Option<GarmentRecord> {
        for store in sources {
            let candidates = store.query(
                slot,
                &constraint.occasion,
                constraint.weather_bucket,
                constraint.season,
            );
            if let Some(best) = self.matcher.rank(slot, constraint, candidates).into_iter().next() {
                tracing::debug!(slot = %slot, source = %store.source(), id = %best.id, "resolved slot");
                return Some(best);
            }
        }
        tracing::debug!(slot = %slot, "no candidate in any source");
        None
    }

    fn complete(&self, outfit: &mut ComposedOutfit, constraint: &OutfitConstraint) {
        let mut required = vec![Slot::Footwear];
        if outfit.dress.is_none() {
            required.splice(0..0, [Slot::Superior, Slot::Inferior]);
        }

        for slot in required {
            let entry = outfit.slot_mut(slot);
            if entry.is_none() {
                let placeholder = self.placeholder(slot, constraint);
                tracing::warn!(slot = %slot, name = %placeholder.name, "substituted placeholder");
                *entry = Some(placeholder);
            }
        }
    }

    fn placeholder(&self, slot: Slot, constraint: &OutfitConstraint) -> GarmentRecord {
        let names = &self.config.placeholders;
        let (preferred, other) = if constraint.prefers_masculine() {
            (&names.masculine, &names.feminine)
        } else {
            (&names.feminine, &names.masculine)
        };

        let garment = match slot {
            Slot::Inferior => {
                if self.inferior_excluded(&preferred.inferior, constraint)
                    && !self.inferior_excluded(&other.inferior, constraint)
                {
                    &other.inferior
                } else {
                    &preferred.inferior
                }
            }
            _ => placeholder_for(preferred, slot),
        };

        let occasion = match constraint.occasion.trim() {
            "" => FALLBACK_OCCASION,
            occasion => occasion,
        };

        GarmentRecord::new(format!("default_{}", slot), garment.name.clone(), slot)
            .with_short_name(garment.short_name.clone())
            .with_colors(&[garment.color.as_str()])
            .with_occasions(&[occasion])
            .with_climate(&[constraint.weather_bucket])
            .with_source(Source::Default)
    }

    fn inferior_excluded(&self, garment: &PlaceholderGarment, constraint: &OutfitConstraint) -> bool {
        let name = garment.name.to_lowercase();
        let hits = |keywords: &[String]| keywords.iter().any(|k| name.contains(&k.to_lowercase()));
        (constraint.exclusions.no_skirt && hits(&self.config.skirt_keywords))
            || (constraint.exclusions.no_pants && hits(&self.config.pants_keywords))
    }
}

fn placeholder_for(set: &PlaceholderSet, slot: Slot) -> &PlaceholderGarment {
    match slot {
        Slot::Inferior => &set.inferior,
        Slot::Footwear => &set.footwear,
        _ => &set.superior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outfit::catalog::Catalog;
    use crate::outfit::constraint::{ExclusionFlags, GenderHint, WeatherConditions};
    use crate::outfit::garment::WeatherBucket;
    use crate::outfit::wardrobe::Wardrobe;
    use crate::season::{PaletteBook, Season};

    fn compose(constraint: &OutfitConstraint, sources: &[&dyn GarmentStore]) -> ComposedOutfit {
        let config = OutfitConfig::default();
        OutfitComposer::new(&config).compose(constraint, sources)
    }

    fn id(outfit: &ComposedOutfit, slot: Slot) -> Option<&str> {
        outfit.get(slot).map(|r| r.id.as_str())
    }

    #[test]
    fn test_formal_mild_picks_dress_from_catalog() {
        let catalog = Catalog::standard();
        let constraint = OutfitConstraint::new("formal")
            .with_weather(WeatherConditions::new(20.0, 10).unwrap())
            .with_palette(PaletteBook::standard().get(Season::Winter));

        let outfit = compose(&constraint, &[&catalog]);
        assert_eq!(id(&outfit, Slot::Dress), Some("ves_001"));
        assert!(outfit.superior.is_none() && outfit.inferior.is_none());
        assert_eq!(id(&outfit, Slot::Footwear), Some("cal_002"));
        assert_eq!(id(&outfit, Slot::Accessory), Some("com_001"));
        assert_eq!(outfit.provenance, Provenance::Catalog);
        assert!(!outfit.uses_placeholders());
        assert_eq!(outfit.summary(), "black dress + heels + black handbag");
    }

    #[test]
    fn test_no_dress_uses_separates() {
        let catalog = Catalog::standard();
        let constraint = OutfitConstraint::new("casual")
            .with_weather(WeatherConditions::new(20.0, 0).unwrap())
            .with_exclusions(ExclusionFlags {
                no_dress: true,
                ..ExclusionFlags::default()
            });

        let outfit = compose(&constraint, &[&catalog]);
        assert!(outfit.dress.is_none());
        assert_eq!(id(&outfit, Slot::Superior), Some("sup_001"));
        assert_eq!(id(&outfit, Slot::Inferior), Some("inf_001"));
        assert_eq!(id(&outfit, Slot::Footwear), Some("cal_001"));
    }

    #[test]
    fn test_wardrobe_is_tried_first() {
        let catalog = Catalog::standard();
        let mut wardrobe = Wardrobe::new("ana");
        let dress_id = wardrobe
            .add_item(
                GarmentRecord::new("", "Red Wrap Dress", Slot::Dress)
                    .with_short_name("red dress")
                    .with_colors(&["red"])
                    .with_occasions(&["formal"])
                    .with_climate(&[WeatherBucket::Mild]),
            )
            .unwrap();

        let constraint = OutfitConstraint::new("formal").with_weather_bucket(WeatherBucket::Mild);
        let outfit = compose(&constraint, &[&wardrobe, &catalog]);

        assert_eq!(id(&outfit, Slot::Dress), Some(dress_id.as_str()));
        assert_eq!(outfit.footwear.as_ref().unwrap().source, Source::Catalog);
        assert_eq!(outfit.provenance, Provenance::Wardrobe);
    }

    #[test]
    fn test_empty_chain_gets_placeholders() {
        let constraint = OutfitConstraint::new("sport").with_weather_bucket(WeatherBucket::Cold);
        let outfit = compose(&constraint, &[]);

        assert_eq!(outfit.superior.as_ref().unwrap().name, "Basic Blouse");
        assert_eq!(outfit.inferior.as_ref().unwrap().name, "Black Skirt");
        assert_eq!(outfit.footwear.as_ref().unwrap().id, "default_footwear");
        assert!(outfit.accessory.is_none());
        assert!(outfit.uses_placeholders());
        assert_eq!(outfit.provenance, Provenance::Catalog);
        assert_eq!(outfit.superior.as_ref().unwrap().occasions, vec!["sport"]);
    }

    #[test]
    fn test_placeholders_without_occasion_stay_valid() {
        let outfit = compose(&OutfitConstraint::new(""), &[]);

        for item in outfit.items() {
            assert_eq!(item.occasions, vec!["casual"]);
            assert!(item.validate().is_ok());
        }
        assert!(outfit.footwear.is_some());
    }

    #[test]
    fn test_masculine_placeholders() {
        let constraint = OutfitConstraint::new("sport").with_gender(GenderHint::Masculine);
        let outfit = compose(&constraint, &[]);
        assert_eq!(outfit.summary(), "shirt + trousers + sneakers");
    }

    #[test]
    fn test_placeholder_respects_skirt_exclusion() {
        let constraint = OutfitConstraint::new("sport").with_exclusions(ExclusionFlags {
            no_skirt: true,
            ..ExclusionFlags::default()
        });
        let outfit = compose(&constraint, &[]);
        assert_eq!(outfit.inferior.as_ref().unwrap().name, "Black Trousers");
        assert_eq!(outfit.superior.as_ref().unwrap().name, "Basic Blouse");
    }

    #[test]
    fn test_dress_is_skipped_for_other_occasions() {
        let dress_only = Catalog::from_records(vec![GarmentRecord::new("d1", "Sport Dress", Slot::Dress)
            .with_colors(&["blue"])
            .with_occasions(&["sport"])
            .with_climate(&[WeatherBucket::Mild])])
        .unwrap();

        let constraint = OutfitConstraint::new("sport").with_weather_bucket(WeatherBucket::Mild);
        let outfit = compose(&constraint, &[&dress_only]);
        assert!(outfit.dress.is_none());
        assert!(outfit.superior.is_some() && outfit.inferior.is_some());
    }

    #[test]
    fn test_provenance_serializes_as_label() {
        let outfit = compose(&OutfitConstraint::new("casual"), &[&Catalog::standard()]);
        let json = serde_json::to_value(&outfit).unwrap();
        assert_eq!(json["provenance"], "catalog");
        let back: ComposedOutfit = serde_json::from_value(json).unwrap();
        assert_eq!(back, outfit);
    }
}
