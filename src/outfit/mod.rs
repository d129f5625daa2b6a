//! Outfit composition module
//!
//! Garment data model, the wardrobe and catalog stores, and the matcher
//! and composer that turn an [`OutfitConstraint`] into a
//! [`ComposedOutfit`].

pub mod catalog;
pub mod composer;
pub mod constraint;
pub mod garment;
pub mod matcher;
pub mod store;
pub mod wardrobe;

pub use catalog::Catalog;
pub use composer::{ComposedOutfit, OutfitComposer, Provenance};
pub use constraint::{ExclusionFlags, GenderHint, OutfitConstraint, WeatherConditions};
pub use garment::{Fit, GarmentRecord, Slot, Source, WeatherBucket};
pub use matcher::{color_affinity, GarmentMatcher};
pub use store::{matches_tags, GarmentStore};
pub use wardrobe::{Wardrobe, WardrobeStatistics};
