//! # Season Wardrobe
//!
//! A Rust crate for seasonal color analysis of portraits and outfit
//! composition from a personal wardrobe and a shared catalog.
//!
//! This library provides:
//! - Illumination normalization of the portrait before measurement
//! - Skin, eye and hair color extraction from a located face
//! - Classification into one of four seasonal palettes
//! - Outfit composition under occasion, weather and exclusion constraints,
//!   ranked by affinity with the palette
//!
//! Face detection is not part of the crate: callers supply boxes through
//! the [`FaceLocator`] trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use season_wardrobe::{analyze_portrait, compose_outfit, Catalog, FixedRegions, OutfitConstraint, Region};
//! use std::path::Path;
//!
//! let locator = FixedRegions::new(vec![Region::new(120, 160, 240, 240)], vec![]);
//! let profile = analyze_portrait(Path::new("portrait.jpg"), &locator)?;
//! println!("Season: {} ({:.2})", profile.season, profile.confidence);
//!
//! let constraint = OutfitConstraint::for_profile("casual", &profile);
//! let outfit = compose_outfit(&constraint, &Catalog::standard());
//! println!("{}", outfit.summary());
//! # Ok::<(), season_wardrobe::AnalysisError>(())
//! ```

use std::path::Path;

pub mod analyzer;
pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod features;
pub mod image_loader;
pub mod outfit;
pub mod season;

pub use analyzer::ColorimetryAnalyzer;
pub use config::{OutfitConfig, StylistConfig};
pub use detection::{FaceLocator, FixedRegions, Region};
pub use error::{AnalysisError, Result};
pub use outfit::{
    Catalog, ComposedOutfit, GarmentRecord, GarmentStore, OutfitComposer, OutfitConstraint,
    Provenance, Slot, Wardrobe,
};
pub use season::{AppearanceProfile, Palette, PaletteBook, Season};

/// Analyze a portrait file with the default configuration and palettes
///
/// This is the main entry point for appearance analysis. A portrait in
/// which `locator` finds no face yields the default profile
/// (`is_default`, confidence 0.50) instead of an error.
///
/// # Errors
///
/// Returns `ImageLoadError` if the file cannot be read or decoded.
pub fn analyze_portrait(path: &Path, locator: &dyn FaceLocator) -> Result<AppearanceProfile> {
    ColorimetryAnalyzer::default().analyze_path(path, locator)
}

/// Compose an outfit from a single store with the default configuration
pub fn compose_outfit(constraint: &OutfitConstraint, store: &dyn GarmentStore) -> ComposedOutfit {
    let config = OutfitConfig::default();
    OutfitComposer::new(&config).compose(constraint, &[store])
}
