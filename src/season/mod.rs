//! Seasonal classification module
//!
//! This module turns extractor readings into a season label, derived
//! contrast and saturation levels, and the matching palette.

pub mod category;
pub mod classifier;
pub mod palette;
pub mod profile;

pub use category::{EyeColor, HairColor, Level, Season, SkinUndertone};
pub use classifier::{
    classify_season, contrast_level, saturation_level, warmth_score, SeasonClassifier,
};
pub use palette::{Palette, PaletteBook};
pub use profile::AppearanceProfile;
