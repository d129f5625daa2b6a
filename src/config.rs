//! Configuration structures for the season_wardrobe pipeline.
//!
//! This module defines all tunable parameters for appearance analysis
//! and outfit composition, organized into logical groups.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use season_wardrobe::StylistConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = StylistConfig::from_json_file(Path::new("stylist.json"))?;
//!
//! // Or use defaults
//! let config = StylistConfig::default();
//! # Ok::<(), season_wardrobe::AnalysisError>(())
//! ```
//!
//! Every section is optional in JSON; missing sections and fields take
//! their defaults.
//!
//! # Configuration Sections
//!
//! - [`IlluminationConfig`]: lightness normalization before extraction
//! - [`ExtractionConfig`]: pixel filters of the skin, eye and hair extractors
//! - [`OutfitConfig`]: weather overrides, exclusion keywords, placeholders

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{eye, hair, illumination, skin, weather};
use crate::{AnalysisError, Result};

/// Complete configuration for analysis and outfit composition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StylistConfig {
    /// Illumination normalization
    pub illumination: IlluminationConfig,

    /// Region feature extraction
    pub extraction: ExtractionConfig,

    /// Garment matching and outfit composition
    pub outfit: OutfitConfig,
}

/// Lightness normalization applied before feature extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IlluminationConfig {
    /// Apply normalization; when false the image passes through untouched
    pub enabled: bool,

    /// Histogram clip limit relative to a uniform histogram
    pub clip_limit: f32,

    /// Tiles per image axis
    pub tile_grid: u32,
}

impl Default for IlluminationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clip_limit: illumination::CLIP_LIMIT,
            tile_grid: illumination::TILE_GRID,
        }
    }
}

/// Pixel filters of the region feature extractors.
///
/// Values use the 8-bit channel scales described in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Exclusive lightness bounds for skin pixels
    pub skin_lightness: Bounds<f32>,

    /// Exclusive value bounds for iris pixels
    pub eye_value: Bounds<u16>,

    /// Minimum valid iris pixels before clustering
    pub eye_min_pixels: usize,

    /// Inclusive HSV box treated as skin inside the hair band
    pub hair_skin_mask: HsvRange,

    /// Hair pixels must have value strictly above this
    pub hair_min_value: u16,

    /// Minimum hair pixels before clustering
    pub hair_min_pixels: usize,
}

/// Exclusive `(min, max)` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Bounds<T> {
    /// Whether `value` lies strictly between the bounds
    pub fn contains_exclusive(&self, value: T) -> bool {
        value > self.min && value < self.max
    }
}

/// Inclusive HSV box on the 8-bit scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvRange {
    pub low: [u16; 3],
    pub high: [u16; 3],
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skin_lightness: Bounds {
                min: skin::MIN_LIGHTNESS,
                max: skin::MAX_LIGHTNESS,
            },
            eye_value: Bounds {
                min: eye::MIN_VALUE,
                max: eye::MAX_VALUE,
            },
            eye_min_pixels: eye::MIN_PIXELS,
            hair_skin_mask: HsvRange {
                low: hair::SKIN_MASK_LOW,
                high: hair::SKIN_MASK_HIGH,
            },
            hair_min_value: hair::MIN_VALUE,
            hair_min_pixels: hair::MIN_PIXELS,
        }
    }
}

/// Garment matching and outfit composition parameters.
///
/// Keyword lists are matched as lowercase substrings of garment names.
/// They are plain data so they can be localized without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitConfig {
    /// Rain probability (percent) above which footwear is restricted to `rain_keywords`
    pub rain_threshold: u8,

    /// Temperature (Celsius) below which accessories are restricted to `cold_keywords`
    pub cold_threshold: f32,

    /// Footwear names preferred when rain is likely
    pub rain_keywords: Vec<String>,

    /// Accessory names preferred when it is cold
    pub cold_keywords: Vec<String>,

    /// Stereotypically feminine names removed under a masculine preference
    pub feminine_keywords: FeminineKeywords,

    /// Inferior names removed when skirts are excluded
    pub skirt_keywords: Vec<String>,

    /// Inferior names removed when pants are excluded
    pub pants_keywords: Vec<String>,

    /// Occasions for which a dress is tried before separates
    pub dress_occasions: Vec<String>,

    /// Identifier prefix assigned to personal wardrobe items
    pub wardrobe_id_prefix: String,

    /// Names used when a required slot cannot be resolved
    pub placeholders: PlaceholderNames,
}

/// Feminine-coded keywords per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeminineKeywords {
    pub footwear: Vec<String>,
    pub accessory: Vec<String>,
}

/// Placeholder garments for both presentation preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderNames {
    pub feminine: PlaceholderSet,
    pub masculine: PlaceholderSet,
}

/// Placeholder garment per required slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderSet {
    pub superior: PlaceholderGarment,
    pub inferior: PlaceholderGarment,
    pub footwear: PlaceholderGarment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderGarment {
    pub name: String,
    pub short_name: String,
    pub color: String,
}

impl PlaceholderGarment {
    fn new(name: &str, short_name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            color: color.to_string(),
        }
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for FeminineKeywords {
    fn default() -> Self {
        Self {
            footwear: strings(&["heel", "stiletto", "espadrille"]),
            accessory: strings(&[
                "handbag", "purse", "clutch", "tote bag", "necklace", "earring", "headband",
                "hairpin", "hair clip", "scrunchie",
            ]),
        }
    }
}

impl Default for PlaceholderSet {
    fn default() -> Self {
        PlaceholderNames::default().feminine
    }
}

impl Default for PlaceholderNames {
    fn default() -> Self {
        Self {
            feminine: PlaceholderSet {
                superior: PlaceholderGarment::new("Basic Blouse", "blouse", "white"),
                inferior: PlaceholderGarment::new("Black Skirt", "skirt", "black"),
                footwear: PlaceholderGarment::new("Heels", "heels", "black"),
            },
            masculine: PlaceholderSet {
                superior: PlaceholderGarment::new("Basic Shirt", "shirt", "white"),
                inferior: PlaceholderGarment::new("Black Trousers", "trousers", "black"),
                footwear: PlaceholderGarment::new("Sneakers", "sneakers", "white"),
            },
        }
    }
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self {
            rain_threshold: weather::RAIN_OVERRIDE_PERCENT,
            cold_threshold: weather::COLD_OVERRIDE_CELSIUS,
            rain_keywords: strings(&["boot"]),
            cold_keywords: strings(&["scarf", "hat"]),
            feminine_keywords: FeminineKeywords::default(),
            skirt_keywords: strings(&["skirt"]),
            pants_keywords: strings(&["pants", "trousers"]),
            dress_occasions: strings(&["formal", "casual"]),
            wardrobe_id_prefix: "item_".to_string(),
            placeholders: PlaceholderNames::default(),
        }
    }
}

impl StylistConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnalysisError::config("Invalid configuration JSON", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Cannot read configuration {}", path.display()), e)
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded stylist configuration");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Cannot write configuration {}", path.display()), e)
        })
    }
}
