//! Seasonal palettes
//!
//! A [`PaletteBook`] holds exactly one [`Palette`] per season. It is
//! loaded once and handed out by reference to the classifier and the
//! garment matcher.

use serde::{Deserialize, Serialize};

use crate::color::ColorConverter;
use crate::season::Season;
use crate::{AnalysisError, Result};

/// Colors that harmonize with one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub season: Season,
    /// Hex swatches, most characteristic first
    pub colors: Vec<String>,
    /// Human-readable color names, possibly multi-word
    pub color_names: Vec<String>,
    pub description: String,
}

impl Palette {
    fn new(season: Season, colors: &[&str], color_names: &[&str], description: &str) -> Self {
        Self {
            season,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            color_names: color_names.iter().map(|c| c.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// Lowercase words of the color names, first occurrence order
    ///
    /// `"golden yellow"` contributes both `"golden"` and `"yellow"`.
    pub fn keywords(&self) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for name in &self.color_names {
            for word in name.split_whitespace() {
                let word = word.to_lowercase();
                if !words.contains(&word) {
                    words.push(word);
                }
            }
        }
        words
    }
}

/// One palette per season, in [`Season::ALL`] order
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteBook {
    palettes: Vec<Palette>,
}

impl Default for PaletteBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl PaletteBook {
    /// Built-in palettes
    pub fn standard() -> Self {
        Self {
            palettes: vec![
                Palette::new(
                    Season::Spring,
                    &[
                        "#FFD700", "#FF6347", "#90EE90", "#FFB6C1", "#FFDAB9", "#98FB98",
                        "#F0E68C", "#FFA07A",
                    ],
                    &[
                        "golden yellow",
                        "coral orange",
                        "light green",
                        "light pink",
                        "peach",
                        "mint green",
                    ],
                    "Warm and vibrant tones (yellows, oranges, light greens, pinks)",
                ),
                Palette::new(
                    Season::Summer,
                    &[
                        "#B0E0E6", "#FFB6C1", "#F5DEB3", "#E6E6FA", "#AFEEEE", "#FFFACD",
                        "#D8BFD8", "#B2DFDB",
                    ],
                    &[
                        "light blue",
                        "pastel pink",
                        "nude beige",
                        "lavender",
                        "light turquoise",
                        "aqua green",
                    ],
                    "Soft and cool tones (light blues, pastel pinks, lavender, aqua green)",
                ),
                Palette::new(
                    Season::Autumn,
                    &[
                        "#8B4513", "#FF8C00", "#556B2F", "#F5DEB3", "#CD853F", "#A0522D",
                        "#DC143C", "#B8860B",
                    ],
                    &["brown", "orange", "olive green", "warm beige", "red", "bronze"],
                    "Earthy and warm tones (browns, oranges, olive greens, beige, red, bronze)",
                ),
                Palette::new(
                    Season::Winter,
                    &[
                        "#000000", "#FFFFFF", "#C0C0C0", "#000080", "#4682B4", "#2E8B57",
                        "#696969", "#191970",
                    ],
                    &["black", "white", "gray", "navy blue", "steel blue", "emerald"],
                    "Cool and intense tones (black, white, grays, deep blues, emerald)",
                ),
            ],
        }
    }

    /// Build a book from palettes in any order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a season is missing or repeated, or a
    /// swatch is not a valid hex color.
    pub fn from_palettes(palettes: Vec<Palette>) -> Result<Self> {
        let converter = ColorConverter::new();
        for palette in &palettes {
            for hex in &palette.colors {
                converter.hex_to_rgb(hex).map_err(|e| {
                    AnalysisError::catalog(format!("Palette {} has a bad swatch", palette.season), e)
                })?;
            }
        }

        let mut ordered = Vec::with_capacity(Season::ALL.len());
        for season in Season::ALL {
            let mut matching = palettes.iter().filter(|p| p.season == *season);
            match (matching.next(), matching.next()) {
                (Some(palette), None) => ordered.push(palette.clone()),
                (None, _) => {
                    return Err(AnalysisError::CatalogError {
                        message: format!("No palette for {}", season),
                        source: None,
                    })
                }
                (Some(_), Some(_)) => {
                    return Err(AnalysisError::CatalogError {
                        message: format!("More than one palette for {}", season),
                        source: None,
                    })
                }
            }
        }

        Ok(Self { palettes: ordered })
    }

    /// Parse a JSON array of palettes
    pub fn from_json_str(json: &str) -> Result<Self> {
        let palettes: Vec<Palette> = serde_json::from_str(json)
            .map_err(|e| AnalysisError::catalog("Invalid palette JSON", e))?;
        Self::from_palettes(palettes)
    }

    pub fn get(&self, season: Season) -> &Palette {
        let index = Season::ALL.iter().position(|s| *s == season).unwrap_or(0);
        &self.palettes[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.palettes.iter()
    }
}
