use serde::{Deserialize, Serialize};

use crate::color::{HsvColor, LabColor};
use crate::constants::confidence;
use crate::features::{EyeReading, HairReading, SkinReading};
use crate::season::{EyeColor, HairColor, Level, Palette, PaletteBook, Season, SkinUndertone};

/// Outcome of one appearance analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceProfile {
    pub season: Season,
    pub skin: SkinReading,
    pub eye: EyeReading,
    pub hair: HairReading,
    pub contrast: Level,
    pub saturation: Level,
    /// Hex swatches of the season palette
    pub palette: Vec<String>,
    pub palette_names: Vec<String>,
    pub palette_description: String,
    /// Lowercase color words used for garment color matching
    pub palette_keywords: Vec<String>,
    /// 0.90 for a full analysis, 0.50 for the default profile
    pub confidence: f32,
    /// No face was found and the documented default was substituted
    pub is_default: bool,
}

impl AppearanceProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        season: Season,
        skin: SkinReading,
        eye: EyeReading,
        hair: HairReading,
        contrast: Level,
        saturation: Level,
        palette: &Palette,
        confidence: f32,
    ) -> Self {
        Self {
            season,
            skin,
            eye,
            hair,
            contrast,
            saturation,
            palette: palette.colors.clone(),
            palette_names: palette.color_names.clone(),
            palette_description: palette.description.clone(),
            palette_keywords: palette.keywords(),
            confidence,
            is_default: false,
        }
    }

    /// Profile reported when no face is located
    ///
    /// Spring with a warm skin of lightness 150, brown eyes `{20, 70, 100}`,
    /// brown hair `{15, 60, 80}` and medium contrast and saturation. The
    /// categories are fixed rather than derived from the descriptors.
    pub fn default_for(palettes: &PaletteBook) -> Self {
        let eye_hsv = HsvColor::new(20, 70, 100);
        let hair_hsv = HsvColor::new(15, 60, 80);

        let mut profile = Self::new(
            Season::Spring,
            SkinReading {
                lab: LabColor::new(150.0, 128.0, 135.0),
                undertone: SkinUndertone::Warm,
                fallback: true,
            },
            EyeReading {
                hsv: eye_hsv,
                brightness: eye_hsv.value,
                category: EyeColor::Brown,
                fallback: true,
            },
            HairReading {
                hsv: hair_hsv,
                category: HairColor::Brown,
                fallback: true,
            },
            Level::Medium,
            Level::Medium,
            palettes.get(Season::Spring),
            confidence::DEFAULT_PROFILE,
        );
        profile.is_default = true;
        profile
    }

    /// Short human-readable explanation of the result
    pub fn detailed_analysis(&self) -> Vec<String> {
        if self.is_default {
            return vec!["Default analysis (no face detected)".to_string()];
        }
        vec![
            format!("Skin undertone {}", self.skin.undertone),
            format!("Eyes {}", self.eye.category),
            format!("Hair {}", self.hair.category),
            format!("Classification: {}", self.season),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = AppearanceProfile::default_for(&PaletteBook::standard());
        assert_eq!(profile.season, Season::Spring);
        assert_eq!(profile.skin.undertone, SkinUndertone::Warm);
        assert_eq!(profile.skin.lightness(), 150.0);
        assert_eq!(profile.eye.category, EyeColor::Brown);
        assert_eq!(profile.hair.category, HairColor::Brown);
        assert_eq!(profile.contrast, Level::Medium);
        assert_eq!(profile.saturation, Level::Medium);
        assert_eq!(profile.confidence, 0.50);
        assert!(profile.is_default);
        assert!(profile.palette_keywords.contains(&"peach".to_string()));
    }

    #[test]
    fn test_default_detailed_analysis() {
        let profile = AppearanceProfile::default_for(&PaletteBook::standard());
        assert_eq!(profile.detailed_analysis(), vec!["Default analysis (no face detected)"]);
    }

    #[test]
    fn test_profile_serializes_labels() {
        let profile = AppearanceProfile::default_for(&PaletteBook::standard());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["season"], "Spring");
        assert_eq!(json["eye"]["category"], "brown");

        let back: AppearanceProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
