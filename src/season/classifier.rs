//! Season classification rules
//!
//! Every rule is a pure function over descriptor values so each branch
//! can be exercised with literal inputs. [`SeasonClassifier`] wires them
//! together and attaches the palette.

use crate::constants::{classifier, confidence};
use crate::features::{EyeReading, HairReading, SkinReading};
use crate::season::{AppearanceProfile, Level, PaletteBook, Season, SkinUndertone};

/// Contrast from the mean pairwise distance of skin lightness, eye value and hair value
pub fn contrast_level(skin_lightness: f32, eye_value: u16, hair_value: u16) -> Level {
    let (eye, hair) = (eye_value as f32, hair_value as f32);
    let mean = ((skin_lightness - eye).abs()
        + (skin_lightness - hair).abs()
        + (eye - hair).abs())
        / 3.0;

    if mean > classifier::HIGH_CONTRAST {
        Level::High
    } else if mean > classifier::MEDIUM_CONTRAST {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Saturation from the mean of eye and hair saturation
pub fn saturation_level(eye_saturation: u16, hair_saturation: u16) -> Level {
    let mean = (eye_saturation as f32 + hair_saturation as f32) / 2.0;
    if mean > classifier::HIGH_SATURATION {
        Level::High
    } else if mean > classifier::MEDIUM_SATURATION {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Number of warm signals among skin undertone, eye hue and hair hue (0-3)
pub fn warmth_score(skin: SkinUndertone, eye_hue: u16, hair_hue: u16) -> u8 {
    let eye_warm = eye_hue < classifier::EYE_WARM_BELOW || eye_hue > classifier::EYE_WARM_ABOVE;
    let hair_warm =
        hair_hue < classifier::HAIR_WARM_BELOW || hair_hue > classifier::HAIR_WARM_ABOVE;
    [skin == SkinUndertone::Warm, eye_warm, hair_warm]
        .into_iter()
        .filter(|warm| *warm)
        .count() as u8
}

/// Four-way season decision
///
/// `light_coloring` is true when eye or hair value is above the light
/// threshold.
pub fn classify_season(
    warm: bool,
    contrast: Level,
    saturation: Level,
    light_coloring: bool,
) -> Season {
    if warm {
        if matches!(saturation, Level::High | Level::Medium) && light_coloring {
            Season::Spring
        } else {
            Season::Autumn
        }
    } else if contrast == Level::High || saturation == Level::High {
        Season::Winter
    } else {
        Season::Summer
    }
}

/// Builds appearance profiles from extractor readings
#[derive(Debug, Clone, Copy)]
pub struct SeasonClassifier<'a> {
    palettes: &'a PaletteBook,
}

impl<'a> SeasonClassifier<'a> {
    pub fn new(palettes: &'a PaletteBook) -> Self {
        Self { palettes }
    }

    pub fn classify(
        &self,
        skin: SkinReading,
        eye: EyeReading,
        hair: HairReading,
    ) -> AppearanceProfile {
        let contrast = contrast_level(skin.lightness(), eye.hsv.value, hair.hsv.value);
        let saturation = saturation_level(eye.hsv.saturation, hair.hsv.saturation);
        let warmth = warmth_score(skin.undertone, eye.hsv.hue, hair.hsv.hue);
        let light_coloring =
            eye.hsv.value > classifier::LIGHT_VALUE || hair.hsv.value > classifier::LIGHT_VALUE;

        let season = classify_season(
            warmth >= classifier::WARM_VOTES,
            contrast,
            saturation,
            light_coloring,
        );

        tracing::info!(
            %season,
            warmth,
            %contrast,
            %saturation,
            "classified appearance"
        );

        AppearanceProfile::new(
            season,
            skin,
            eye,
            hair,
            contrast,
            saturation,
            self.palettes.get(season),
            confidence::ANALYZED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HsvColor, LabColor};
    use crate::features::{categorize_eye, categorize_hair};

    fn eye(hue: u16, saturation: u16, value: u16) -> EyeReading {
        let hsv = HsvColor::new(hue, saturation, value);
        EyeReading {
            hsv,
            brightness: value,
            category: categorize_eye(&hsv),
            fallback: false,
        }
    }

    fn hair(hue: u16, saturation: u16, value: u16) -> HairReading {
        let hsv = HsvColor::new(hue, saturation, value);
        HairReading {
            hsv,
            category: categorize_hair(&hsv),
            fallback: false,
        }
    }

    fn skin(lightness: f32, undertone: SkinUndertone) -> SkinReading {
        SkinReading {
            lab: LabColor::new(lightness, 128.0, 128.0),
            undertone,
            fallback: false,
        }
    }

    #[test]
    fn test_contrast_thresholds() {
        // pairwise 90, 90, 0 -> mean 60
        assert_eq!(contrast_level(200.0, 110, 110), Level::Medium);
        // 150, 150, 0 -> mean 100
        assert_eq!(contrast_level(200.0, 50, 50), Level::High);
        assert_eq!(contrast_level(150.0, 120, 130), Level::Low);
        // exactly 45 is not above the medium threshold
        assert_eq!(contrast_level(167.5, 100, 100), Level::Low);
    }

    #[test]
    fn test_saturation_thresholds() {
        assert_eq!(saturation_level(120, 110), Level::High);
        assert_eq!(saturation_level(110, 110), Level::Medium);
        assert_eq!(saturation_level(65, 65), Level::Low);
    }

    #[test]
    fn test_warmth_score_counts_signals() {
        assert_eq!(warmth_score(SkinUndertone::Warm, 30, 20), 3);
        assert_eq!(warmth_score(SkinUndertone::Cool, 100, 0), 1);
        assert_eq!(warmth_score(SkinUndertone::Neutral, 151, 60), 1);
        assert_eq!(warmth_score(SkinUndertone::Neutral, 40, 50), 0);
    }

    #[test]
    fn test_decision_tree() {
        assert_eq!(classify_season(true, Level::Low, Level::High, true), Season::Spring);
        assert_eq!(classify_season(true, Level::Low, Level::Medium, false), Season::Autumn);
        assert_eq!(classify_season(true, Level::High, Level::Low, true), Season::Autumn);
        assert_eq!(classify_season(false, Level::High, Level::Low, false), Season::Winter);
        assert_eq!(classify_season(false, Level::Low, Level::High, false), Season::Winter);
        assert_eq!(classify_season(false, Level::Medium, Level::Medium, true), Season::Summer);
    }

    #[test]
    fn test_warm_light_saturated_is_spring() {
        let book = PaletteBook::standard();
        let profile = SeasonClassifier::new(&book).classify(
            skin(180.0, SkinUndertone::Warm),
            eye(30, 130, 120),
            hair(20, 120, 90),
        );
        assert_eq!(profile.saturation, Level::High);
        assert_eq!(profile.season, Season::Spring);
        assert_eq!(profile.confidence, 0.90);
        assert!(!profile.is_default);
        assert_eq!(profile.palette, book.get(Season::Spring).colors);
    }

    #[test]
    fn test_cool_high_contrast_is_winter() {
        let book = PaletteBook::standard();
        let profile = SeasonClassifier::new(&book).classify(
            skin(230.0, SkinUndertone::Cool),
            eye(100, 40, 80),
            hair(100, 30, 30),
        );
        assert_eq!(profile.contrast, Level::High);
        assert_eq!(profile.season, Season::Winter);
    }
}
