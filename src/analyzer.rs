//! Appearance analysis pipeline
//!
//! Normalizes illumination, locates the face, runs the three region
//! extractors concurrently and classifies the season. A portrait without
//! a face yields the default profile rather than an error.

use image::RgbImage;
use std::path::Path;
use std::thread;

use crate::calibration::IlluminationNormalizer;
use crate::config::StylistConfig;
use crate::detection::{FaceLocator, Region};
use crate::features::{EyeExtractor, EyeReading, HairExtractor, HairReading, SkinExtractor, SkinReading};
use crate::image_loader::load_image;
use crate::season::{AppearanceProfile, PaletteBook, SeasonClassifier};
use crate::Result;

/// Seasonal color analysis of portraits
#[derive(Debug, Clone)]
pub struct ColorimetryAnalyzer {
    normalizer: IlluminationNormalizer,
    skin: SkinExtractor,
    eye: EyeExtractor,
    hair: HairExtractor,
    palettes: PaletteBook,
}

impl Default for ColorimetryAnalyzer {
    fn default() -> Self {
        Self::new(&StylistConfig::default(), PaletteBook::standard())
    }
}

impl ColorimetryAnalyzer {
    pub fn new(config: &StylistConfig, palettes: PaletteBook) -> Self {
        Self {
            normalizer: IlluminationNormalizer::new(&config.illumination),
            skin: SkinExtractor::new(&config.extraction),
            eye: EyeExtractor::new(&config.extraction),
            hair: HairExtractor::new(&config.extraction),
            palettes,
        }
    }

    pub fn palettes(&self) -> &PaletteBook {
        &self.palettes
    }

    /// Analyze a decoded portrait
    ///
    /// The first face reported by `locator` is used. Eyes are searched
    /// inside that face and the largest eye box is measured.
    pub fn analyze(&self, image: &RgbImage, locator: &dyn FaceLocator) -> AppearanceProfile {
        let normalized = self.normalizer.normalize(image);

        let faces = locator.locate_faces(&normalized);
        let Some(face) = faces
            .first()
            .map(|f| f.clamp_to(normalized.width(), normalized.height()))
            .filter(|f| !f.is_empty())
        else {
            tracing::info!("no face detected, using default profile");
            return AppearanceProfile::default_for(&self.palettes);
        };
        tracing::debug!(faces = faces.len(), ?face, "face located");

        let face_crop = face.crop(&normalized);

        let (skin, eye, hair) = thread::scope(|scope| {
            let skin = scope.spawn(|| self.skin.extract(&face_crop));
            let eye = scope.spawn(|| self.measure_eye(&face_crop, locator));
            let hair = self.hair.extract(&normalized, &face);

            let skin = skin.join().unwrap_or_else(|_| {
                tracing::warn!("skin extractor panicked, using fallback");
                SkinReading::fallback()
            });
            let eye = eye.join().unwrap_or_else(|_| {
                tracing::warn!("eye extractor panicked, using fallback");
                EyeReading::fallback()
            });
            (skin, eye, hair)
        });

        log_fallbacks(&skin, &eye, &hair);
        SeasonClassifier::new(&self.palettes).classify(skin, eye, hair)
    }

    /// Load and analyze a portrait file
    ///
    /// # Errors
    ///
    /// Returns `ImageLoadError` when the file cannot be read or decoded.
    pub fn analyze_path(&self, path: &Path, locator: &dyn FaceLocator) -> Result<AppearanceProfile> {
        let image = load_image(path)?;
        Ok(self.analyze(&image, locator))
    }

    fn measure_eye(&self, face_crop: &RgbImage, locator: &dyn FaceLocator) -> EyeReading {
        let eyes = locator.locate_eyes(face_crop);
        match Region::largest(&eyes) {
            Some(eye) => {
                let crop = eye.crop(face_crop);
                if crop.is_empty() {
                    EyeReading::fallback()
                } else {
                    self.eye.extract(&crop)
                }
            }
            None => {
                tracing::debug!("no eyes located, using fallback");
                EyeReading::fallback()
            }
        }
    }
}

fn log_fallbacks(skin: &SkinReading, eye: &EyeReading, hair: &HairReading) {
    if skin.fallback || eye.fallback || hair.fallback {
        tracing::warn!(
            skin = skin.fallback,
            eye = eye.fallback,
            hair = hair.fallback,
            "analysis used fallback descriptors"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IlluminationConfig;
    use crate::detection::FixedRegions;
    use crate::season::{Season, SkinUndertone};
    use image::Rgb;

    fn raw_config() -> StylistConfig {
        StylistConfig {
            illumination: IlluminationConfig {
                enabled: false,
                ..IlluminationConfig::default()
            },
            ..StylistConfig::default()
        }
    }

    #[test]
    fn test_no_face_gives_default_profile() {
        let analyzer = ColorimetryAnalyzer::default();
        let image = RgbImage::from_pixel(64, 64, Rgb([120, 120, 120]));
        let profile = analyzer.analyze(&image, &FixedRegions::default());
        assert!(profile.is_default);
        assert_eq!(profile.season, Season::Spring);
        assert_eq!(profile.confidence, 0.50);
    }

    #[test]
    fn test_face_outside_image_gives_default_profile() {
        let analyzer = ColorimetryAnalyzer::default();
        let image = RgbImage::from_pixel(64, 64, Rgb([120, 120, 120]));
        let locator = FixedRegions::new(vec![Region::new(100, 100, 20, 20)], vec![]);
        assert!(analyzer.analyze(&image, &locator).is_default);
    }

    #[test]
    fn test_missing_eyes_use_fallback() {
        let image = RgbImage::from_fn(100, 160, |_, y| {
            if y < 60 {
                Rgb([45, 40, 60])
            } else {
                Rgb([224, 184, 140])
            }
        });
        let locator = FixedRegions::new(vec![Region::new(0, 60, 100, 100)], vec![]);
        let profile = ColorimetryAnalyzer::new(&raw_config(), PaletteBook::standard())
            .analyze(&image, &locator);

        assert!(!profile.is_default);
        assert!(profile.eye.fallback);
        assert!(!profile.hair.fallback);
        assert_eq!(profile.skin.undertone, SkinUndertone::Warm);
        assert_eq!(profile.confidence, 0.90);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let image = RgbImage::from_fn(120, 180, |x, y| {
            Rgb([(100 + x % 50) as u8, (80 + y % 40) as u8, (60 + (x + y) % 30) as u8])
        });
        let locator = FixedRegions::new(
            vec![Region::new(10, 70, 100, 100)],
            vec![Region::new(20, 30, 25, 15), Region::new(55, 30, 30, 20)],
        );
        let analyzer = ColorimetryAnalyzer::default();
        assert_eq!(analyzer.analyze(&image, &locator), analyzer.analyze(&image, &locator));
    }
}
