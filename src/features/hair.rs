//! Hair color from the band above the face

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::color::{two_means, ColorConverter, HsvColor};
use crate::config::{ExtractionConfig, HsvRange};
use crate::constants::hair;
use crate::detection::{HairBand, Region};
use crate::season::HairColor;

/// Dominant hair color and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HairReading {
    pub hsv: HsvColor,
    pub category: HairColor,
    pub fallback: bool,
}

impl HairReading {
    pub fn fallback() -> Self {
        let hsv = HsvColor::from_array(hair::FALLBACK_HSV);
        Self {
            hsv,
            category: categorize_hair(&hsv),
            fallback: true,
        }
    }
}

/// Ordered hair color rules; the first match wins
pub fn categorize_hair(hsv: &HsvColor) -> HairColor {
    let (h, s, v) = (hsv.hue, hsv.saturation, hsv.value);
    if v < 40 {
        HairColor::Black
    } else if v < 70 {
        HairColor::DarkBrown
    } else if v < 100 {
        HairColor::Brown
    } else if h <= 25 && s > 70 {
        HairColor::Red
    } else if v > 140 {
        HairColor::Blonde
    } else {
        HairColor::LightBrown
    }
}

#[derive(Debug, Clone)]
pub struct HairExtractor {
    converter: ColorConverter,
    skin_mask: HsvRange,
    min_value: u16,
    min_pixels: usize,
}

impl Default for HairExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl HairExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            skin_mask: config.hair_skin_mask,
            min_value: config.hair_min_value,
            min_pixels: config.hair_min_pixels,
        }
    }

    /// Measure the hair above `face` in the full image
    pub fn extract(&self, image: &RgbImage, face: &Region) -> HairReading {
        let band = HairBand::above(face, image.width(), image.height());
        if band.is_empty() {
            tracing::debug!("face touches the top edge, no hair band");
            return HairReading::fallback();
        }
        self.extract_band(&band.crop(image))
    }

    /// Measure hair in an already cropped band
    pub fn extract_band(&self, band: &RgbImage) -> HairReading {
        let mask = &self.skin_mask;
        let samples: Vec<[f32; 3]> = band
            .pixels()
            .map(|p| self.converter.rgb_to_hsv(p.0))
            .filter(|hsv| !hsv.within(mask.low, mask.high) && hsv.value > self.min_value)
            .map(|hsv| hsv.to_f32())
            .collect();

        if samples.len() < self.min_pixels {
            tracing::debug!(pixels = samples.len(), "too few hair pixels, using fallback");
            return HairReading::fallback();
        }

        match two_means(&samples) {
            Some(clusters) => {
                let hsv = HsvColor::from_array(clusters.dominant_truncated());
                HairReading {
                    hsv,
                    category: categorize_hair(&hsv),
                    fallback: false,
                }
            }
            None => HairReading::fallback(),
        }
    }
}
