//! Skin undertone from forehead and cheek patches

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::color::{ColorConverter, LabColor};
use crate::config::{Bounds, ExtractionConfig};
use crate::constants::skin;
use crate::detection::Region;
use crate::season::SkinUndertone;

/// Averaged skin color and its undertone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinReading {
    pub lab: LabColor,
    pub undertone: SkinUndertone,
    /// No pixel survived filtering and the neutral fallback was used
    pub fallback: bool,
}

impl SkinReading {
    pub fn fallback() -> Self {
        let [l, a, b] = skin::FALLBACK_LAB;
        let lab = LabColor::new(l, a, b);
        Self {
            lab,
            undertone: categorize_undertone(&lab),
            fallback: true,
        }
    }

    /// Lightness on the 0-255 scale
    pub fn lightness(&self) -> f32 {
        self.lab.l
    }
}

/// Classify undertone from the mean (b - a) opponent difference
pub fn categorize_undertone(lab: &LabColor) -> SkinUndertone {
    let warmth = lab.warmth();
    if warmth > skin::WARMTH_MARGIN {
        SkinUndertone::Warm
    } else if warmth < -skin::WARMTH_MARGIN {
        SkinUndertone::Cool
    } else {
        SkinUndertone::Neutral
    }
}

#[derive(Debug, Clone)]
pub struct SkinExtractor {
    converter: ColorConverter,
    lightness: Bounds<f32>,
}

impl Default for SkinExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl SkinExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            lightness: config.skin_lightness,
        }
    }

    /// Measure the skin of a face crop
    ///
    /// Pixels of the three patches are pooled; shadows and highlights
    /// outside the lightness bounds are dropped before averaging.
    pub fn extract(&self, face: &RgbImage) -> SkinReading {
        let bounds = Region::new(0, 0, face.width(), face.height());

        let mut sum = [0.0f64; 3];
        let mut count = 0usize;
        for patch in bounds.skin_patches() {
            let crop = patch.crop(face);
            for pixel in crop.pixels() {
                let lab = self.converter.rgb_to_lab(pixel.0);
                if self.lightness.contains_exclusive(lab.l) {
                    sum[0] += lab.l as f64;
                    sum[1] += lab.a as f64;
                    sum[2] += lab.b as f64;
                    count += 1;
                }
            }
        }

        if count == 0 {
            tracing::debug!("no usable skin pixels, using neutral fallback");
            return SkinReading::fallback();
        }

        let n = count as f64;
        let lab = LabColor::new(
            (sum[0] / n) as f32,
            (sum[1] / n) as f32,
            (sum[2] / n) as f32,
        );
        SkinReading {
            lab,
            undertone: categorize_undertone(&lab),
            fallback: false,
        }
    }
}
