//! Iris color from the central window of an eye box

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::color::{two_means, ColorConverter, HsvColor};
use crate::config::{Bounds, ExtractionConfig};
use crate::constants::eye;
use crate::detection::Region;
use crate::season::EyeColor;

/// Dominant iris color and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeReading {
    pub hsv: HsvColor,
    /// Mean value channel over the valid iris pixels
    pub brightness: u16,
    pub category: EyeColor,
    pub fallback: bool,
}

impl EyeReading {
    pub fn fallback() -> Self {
        let hsv = HsvColor::from_array(eye::FALLBACK_HSV);
        Self {
            hsv,
            brightness: hsv.value,
            category: categorize_eye(&hsv),
            fallback: true,
        }
    }
}

/// Ordered eye color rules; the first match wins
pub fn categorize_eye(hsv: &HsvColor) -> EyeColor {
    let (h, s, v) = (hsv.hue, hsv.saturation, hsv.value);
    if v < 70 {
        EyeColor::DarkBrown
    } else if h < 20 || h > 160 {
        if s > 50 {
            EyeColor::Brown
        } else {
            EyeColor::Amber
        }
    } else if (20..=80).contains(&h) {
        if s > 60 {
            EyeColor::Green
        } else {
            EyeColor::Hazel
        }
    } else if s > 50 {
        EyeColor::Blue
    } else {
        EyeColor::Gray
    }
}

#[derive(Debug, Clone)]
pub struct EyeExtractor {
    converter: ColorConverter,
    value: Bounds<u16>,
    min_pixels: usize,
}

impl Default for EyeExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl EyeExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            value: config.eye_value,
            min_pixels: config.eye_min_pixels,
        }
    }

    /// Measure the iris inside an eye crop
    pub fn extract(&self, eye_crop: &RgbImage) -> EyeReading {
        let window = Region::new(0, 0, eye_crop.width(), eye_crop.height()).iris_window();
        let iris = window.crop(eye_crop);

        let valid: Vec<HsvColor> = iris
            .pixels()
            .map(|p| self.converter.rgb_to_hsv(p.0))
            .filter(|hsv| self.value.contains_exclusive(hsv.value))
            .collect();

        if valid.len() < self.min_pixels {
            tracing::debug!(pixels = valid.len(), "too few iris pixels, using fallback");
            return EyeReading::fallback();
        }

        let samples: Vec<[f32; 3]> = valid.iter().map(|hsv| hsv.to_f32()).collect();
        let Some(clusters) = two_means(&samples) else {
            return EyeReading::fallback();
        };

        let hsv = HsvColor::from_array(clusters.dominant_truncated());
        let brightness =
            (valid.iter().map(|c| c.value as u64).sum::<u64>() / valid.len() as u64) as u16;

        EyeReading {
            hsv,
            brightness,
            category: categorize_eye(&hsv),
            fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_categorize_rule_order() {
        assert_eq!(categorize_eye(&HsvColor::new(100, 200, 60)), EyeColor::DarkBrown);
        assert_eq!(categorize_eye(&HsvColor::new(10, 80, 120)), EyeColor::Brown);
        assert_eq!(categorize_eye(&HsvColor::new(170, 40, 120)), EyeColor::Amber);
        assert_eq!(categorize_eye(&HsvColor::new(20, 61, 120)), EyeColor::Green);
        assert_eq!(categorize_eye(&HsvColor::new(80, 60, 120)), EyeColor::Hazel);
        assert_eq!(categorize_eye(&HsvColor::new(110, 51, 120)), EyeColor::Blue);
        assert_eq!(categorize_eye(&HsvColor::new(110, 50, 120)), EyeColor::Gray);
    }

    #[test]
    fn test_fallback_descriptor() {
        let reading = EyeReading::fallback();
        assert_eq!(reading.hsv, HsvColor::new(90, 60, 100));
        assert_eq!(reading.category, EyeColor::Blue);
        assert!(reading.fallback);
    }

    #[test]
    fn test_blue_iris() {
        // Mid blue; the window crop never sees the border
        let eye = RgbImage::from_pixel(30, 20, Rgb([60, 90, 170]));
        let reading = EyeExtractor::default().extract(&eye);
        assert!(!reading.fallback);
        assert_eq!(reading.category, EyeColor::Blue);
        assert_eq!(reading.brightness, reading.hsv.value);
    }

    #[test]
    fn test_pupil_only_falls_back() {
        let eye = RgbImage::from_pixel(30, 20, Rgb([15, 10, 10]));
        assert!(EyeExtractor::default().extract(&eye).fallback);
    }

    #[test]
    fn test_small_eye_falls_back() {
        // 4x4 iris window holds fewer than 20 pixels
        let eye = RgbImage::from_pixel(10, 10, Rgb([60, 90, 170]));
        assert!(EyeExtractor::default().extract(&eye).fallback);
    }
}
