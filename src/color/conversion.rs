//! Color space conversion utilities
//!
//! Provides conversions between 8-bit RGB pixels and the channel scales
//! the extractors and classifier reason in:
//! - Lab with L* rescaled to 0-255 and a*/b* offset by 128
//! - HSV with hue halved to 0-180 and saturation/value in 0-255
//! - Hex color representation for palettes

use palette::{FromColor, Hsv, Lab, Srgb};
use serde::{Deserialize, Serialize};
use crate::{AnalysisError, Result};

/// Lab triplet on the 8-bit channel scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl LabColor {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Yellow-blue minus red-green opponent channel
    pub fn warmth(&self) -> f32 {
        self.b - self.a
    }
}

/// HSV triplet on the 8-bit channel scale (hue 0-180)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: u16,
    pub saturation: u16,
    pub value: u16,
}

impl HsvColor {
    pub const fn new(hue: u16, saturation: u16, value: u16) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn from_array(channels: [u16; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Channels as floating point, in hue/saturation/value order
    pub fn to_f32(self) -> [f32; 3] {
        [self.hue as f32, self.saturation as f32, self.value as f32]
    }

    /// Whether every channel lies inside the inclusive `[low, high]` box
    pub fn within(&self, low: [u16; 3], high: [u16; 3]) -> bool {
        (low[0]..=high[0]).contains(&self.hue)
            && (low[1]..=high[1]).contains(&self.saturation)
            && (low[2]..=high[2]).contains(&self.value)
    }
}

/// Color converter between RGB pixels and 8-bit Lab/HSV scales
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    fn to_srgb(&self, rgb: [u8; 3]) -> Srgb {
        Srgb::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    /// Convert an RGB pixel to Lab on the 8-bit scale
    pub fn rgb_to_lab(&self, rgb: [u8; 3]) -> LabColor {
        let lab = Lab::from_color(self.to_srgb(rgb));
        LabColor::new(
            (lab.l * 255.0 / 100.0).round().clamp(0.0, 255.0),
            (lab.a + 128.0).round().clamp(0.0, 255.0),
            (lab.b + 128.0).round().clamp(0.0, 255.0),
        )
    }

    /// Convert an 8-bit scale Lab triplet back to an RGB pixel, clamped to gamut
    pub fn lab_to_rgb(&self, lab: LabColor) -> [u8; 3] {
        let lab = Lab::new(lab.l * 100.0 / 255.0, lab.a - 128.0, lab.b - 128.0);
        let srgb = Srgb::from_color(lab);
        [
            (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Convert an RGB pixel to HSV on the 8-bit scale
    pub fn rgb_to_hsv(&self, rgb: [u8; 3]) -> HsvColor {
        let hsv: Hsv = Hsv::from_color(self.to_srgb(rgb));
        let hue = (hsv.hue.into_positive_degrees() / 2.0).round() as u16 % 180;
        HsvColor::new(
            hue,
            (hsv.saturation * 255.0).round().clamp(0.0, 255.0) as u16,
            (hsv.value * 255.0).round().clamp(0.0, 255.0) as u16,
        )
    }

    /// Convert an RGB pixel to a hexadecimal color string (e.g., "#FF0000")
    pub fn rgb_to_hex(&self, rgb: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
    }

    /// Parse a hexadecimal color string ("#FF0000" or "FF0000") to an RGB pixel
    ///
    /// # Errors
    ///
    /// Returns error if hex string is invalid
    pub fn hex_to_rgb(&self, hex: &str) -> Result<[u8; 3]> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalysisError::ColorConversionError {
                message: format!("Invalid hex color '{}': expected 6 hex digits", hex),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| AnalysisError::ColorConversionError {
                message: format!("Invalid hex color '{}': {}", hex, e),
            })
        };

        Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
    }
}
