//! Bounding boxes and the sub-regions sampled inside a face
//!
//! Fractional offsets are truncated toward zero, so a region of height
//! 10 sampled at 15 %-35 % covers rows 1..3.

use image::{imageops, RgbImage};
use serde::{Deserialize, Serialize};

use crate::constants::{eye, hair};

/// Forehead patch: rows 15-35 %, columns 25-75 % of the face
const FOREHEAD: [f32; 4] = [0.15, 0.35, 0.25, 0.75];
/// Left cheek patch: rows 45-65 %, columns 10-40 %
const LEFT_CHEEK: [f32; 4] = [0.45, 0.65, 0.10, 0.40];
/// Right cheek patch: rows 45-65 %, columns 60-90 %
const RIGHT_CHEEK: [f32; 4] = [0.45, 0.65, 0.60, 0.90];

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with an image of `width` x `height`
    pub fn clamp_to(&self, width: u32, height: u32) -> Region {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Region {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }

    /// Copy the region out of `image`, clamped to its bounds
    pub fn crop(&self, image: &RgbImage) -> RgbImage {
        let r = self.clamp_to(image.width(), image.height());
        imageops::crop_imm(image, r.x, r.y, r.width, r.height).to_image()
    }

    /// Sub-region given as `[row_start, row_end, col_start, col_end]` fractions
    /// of this region, relative to its own origin
    pub fn fraction(&self, bounds: [f32; 4]) -> Region {
        let h = self.height as f32;
        let w = self.width as f32;
        let (y0, y1) = ((h * bounds[0]) as u32, (h * bounds[1]) as u32);
        let (x0, x1) = ((w * bounds[2]) as u32, (w * bounds[3]) as u32);
        Region::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Forehead and cheek patches of a face crop of this size
    pub fn skin_patches(&self) -> [Region; 3] {
        [
            self.fraction(FOREHEAD),
            self.fraction(LEFT_CHEEK),
            self.fraction(RIGHT_CHEEK),
        ]
    }

    /// Central iris window of an eye crop of this size
    pub fn iris_window(&self) -> Region {
        let (lo, hi) = eye::IRIS_WINDOW;
        self.fraction([lo, hi, lo, hi])
    }

    /// Largest region by area; the first one wins ties
    pub fn largest(regions: &[Region]) -> Option<Region> {
        regions.iter().copied().reduce(|best, r| {
            if r.area() > best.area() {
                r
            } else {
                best
            }
        })
    }
}

/// Band of the image directly above a face box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HairBand;

impl HairBand {
    /// Hair band for `face` inside an image of `image_width` x `image_height`
    ///
    /// Spans from 60 % of the face height above the box down to its top
    /// edge, and is widened by 10 % of the face width on each side.
    pub fn above(face: &Region, image_width: u32, image_height: u32) -> Region {
        let rise = (face.height as f32 * hair::BAND_HEIGHT_RATIO) as u32;
        let widen = (face.width as f32 * hair::BAND_WIDEN_RATIO) as u32;

        let top = face.y.saturating_sub(rise);
        let left = face.x.saturating_sub(widen);
        let right = face
            .x
            .saturating_add(face.width)
            .saturating_add(widen)
            .min(image_width);
        let bottom = face.y.min(image_height);

        Region::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_skin_patch_geometry() {
        let face = Region::new(40, 30, 100, 100);
        let [forehead, left, right] = face.skin_patches();
        assert_eq!(forehead, Region::new(25, 15, 50, 20));
        assert_eq!(left, Region::new(10, 45, 30, 20));
        assert_eq!(right, Region::new(60, 45, 30, 20));
    }

    #[test]
    fn test_iris_window_is_central() {
        let eye = Region::new(0, 0, 50, 20);
        assert_eq!(eye.iris_window(), Region::new(15, 6, 20, 8));
    }

    #[test]
    fn test_largest_prefers_first_on_ties() {
        let regions = [
            Region::new(0, 0, 10, 10),
            Region::new(5, 5, 20, 5),
            Region::new(50, 0, 12, 12),
            Region::new(70, 0, 12, 12),
        ];
        assert_eq!(Region::largest(&regions), Some(Region::new(50, 0, 12, 12)));
        assert_eq!(Region::largest(&[]), None);
    }

    #[test]
    fn test_hair_band_is_widened_and_clamped() {
        let face = Region::new(50, 100, 100, 100);
        assert_eq!(HairBand::above(&face, 400, 400), Region::new(40, 40, 120, 60));

        let near_corner = Region::new(5, 20, 100, 100);
        let band = HairBand::above(&near_corner, 110, 400);
        assert_eq!(band, Region::new(0, 0, 110, 20));

        let at_top = Region::new(10, 0, 50, 50);
        assert!(HairBand::above(&at_top, 200, 200).is_empty());
    }

    #[test]
    fn test_crop_is_clamped_to_image() {
        let image = RgbImage::from_pixel(20, 10, Rgb([1, 2, 3]));
        let crop = Region::new(15, 5, 10, 10).crop(&image);
        assert_eq!(crop.dimensions(), (5, 5));
        assert!(Region::new(30, 30, 5, 5).crop(&image).is_empty());
    }

    #[test]
    fn test_hair_band_for_face_past_image_edge() {
        let face = Region::new(u32::MAX - 10, 10, 20, 5);
        let band = HairBand::above(&face, 100, 100);
        assert_eq!(band.width, 0);
        assert!(band.is_empty());
    }
}
