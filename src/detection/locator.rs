//! Face and eye locator seam
//!
//! Detection itself lives outside the crate. Callers plug in a cascade
//! classifier, a neural detector or fixed boxes through [`FaceLocator`].

use image::RgbImage;

use super::Region;

/// Locates faces in a portrait and eyes inside a face crop
pub trait FaceLocator: Sync {
    /// Face boxes in image coordinates, in detector order
    fn locate_faces(&self, image: &RgbImage) -> Vec<Region>;

    /// Eye boxes relative to the given face crop
    fn locate_eyes(&self, face: &RgbImage) -> Vec<Region>;
}

/// Locator that reports fixed boxes
///
/// Useful when regions come from an upstream service or in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedRegions {
    pub faces: Vec<Region>,
    pub eyes: Vec<Region>,
}

impl FixedRegions {
    pub fn new(faces: Vec<Region>, eyes: Vec<Region>) -> Self {
        Self { faces, eyes }
    }
}

impl FaceLocator for FixedRegions {
    fn locate_faces(&self, _image: &RgbImage) -> Vec<Region> {
        self.faces.clone()
    }

    fn locate_eyes(&self, _face: &RgbImage) -> Vec<Region> {
        self.eyes.clone()
    }
}
