//! Face region geometry module
//!
//! This module defines the bounding boxes exchanged with an external
//! face/eye locator and the sub-regions sampled by the feature
//! extractors.

pub mod locator;
pub mod region;

pub use locator::{FaceLocator, FixedRegions};
pub use region::{HairBand, Region};
