//! Illumination calibration module
//!
//! This module rescales image lightness before feature extraction so
//! that skin, eye and hair measurements are less sensitive to exposure.

pub mod illumination;

pub use illumination::IlluminationNormalizer;
