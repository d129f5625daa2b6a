//! Color conversion and clustering module
//!
//! This module handles color space conversions between RGB pixels and
//! the 8-bit Lab/HSV scales, and the two-group clustering used to pick
//! a dominant color out of a region.

pub mod conversion;
pub mod clustering;

pub use conversion::{ColorConverter, HsvColor, LabColor};
pub use clustering::{two_means, ClusterResult};
