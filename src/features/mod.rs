//! Region feature extractors
//!
//! Three independent extractors turn a cropped region into a small color
//! descriptor plus its category. None of them fails: when a region holds
//! too few usable pixels the extractor returns a fixed fallback
//! descriptor and flags it.

pub mod eye;
pub mod hair;
pub mod skin;

pub use eye::{categorize_eye, EyeExtractor, EyeReading};
pub use hair::{categorize_hair, HairExtractor, HairReading};
pub use skin::{categorize_undertone, SkinExtractor, SkinReading};
