//! Reference thresholds for the seasonal color analysis
//!
//! Color values use 8-bit channel scales: Lab lightness in 0-255 with
//! a/b offset by 128, and HSV with hue in 0-180 and saturation/value
//! in 0-255.

/// Skin undertone extraction
pub mod skin {
    /// Pixels with lightness at or below this are treated as shadow
    pub const MIN_LIGHTNESS: f32 = 50.0;

    /// Pixels with lightness at or above this are treated as specular highlight
    pub const MAX_LIGHTNESS: f32 = 220.0;

    /// (b - a) above this is a warm undertone, below its negation a cool one
    pub const WARMTH_MARGIN: f32 = 5.0;

    /// Descriptor returned when no skin pixel survives filtering
    pub const FALLBACK_LAB: [f32; 3] = [150.0, 128.0, 128.0];
}

/// Eye (iris) color extraction
pub mod eye {
    /// Iris window as fraction of the eye box, both axes
    pub const IRIS_WINDOW: (f32, f32) = (0.3, 0.7);

    /// Pupil cut-off on the value channel
    pub const MIN_VALUE: u16 = 50;

    /// Glare and sclera cut-off on the value channel
    pub const MAX_VALUE: u16 = 220;

    /// Minimum valid iris pixels for clustering
    pub const MIN_PIXELS: usize = 20;

    /// Descriptor returned when the iris cannot be measured
    pub const FALLBACK_HSV: [u16; 3] = [90, 60, 100];
}

/// Hair color extraction
pub mod hair {
    /// Height of the hair band above the face, as fraction of face height
    pub const BAND_HEIGHT_RATIO: f32 = 0.6;

    /// Horizontal widening of the band on each side, as fraction of face width
    pub const BAND_WIDEN_RATIO: f32 = 0.1;

    /// Inclusive HSV lower bound of the skin exclusion mask
    pub const SKIN_MASK_LOW: [u16; 3] = [0, 15, 60];

    /// Inclusive HSV upper bound of the skin exclusion mask
    pub const SKIN_MASK_HIGH: [u16; 3] = [30, 170, 255];

    /// Hair pixels must be brighter than this
    pub const MIN_VALUE: u16 = 25;

    /// Minimum hair pixels for clustering
    pub const MIN_PIXELS: usize = 100;

    /// Descriptor returned when the hair cannot be measured
    pub const FALLBACK_HSV: [u16; 3] = [15, 60, 80];
}

/// Contrast, saturation and warmth thresholds of the season classifier
pub mod classifier {
    pub const HIGH_CONTRAST: f32 = 80.0;
    pub const MEDIUM_CONTRAST: f32 = 45.0;

    pub const HIGH_SATURATION: f32 = 110.0;
    pub const MEDIUM_SATURATION: f32 = 65.0;

    /// Eye hue is warm below this
    pub const EYE_WARM_BELOW: u16 = 40;
    /// Eye hue is warm above this
    pub const EYE_WARM_ABOVE: u16 = 150;

    /// Hair hue is warm below this
    pub const HAIR_WARM_BELOW: u16 = 50;
    /// Hair hue is warm above this
    pub const HAIR_WARM_ABOVE: u16 = 330;

    /// Minimum warmth votes (out of three) for a warm season
    pub const WARM_VOTES: u8 = 2;

    /// Eye or hair value above this counts as light coloring
    pub const LIGHT_VALUE: u16 = 110;
}

/// Weather overrides and temperature bucketing
pub mod weather {
    /// Rain probability (percent) above which footwear leans to boots
    pub const RAIN_OVERRIDE_PERCENT: u8 = 60;

    /// Temperature (Celsius) below which accessories lean to scarves and hats
    pub const COLD_OVERRIDE_CELSIUS: f32 = 10.0;

    /// Temperatures above this are hot
    pub const HOT_ABOVE_CELSIUS: f32 = 25.0;

    /// Temperatures above this (and not hot) are mild
    pub const MILD_ABOVE_CELSIUS: f32 = 15.0;
}

/// Confidence reported with an appearance profile
pub mod confidence {
    /// Full pipeline ran on a detected face
    pub const ANALYZED: f32 = 0.90;

    /// No face was detected and the default profile was substituted
    pub const DEFAULT_PROFILE: f32 = 0.50;
}

/// Illumination normalization
pub mod illumination {
    /// Histogram clip limit, relative to a uniform histogram
    pub const CLIP_LIMIT: f32 = 3.0;

    /// Tiles per axis
    pub const TILE_GRID: u32 = 8;
}
