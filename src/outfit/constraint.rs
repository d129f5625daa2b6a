//! Per-request outfit constraints

use serde::{Deserialize, Serialize};

use crate::outfit::garment::{Fit, WeatherBucket};
use crate::season::category::categorical;
use crate::season::{AppearanceProfile, Palette, Season};
use crate::{AnalysisError, Result};

categorical! {
    /// Stated presentation preference
    GenderHint {
        Feminine => "feminine" | "woman" | "female",
        Masculine => "masculine" | "man" | "male",
        Unspecified => "unspecified",
    }
}

impl Default for GenderHint {
    fn default() -> Self {
        GenderHint::Unspecified
    }
}

/// Garment families the user does not want
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionFlags {
    pub no_dress: bool,
    pub no_skirt: bool,
    pub no_pants: bool,
    /// Tops worn as dresses
    pub no_tops: bool,
}

/// Forecast for the day of the outfit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature: f32,
    /// Percent, 0-100
    pub rain_probability: u8,
}

impl WeatherConditions {
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a non-finite temperature or a rain
    /// probability above 100.
    pub fn new(temperature: f32, rain_probability: u8) -> Result<Self> {
        if !temperature.is_finite() {
            return Err(AnalysisError::invalid_parameter(
                "temperature",
                temperature.to_string(),
            ));
        }
        if rain_probability > 100 {
            return Err(AnalysisError::invalid_parameter(
                "rain_probability",
                rain_probability.to_string(),
            ));
        }
        Ok(Self {
            temperature,
            rain_probability,
        })
    }

    pub fn bucket(&self) -> WeatherBucket {
        WeatherBucket::from_temperature(self.temperature)
    }
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            rain_probability: 0,
        }
    }
}

/// Everything the composer needs to know about one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitConstraint {
    /// Lowercase occasion tag such as "formal", "casual" or "sport"
    pub occasion: String,
    pub weather_bucket: WeatherBucket,
    pub rain_probability: u8,
    pub temperature: f32,
    /// Season filter; `None` skips season tag matching
    pub season: Option<Season>,
    pub palette_keywords: Vec<String>,
    pub gender_hint: GenderHint,
    pub exclusions: ExclusionFlags,
    /// Preferred fit; narrows candidates only when some match
    pub fit: Option<Fit>,
}

impl OutfitConstraint {
    /// Constraint for `occasion` in default weather with no palette
    pub fn new(occasion: impl AsRef<str>) -> Self {
        let weather = WeatherConditions::default();
        Self {
            occasion: occasion.as_ref().trim().to_lowercase(),
            weather_bucket: weather.bucket(),
            rain_probability: weather.rain_probability,
            temperature: weather.temperature,
            season: None,
            palette_keywords: Vec::new(),
            gender_hint: GenderHint::default(),
            exclusions: ExclusionFlags::default(),
            fit: None,
        }
    }

    /// Constraint carrying the season and palette keywords of `profile`
    pub fn for_profile(occasion: impl AsRef<str>, profile: &AppearanceProfile) -> Self {
        let mut constraint = Self::new(occasion);
        constraint.season = Some(profile.season);
        constraint.palette_keywords = profile.palette_keywords.clone();
        constraint
    }

    pub fn with_palette(mut self, palette: &Palette) -> Self {
        self.season = Some(palette.season);
        self.palette_keywords = palette.keywords();
        self
    }

    /// Set temperature and rain; the bucket follows the temperature
    pub fn with_weather(mut self, weather: WeatherConditions) -> Self {
        self.temperature = weather.temperature;
        self.rain_probability = weather.rain_probability;
        self.weather_bucket = weather.bucket();
        self
    }

    /// Override the bucket derived from the temperature
    pub fn with_weather_bucket(mut self, bucket: WeatherBucket) -> Self {
        self.weather_bucket = bucket;
        self
    }

    pub fn with_gender(mut self, gender: GenderHint) -> Self {
        self.gender_hint = gender;
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionFlags) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    /// Masculine when stated, or when dresses, skirts and tops are all excluded
    pub fn prefers_masculine(&self) -> bool {
        let e = &self.exclusions;
        self.gender_hint == GenderHint::Masculine || (e.no_dress && e.no_skirt && e.no_tops)
    }
}
