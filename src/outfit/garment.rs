//! Garment records and their tag vocabularies
//!
//! List-valued fields accept either a single value or an array when
//! deserialized, and string tags are lowercased at this boundary, so the
//! matching code only ever sees normalized lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::weather;
use crate::season::category::categorical;
use crate::season::Season;
use crate::{AnalysisError, Result};

categorical! {
    /// Body position a garment fills in an outfit
    Slot {
        Superior => "superior" | "top",
        Inferior => "inferior" | "bottom",
        Dress => "dress",
        Footwear => "footwear" | "shoes",
        Accessory => "accessory",
    }
}

categorical! {
    Fit {
        Fitted => "fitted" | "slim",
        Regular => "regular" | "normal",
        Loose => "loose" | "oversized",
    }
}

categorical! {
    /// Where a resolved garment came from
    Source {
        Wardrobe => "wardrobe",
        Catalog => "catalog",
        /// Placeholder substituted by the composer
        Default => "default",
    }
}

categorical! {
    /// Coarse temperature bucket used for climate tags
    WeatherBucket {
        Hot => "hot",
        Mild => "mild",
        Cold => "cold",
    }
}

impl Default for Fit {
    fn default() -> Self {
        Fit::Regular
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Catalog
    }
}

impl WeatherBucket {
    /// Above 25 °C is hot, above 15 °C mild, anything else cold
    pub fn from_temperature(celsius: f32) -> Self {
        if celsius > weather::HOT_ABOVE_CELSIUS {
            WeatherBucket::Hot
        } else if celsius > weather::MILD_ABOVE_CELSIUS {
            WeatherBucket::Mild
        } else {
            WeatherBucket::Cold
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

fn lowercase_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Vec<String> = one_or_many(deserializer)?;
    Ok(normalize_tags(tags))
}

fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// A garment from a personal wardrobe or the shared catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    pub id: String,
    pub name: String,
    /// Name used in outfit summaries; falls back to `name` when empty
    #[serde(default)]
    pub short_name: String,
    pub slot: Slot,
    #[serde(alias = "color", deserialize_with = "lowercase_tags")]
    pub colors: Vec<String>,
    #[serde(alias = "occasion", deserialize_with = "lowercase_tags")]
    pub occasions: Vec<String>,
    #[serde(default, alias = "climate", deserialize_with = "one_or_many")]
    pub climate_tags: Vec<WeatherBucket>,
    /// Empty means suitable for any season
    #[serde(default, alias = "season", deserialize_with = "one_or_many")]
    pub season_tags: Vec<Season>,
    #[serde(default)]
    pub fit: Fit,
    #[serde(default)]
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GarmentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slot: Slot) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: String::new(),
            slot,
            colors: Vec::new(),
            occasions: Vec::new(),
            climate_tags: Vec::new(),
            season_tags: Vec::new(),
            fit: Fit::default(),
            source: Source::default(),
            owner_id: None,
            added_at: None,
            description: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = normalize_tags(colors);
        self
    }

    pub fn with_occasions(mut self, occasions: &[&str]) -> Self {
        self.occasions = normalize_tags(occasions);
        self
    }

    pub fn with_climate(mut self, climate: &[WeatherBucket]) -> Self {
        self.climate_tags = climate.to_vec();
        self
    }

    pub fn with_seasons(mut self, seasons: &[Season]) -> Self {
        self.season_tags = seasons.to_vec();
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Short name if set, full name otherwise
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }

    /// Whether the lowercased name contains any of `keywords`
    pub fn name_contains_any(&self, keywords: &[String]) -> bool {
        let name = self.name.to_lowercase();
        keywords.iter().any(|k| name.contains(&k.to_lowercase()))
    }

    /// Check the non-empty `colors` and `occasions` invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidGarment` naming the first violated field.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.name.trim().is_empty() {
            Some("name is empty")
        } else if self.colors.is_empty() {
            Some("no colors")
        } else if self.occasions.is_empty() {
            Some("no occasions")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(AnalysisError::InvalidGarment {
                id: self.id.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}
