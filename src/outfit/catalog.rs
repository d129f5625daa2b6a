//! Shared garment catalog
//!
//! Read-only at match time. Records are validated and stamped with the
//! catalog source when the catalog is built.

use std::path::Path;

use crate::outfit::garment::{Fit, GarmentRecord, Slot, Source, WeatherBucket};
use crate::outfit::store::{filter_records, GarmentStore};
use crate::season::Season;
use crate::{AnalysisError, Result};

use crate::outfit::garment::WeatherBucket::{Cold, Hot, Mild};
use crate::season::Season::{Autumn, Spring, Summer, Winter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<GarmentRecord>,
}

impl Catalog {
    /// Build from records, validating each one
    ///
    /// # Errors
    ///
    /// Returns `InvalidGarment` for the first record with empty colors or
    /// occasions, or `CatalogError` when two records share an id.
    pub fn from_records(records: Vec<GarmentRecord>) -> Result<Self> {
        let mut items: Vec<GarmentRecord> = Vec::with_capacity(records.len());
        for mut record in records {
            record.validate()?;
            if items.iter().any(|r| r.id == record.id) {
                return Err(AnalysisError::CatalogError {
                    message: format!("Duplicate garment id '{}'", record.id),
                    source: None,
                });
            }
            record.source = Source::Catalog;
            items.push(record);
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of garment records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<GarmentRecord> = serde_json::from_str(json)
            .map_err(|e| AnalysisError::catalog("Invalid catalog JSON", e))?;
        Self::from_records(records)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::catalog(format!("Cannot read catalog {}", path.display()), e)
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&GarmentRecord> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn items(&self) -> &[GarmentRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Built-in starter catalog
    pub fn standard() -> Self {
        let items = vec![
            GarmentRecord::new("sup_001", "White Basic T-Shirt", Slot::Superior)
                .with_short_name("white t-shirt")
                .with_colors(&["white"])
                .with_occasions(&["casual", "sport"])
                .with_climate(&[Hot, Mild])
                .with_seasons(&[Spring, Summer])
                .with_description("100% cotton t-shirt, classic cut"),
            GarmentRecord::new("sup_002", "Sky Blue Silk Blouse", Slot::Superior)
                .with_short_name("blue blouse")
                .with_colors(&["blue"])
                .with_occasions(&["formal", "casual"])
                .with_climate(&[Mild, Hot])
                .with_seasons(&[Summer, Spring])
                .with_description("Elegant silk blouse for events"),
            GarmentRecord::new("sup_003", "Gray Knit Sweater", Slot::Superior)
                .with_short_name("gray sweater")
                .with_colors(&["gray"])
                .with_occasions(&["casual", "formal"])
                .with_climate(&[Cold, Mild])
                .with_seasons(&[Autumn, Winter])
                .with_description("Soft wool sweater for cold days"),
            GarmentRecord::new("sup_004", "Olive Green Shirt", Slot::Superior)
                .with_short_name("olive green shirt")
                .with_colors(&["green"])
                .with_occasions(&["casual"])
                .with_climate(&[Mild])
                .with_seasons(&[Autumn, Spring])
                .with_description("Versatile shirt that goes with everything"),
            GarmentRecord::new("sup_005", "Coral Top", Slot::Superior)
                .with_short_name("coral top")
                .with_colors(&["coral"])
                .with_occasions(&["casual", "formal"])
                .with_climate(&[Hot])
                .with_seasons(&[Spring, Summer])
                .with_fit(Fit::Fitted)
                .with_description("Vibrant top for spring"),
            GarmentRecord::new("inf_001", "Dark Blue Jeans", Slot::Inferior)
                .with_short_name("jeans")
                .with_colors(&["blue"])
                .with_occasions(&["casual"])
                .with_climate(&[Mild, Cold])
                .with_seasons(&[Autumn, Spring, Winter])
                .with_description("Classic jeans that never fail"),
            GarmentRecord::new("inf_002", "Black Dress Pants", Slot::Inferior)
                .with_short_name("black pants")
                .with_colors(&["black"])
                .with_occasions(&["formal"])
                .with_climate(&[Mild, Cold])
                .with_seasons(&[Winter, Autumn])
                .with_fit(Fit::Fitted)
                .with_description("Elegant pants for formal occasions"),
            GarmentRecord::new("inf_003", "Beige Midi Skirt", Slot::Inferior)
                .with_short_name("beige skirt")
                .with_colors(&["beige"])
                .with_occasions(&["casual", "formal"])
                .with_climate(&[Hot, Mild])
                .with_seasons(&[Spring, Summer])
                .with_description("Versatile midi-length skirt"),
            GarmentRecord::new("inf_004", "White Shorts", Slot::Inferior)
                .with_short_name("white shorts")
                .with_colors(&["white"])
                .with_occasions(&["casual", "sport"])
                .with_climate(&[Hot])
                .with_seasons(&[Summer])
                .with_description("Fresh shorts for hot days"),
            GarmentRecord::new("ves_001", "Short Black Dress", Slot::Dress)
                .with_short_name("black dress")
                .with_colors(&["black"])
                .with_occasions(&["formal"])
                .with_climate(&[Mild, Hot])
                .with_seasons(&[Winter, Summer])
                .with_fit(Fit::Fitted)
                .with_description("The classic little black dress"),
            GarmentRecord::new("ves_002", "Pink Floral Dress", Slot::Dress)
                .with_short_name("floral dress")
                .with_colors(&["pink"])
                .with_occasions(&["casual"])
                .with_climate(&[Hot])
                .with_seasons(&[Spring, Summer])
                .with_description("Romantic dress with a floral print"),
            GarmentRecord::new("cal_001", "White Sneakers", Slot::Footwear)
                .with_short_name("sneakers")
                .with_colors(&["white"])
                .with_occasions(&["casual", "sport"])
                .with_climate(&[Hot, Mild])
                .with_seasons(&[Spring, Summer, Autumn])
                .with_description("Comfortable everyday sneakers"),
            GarmentRecord::new("cal_002", "Black Heels", Slot::Footwear)
                .with_short_name("heels")
                .with_colors(&["black"])
                .with_occasions(&["formal"])
                .with_climate(&[Mild])
                .with_seasons(&[Winter, Autumn, Spring])
                .with_fit(Fit::Fitted)
                .with_description("Elegant mid-height heels"),
            GarmentRecord::new("cal_003", "Brown Boots", Slot::Footwear)
                .with_short_name("boots")
                .with_colors(&["brown"])
                .with_occasions(&["casual"])
                .with_climate(&[Cold])
                .with_seasons(&[Autumn, Winter])
                .with_description("Comfortable boots for winter"),
            GarmentRecord::new("com_001", "Black Leather Handbag", Slot::Accessory)
                .with_short_name("black handbag")
                .with_colors(&["black"])
                .with_occasions(&["formal", "casual"])
                .with_climate(&[Mild, Cold])
                .with_seasons(&[Winter, Autumn])
                .with_description("Versatile bag for any occasion"),
            GarmentRecord::new("com_002", "Sunglasses", Slot::Accessory)
                .with_short_name("sunglasses")
                .with_colors(&["black"])
                .with_occasions(&["casual", "sport"])
                .with_climate(&[Hot])
                .with_seasons(&[Summer, Spring])
                .with_description("Aviator-style sunglasses"),
            GarmentRecord::new("com_003", "Gold Necklace", Slot::Accessory)
                .with_short_name("gold necklace")
                .with_colors(&["golden"])
                .with_occasions(&["formal"])
                .with_climate(&[Mild, Hot])
                .with_seasons(&[Spring, Summer])
                .with_description("Elegant necklace with a golden finish"),
        ];
        Self { items }
    }
}

impl GarmentStore for Catalog {
    fn source(&self) -> Source {
        Source::Catalog
    }

    fn query(
        &self,
        slot: Slot,
        occasion: &str,
        bucket: WeatherBucket,
        season: Option<Season>,
    ) -> Vec<GarmentRecord> {
        filter_records(&self.items, slot, occasion, bucket, season)
    }
}
