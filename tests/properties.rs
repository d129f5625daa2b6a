use image::{Rgb, RgbImage};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use season_wardrobe::outfit::{
    color_affinity, matches_tags, ExclusionFlags, GarmentMatcher, GenderHint, WeatherBucket,
};
use season_wardrobe::season::{classify_season, Level};
use season_wardrobe::{
    Catalog, ColorimetryAnalyzer, FixedRegions, GarmentRecord, OutfitComposer, OutfitConfig,
    OutfitConstraint, Region, Season, Slot,
};

const NAMES: &[&str] = &[
    "Black Heels",
    "Leather Handbag",
    "Gold Necklace",
    "Brown Boots",
    "Wool Scarf",
    "Beige Skirt",
    "Black Pants",
    "White Sneakers",
    "Navy Shirt",
    "Floral Dress",
];

const COLORS: &[&str] = &["black", "white", "navy", "coral", "golden", "olive", "burgundy"];

fn garment(index: usize, prefix: &'static str) -> impl Strategy<Value = GarmentRecord> {
    (
        select(Slot::ALL),
        select(NAMES),
        subsequence(COLORS.to_vec(), 1..=3),
        subsequence(vec!["formal", "casual", "sport"], 1..=3),
        subsequence(WeatherBucket::ALL.to_vec(), 0..=3),
        subsequence(Season::ALL.to_vec(), 0..=2),
    )
        .prop_map(move |(slot, name, colors, occasions, climate, seasons)| {
            GarmentRecord::new(format!("{}{}", prefix, index), name, slot)
                .with_colors(&colors)
                .with_occasions(&occasions)
                .with_climate(&climate)
                .with_seasons(&seasons)
        })
}

fn garments(prefix: &'static str, max: usize) -> impl Strategy<Value = Vec<GarmentRecord>> {
    (0..=max).prop_flat_map(move |len| (0..len).map(|i| garment(i, prefix)).collect::<Vec<_>>())
}

fn constraint() -> impl Strategy<Value = OutfitConstraint> {
    (
        select(vec!["formal", "casual", "sport"]),
        select(WeatherBucket::ALL),
        0u8..=100,
        -10.0f32..35.0,
        proptest::option::of(select(Season::ALL)),
        select(GenderHint::ALL),
        any::<[bool; 4]>(),
        subsequence(COLORS.to_vec(), 0..=3),
    )
        .prop_map(
            |(occasion, bucket, rain, temperature, season, gender, flags, palette)| {
                let mut constraint = OutfitConstraint::new(occasion)
                    .with_weather_bucket(bucket)
                    .with_gender(gender)
                    .with_exclusions(ExclusionFlags {
                        no_dress: flags[0],
                        no_skirt: flags[1],
                        no_pants: flags[2],
                        no_tops: flags[3],
                    });
                constraint.rain_probability = rain;
                constraint.temperature = temperature;
                constraint.season = season;
                constraint.palette_keywords = palette.iter().map(|c| c.to_string()).collect();
                constraint
            },
        )
}

fn level() -> impl Strategy<Value = Level> {
    select(Level::ALL)
}

proptest! {
    #[test]
    fn classification_follows_rule_table(
        warm in any::<bool>(),
        contrast in level(),
        saturation in level(),
        light in any::<bool>(),
    ) {
        let season = classify_season(warm, contrast, saturation, light);
        let expected = if warm {
            if saturation != Level::Low && light { Season::Spring } else { Season::Autumn }
        } else if contrast == Level::High || saturation == Level::High {
            Season::Winter
        } else {
            Season::Summer
        };
        prop_assert_eq!(season, expected);
        prop_assert_eq!(season.is_warm(), warm);
    }

    #[test]
    fn ranked_candidates_pass_tag_filter(
        candidates in garments("g", 12),
        slot in select(Slot::ALL),
        constraint in constraint(),
    ) {
        let config = OutfitConfig::default();
        let ranked = GarmentMatcher::new(&config).rank(slot, &constraint, candidates.clone());

        prop_assert!(ranked.len() <= candidates.len());
        for record in &ranked {
            prop_assert!(matches_tags(
                record,
                slot,
                &constraint.occasion,
                constraint.weather_bucket,
                constraint.season,
            ));
            prop_assert!(candidates.contains(record));
        }

        let scores: Vec<f32> = ranked
            .iter()
            .map(|r| color_affinity(r, &constraint.palette_keywords))
            .collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn unrestricted_rank_keeps_every_tag_match(
        candidates in garments("g", 12),
        slot in select(Slot::ALL),
        constraint in constraint(),
    ) {
        let config = OutfitConfig::default();
        let mut constraint = constraint
            .with_gender(GenderHint::Unspecified)
            .with_exclusions(ExclusionFlags::default());
        constraint.rain_probability = 0;
        constraint.temperature = 20.0;

        let expected = candidates
            .iter()
            .filter(|r| {
                matches_tags(
                    r,
                    slot,
                    &constraint.occasion,
                    constraint.weather_bucket,
                    constraint.season,
                )
            })
            .count();
        let ranked = GarmentMatcher::new(&config).rank(slot, &constraint, candidates);
        prop_assert_eq!(ranked.len(), expected);
    }

    #[test]
    fn masculine_preference_removes_feminine_names(
        candidates in garments("g", 12),
        slot in select(vec![Slot::Footwear, Slot::Accessory]),
        constraint in constraint(),
    ) {
        let config = OutfitConfig::default();
        let constraint = constraint.with_gender(GenderHint::Masculine);
        let keywords = match slot {
            Slot::Footwear => &config.feminine_keywords.footwear,
            _ => &config.feminine_keywords.accessory,
        };

        let ranked = GarmentMatcher::new(&config).rank(slot, &constraint, candidates);
        prop_assert!(ranked.iter().all(|r| !r.name_contains_any(keywords)));
    }

    #[test]
    fn composed_outfit_is_exclusive_and_complete(
        wardrobe in garments("item_", 10),
        catalog in garments("cat_", 10),
        constraint in constraint(),
    ) {
        let config = OutfitConfig::default();
        let wardrobe = Catalog::from_records(wardrobe).unwrap();
        let catalog = Catalog::from_records(catalog).unwrap();
        let outfit = OutfitComposer::new(&config).compose(&constraint, &[&wardrobe, &catalog]);

        let has_dress = outfit.dress.is_some();
        prop_assert!(!(has_dress && (outfit.superior.is_some() || outfit.inferior.is_some())));
        prop_assert!(has_dress || outfit.superior.is_some());
        prop_assert!(has_dress || outfit.inferior.is_some());
        prop_assert!(outfit.footwear.is_some());
        if has_dress {
            prop_assert!(!constraint.exclusions.no_dress);
        }
        for slot in Slot::ALL {
            if let Some(item) = outfit.get(*slot) {
                prop_assert_eq!(item.slot, *slot);
            }
        }
    }

    #[test]
    fn analysis_is_idempotent(
        seed in any::<u32>(),
        x in 0u32..32,
        y in 8u32..32,
        size in 16u32..32,
    ) {
        let image = RgbImage::from_fn(64, 64, |px, py| {
            let v = seed.wrapping_mul(px + 1).wrapping_add(py.wrapping_mul(2_654_435_761));
            Rgb([(v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8])
        });
        let locator = FixedRegions::new(
            vec![Region::new(x, y, size, size)],
            vec![Region::new(2, 4, size / 2, size / 3)],
        );
        let analyzer = ColorimetryAnalyzer::default();

        prop_assert_eq!(analyzer.analyze(&image, &locator), analyzer.analyze(&image, &locator));
    }
}
