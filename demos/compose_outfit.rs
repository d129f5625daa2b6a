//! Command-line demo for season_wardrobe
//!
//! Composes an outfit from the standard catalog (or a JSON catalog) for a
//! season or an analyzed portrait, and prints the result as JSON.

use season_wardrobe::image_loader::{is_supported_extension, supported_extensions};
use season_wardrobe::outfit::{ExclusionFlags, GenderHint, WeatherConditions};
use season_wardrobe::{
    AnalysisError, AppearanceProfile, Catalog, ColorimetryAnalyzer, ComposedOutfit, FixedRegions,
    OutfitComposer, OutfitConstraint, PaletteBook, Region, Season, StylistConfig,
};
use serde::Serialize;
use std::{env, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Options {
    season: Option<Season>,
    portrait: Option<PathBuf>,
    face: Option<Region>,
    occasion: String,
    temperature: f32,
    rain: u8,
    gender: GenderHint,
    exclusions: ExclusionFlags,
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<&'a AppearanceProfile>,
    outfit: &'a ComposedOutfit,
    summary: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    };

    if let Err(error) = run(&options) {
        eprintln!("Outfit composition failed: {}", error);
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), AnalysisError> {
    let config = match &options.config {
        Some(path) => StylistConfig::from_json_file(path)?,
        None => StylistConfig::default(),
    };
    let catalog = match &options.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::standard(),
    };
    let palettes = PaletteBook::standard();

    let profile = match &options.portrait {
        Some(path) => {
            let locator = FixedRegions::new(options.face.into_iter().collect(), vec![]);
            let analyzer = ColorimetryAnalyzer::new(&config, palettes.clone());
            Some(analyzer.analyze_path(path, &locator)?)
        }
        None => None,
    };

    let weather = WeatherConditions::new(options.temperature, options.rain)?;
    let base = match &profile {
        Some(profile) => OutfitConstraint::for_profile(&options.occasion, profile),
        None => {
            let season = options.season.unwrap_or(Season::Spring);
            OutfitConstraint::new(&options.occasion).with_palette(palettes.get(season))
        }
    };
    let constraint = base
        .with_weather(weather)
        .with_gender(options.gender)
        .with_exclusions(options.exclusions);

    let outfit = OutfitComposer::new(&config.outfit).compose(&constraint, &[&catalog]);
    let report = Report {
        season: constraint.season.unwrap_or(Season::Spring),
        profile: profile.as_ref(),
        outfit: &outfit,
        summary: outfit.summary(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    eprintln!();
    eprintln!("Outfit: {}", report.summary);
    if outfit.uses_placeholders() {
        eprintln!("  Note: some slots use placeholder garments. Add items to the catalog for better results.");
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        occasion: "casual".to_string(),
        temperature: 20.0,
        ..Options::default()
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };

        match flag {
            "--season" => options.season = Some(value()?.parse().map_err(|e: AnalysisError| e.to_string())?),
            "--portrait" => options.portrait = Some(PathBuf::from(value()?)),
            "--face" => options.face = Some(parse_region(&value()?)?),
            "--occasion" => options.occasion = value()?,
            "--temperature" => {
                options.temperature = value()?
                    .parse()
                    .map_err(|_| "Temperature must be a number".to_string())?
            }
            "--rain" => {
                options.rain = value()?
                    .parse()
                    .map_err(|_| "Rain probability must be 0-100".to_string())?
            }
            "--gender" => options.gender = value()?.parse().map_err(|e: AnalysisError| e.to_string())?,
            "--catalog" => options.catalog = Some(PathBuf::from(value()?)),
            "--config" => options.config = Some(PathBuf::from(value()?)),
            "--no-dress" => options.exclusions.no_dress = true,
            "--no-skirt" => options.exclusions.no_skirt = true,
            "--no-pants" => options.exclusions.no_pants = true,
            "--no-tops" => options.exclusions.no_tops = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    if let Some(path) = &options.portrait {
        if options.face.is_none() {
            return Err("--portrait requires --face x,y,width,height".to_string());
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !is_supported_extension(ext) {
            return Err(format!(
                "Unsupported portrait format '{}' (expected one of: {})",
                path.display(),
                supported_extensions().join(", ")
            ));
        }
    }
    Ok(options)
}

fn parse_region(text: &str) -> Result<Region, String> {
    let parts: Vec<u32> = text
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("Invalid face box '{}'", text))?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Region::new(*x, *y, *w, *h)),
        _ => Err(format!("Face box needs four values, got '{}'", text)),
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Compose a palette-aware outfit and print it as JSON.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --season NAME          Spring, Summer, Autumn or Winter (default: Spring)");
    eprintln!("  --portrait FILE        Analyze a portrait instead of naming a season");
    eprintln!("  --face X,Y,W,H         Face box in the portrait");
    eprintln!("  --occasion NAME        formal, casual or sport (default: casual)");
    eprintln!("  --temperature C        Temperature in Celsius (default: 20)");
    eprintln!("  --rain PERCENT         Rain probability (default: 0)");
    eprintln!("  --gender NAME          feminine, masculine or unspecified");
    eprintln!("  --no-dress, --no-skirt, --no-pants, --no-tops");
    eprintln!("                         Exclude garment families");
    eprintln!("  --catalog FILE         JSON garment catalog (default: built-in)");
    eprintln!("  --config FILE          JSON stylist configuration");
    eprintln!("  --help, -h             Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=season_wardrobe=debug to trace slot resolution.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --season Winter --occasion formal --temperature 8 --rain 70", program_name);
    eprintln!("  {} --portrait me.jpg --face 120,160,240,240 --no-dress", program_name);
}
