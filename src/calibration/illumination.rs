//! Lightness normalization with contrast-limited adaptive equalization
//!
//! The image is split into a grid of tiles. Each tile gets a histogram
//! equalization lookup table whose histogram is clipped at a multiple
//! of the uniform bin height, with the clipped excess spread back over
//! all bins. Each pixel is then remapped by bilinear interpolation of the
//! four nearest tile tables. Only Lab lightness changes; a*/b* are kept.

use image::{Rgb, RgbImage};

use crate::color::{ColorConverter, LabColor};
use crate::config::IlluminationConfig;

const BINS: usize = 256;

/// Illumination normalizer applied ahead of region feature extraction
#[derive(Debug, Clone)]
pub struct IlluminationNormalizer {
    converter: ColorConverter,
    enabled: bool,
    clip_limit: f32,
    tile_grid: u32,
}

impl Default for IlluminationNormalizer {
    fn default() -> Self {
        Self::new(&IlluminationConfig::default())
    }
}

impl IlluminationNormalizer {
    pub fn new(config: &IlluminationConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            enabled: config.enabled,
            clip_limit: config.clip_limit,
            tile_grid: config.tile_grid.max(1),
        }
    }

    /// Return a lightness-normalized copy of `image`
    ///
    /// Disabled normalizers and empty images return an unchanged copy.
    pub fn normalize(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = image.dimensions();
        if !self.enabled || width == 0 || height == 0 {
            return image.clone();
        }

        let labs: Vec<LabColor> = image
            .pixels()
            .map(|p| self.converter.rgb_to_lab(p.0))
            .collect();
        let lightness: Vec<u8> = labs.iter().map(|c| c.l as u8).collect();

        let equalized = equalize_lightness(
            &lightness,
            width as usize,
            height as usize,
            self.clip_limit,
            self.tile_grid,
        );

        let mut output = RgbImage::new(width, height);
        for ((pixel, lab), l) in output.pixels_mut().zip(&labs).zip(equalized) {
            *pixel = Rgb(self.converter.lab_to_rgb(LabColor::new(l as f32, lab.a, lab.b)));
        }
        output
    }
}

/// Contrast-limited adaptive equalization of a single 8-bit plane
///
/// `plane` is row-major with `width * height` entries. A non-positive
/// `clip_limit` disables clipping (plain adaptive equalization).
pub fn equalize_lightness(
    plane: &[u8],
    width: usize,
    height: usize,
    clip_limit: f32,
    tile_grid: u32,
) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let grid = tile_grid.max(1) as usize;
    let tile_w = width.div_ceil(grid.min(width));
    let tile_h = height.div_ceil(grid.min(height));
    let tiles_x = width.div_ceil(tile_w);
    let tiles_y = height.div_ceil(tile_h);

    let mut luts = Vec::with_capacity(tiles_x * tiles_y);
    for ty in 0..tiles_y {
        let (y0, y1) = (ty * tile_h, ((ty + 1) * tile_h).min(height));
        for tx in 0..tiles_x {
            let (x0, x1) = (tx * tile_w, ((tx + 1) * tile_w).min(width));

            let mut hist = [0u32; BINS];
            for y in y0..y1 {
                for &v in &plane[y * width + x0..y * width + x1] {
                    hist[v as usize] += 1;
                }
            }
            let area = ((x1 - x0) * (y1 - y0)) as u32;
            luts.push(tile_lut(&mut hist, area, clip_limit));
        }
    }

    let mut output = vec![0u8; plane.len()];
    for y in 0..height {
        let (ty0, ty1, wy) = neighbours(y, tile_h, tiles_y);
        for x in 0..width {
            let (tx0, tx1, wx) = neighbours(x, tile_w, tiles_x);
            let idx = y * width + x;
            let v = plane[idx] as usize;

            let lut = |tx: usize, ty: usize| luts[ty * tiles_x + tx][v] as f32;
            let top = lut(tx0, ty0) * (1.0 - wx) + lut(tx1, ty0) * wx;
            let bottom = lut(tx0, ty1) * (1.0 - wx) + lut(tx1, ty1) * wx;

            output[idx] = (top * (1.0 - wy) + bottom * wy).round().clamp(0.0, 255.0) as u8;
        }
    }
    output
}

/// Tile indices bracketing a pixel coordinate and the weight of the second
fn neighbours(coord: usize, tile_len: usize, tiles: usize) -> (usize, usize, f32) {
    let pos = (coord as f32 + 0.5) / tile_len as f32 - 0.5;
    let first = (pos.floor().max(0.0) as usize).min(tiles - 1);
    let second = (first + 1).min(tiles - 1);
    let weight = if second == first {
        0.0
    } else {
        (pos - first as f32).clamp(0.0, 1.0)
    };
    (first, second, weight)
}

/// Clip a tile histogram and turn its cumulative sum into a lookup table
fn tile_lut(hist: &mut [u32; BINS], area: u32, clip_limit: f32) -> [u8; BINS] {
    if clip_limit > 0.0 {
        let limit = ((clip_limit * area as f32 / BINS as f32) as u32).max(1);

        let mut excess = 0u32;
        for bin in hist.iter_mut() {
            if *bin > limit {
                excess += *bin - limit;
                *bin = limit;
            }
        }

        let batch = excess / BINS as u32;
        let residual = (excess % BINS as u32) as usize;
        for bin in hist.iter_mut() {
            *bin += batch;
        }
        if residual > 0 {
            let step = (BINS / residual).max(1);
            for bin in hist.iter_mut().step_by(step).take(residual) {
                *bin += 1;
            }
        }
    }

    let scale = 255.0 / area.max(1) as f32;
    let mut lut = [0u8; BINS];
    let mut cumulative = 0u32;
    for (entry, &count) in lut.iter_mut().zip(hist.iter()) {
        cumulative += count;
        *entry = (cumulative as f32 * scale).round().min(255.0) as u8;
    }
    lut
}
