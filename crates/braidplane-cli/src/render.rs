//! Raster scatter rendering for embedded braid words.
//!
//! This module intentionally lives in the CLI crate: it is presentation
//! tooling, and the core crate stays a pure-function library. The viewport is
//! fixed to x, y ∈ [−2, 2] because the geometric embedding is strictly inside
//! that square regardless of word length.

use anyhow::{bail, Result};
use image::{Rgb, RgbImage};

/// Viewport half-width in world coordinates.
const VIEWPORT: f64 = 2.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, Copy)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Component count of the word this point came from, in {1, 2, 3}.
    pub components: u8,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Square canvas edge length in pixels.
    pub size_px: u32,
    /// Square marker edge length in pixels.
    pub marker_px: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size_px: 1500,
            marker_px: 2,
        }
    }
}

/// Qualitative palette keyed by component count (Set1 hues).
pub fn color_for_components(components: u8) -> Rgb<u8> {
    match components {
        1 => Rgb([228, 26, 28]),
        2 => Rgb([55, 126, 184]),
        3 => Rgb([77, 175, 74]),
        // Out-of-range classes are a caller bug; gray keeps them visible.
        _ => Rgb([153, 153, 153]),
    }
}

/// Render one square marker per point onto a white canvas.
pub fn render_scatter(points: &[ScatterPoint], options: &RenderOptions) -> Result<RgbImage> {
    if options.size_px == 0 {
        bail!("canvas size must be positive");
    }
    if options.marker_px == 0 {
        bail!("marker size must be positive");
    }

    let size = options.size_px;
    let marker = options.marker_px as i64;
    let mut img = RgbImage::from_pixel(size, size, BACKGROUND);

    for p in points {
        let color = color_for_components(p.components);
        let (cx, cy) = to_pixel(p.x, p.y, size);
        // Markers near the canvas edge are clipped, not skipped.
        for dy in 0..marker {
            for dx in 0..marker {
                let px = cx - marker / 2 + dx;
                let py = cy - marker / 2 + dy;
                if (0..size as i64).contains(&px) && (0..size as i64).contains(&py) {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }

    Ok(img)
}

/// World → raster coordinates. Raster y grows downward.
fn to_pixel(x: f64, y: f64, size: u32) -> (i64, i64) {
    let scale = size as f64 / (2.0 * VIEWPORT);
    let px = ((x + VIEWPORT) * scale).floor() as i64;
    let py = ((VIEWPORT - y) * scale).floor() as i64;
    (px, py)
}
