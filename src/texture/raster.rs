//! Deterministic rasterization of a texture plan.
//!
//! Pixels come from value noise: the seeded hash sampled on an integer
//! lattice and bilinearly interpolated, modulated by per-layer effects,
//! then palette-indexed. Everything derives from the seed hash; two runs
//! with the same plan and seed produce byte-identical buffers.

use crate::core::config::config;
use crate::core::hash::{hash_str, lattice_unit};
use crate::texture::plan::FinalTexturePlan;
use crate::texture::procedural::DetailKind;

/// Raw RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

/// Lattice cell size in pixels for the base noise octave.
const BASE_CELL: u32 = 4;

/// Rasterize a plan into a pixel buffer.
pub fn rasterize(plan: &FinalTexturePlan, seed: &str) -> PixelBuffer {
    let size = config().texture_resolution;
    let base = hash_str(
        seed,
        &format!("raster:{}/{}", plan.category, plan.entity_id),
    );

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let mut value = sample_bilinear(base, x, y, BASE_CELL, 0);

            for (i, layer) in plan.layers.iter().enumerate() {
                let layer_index = (i + 1) as u32;
                let intensity = layer.intensity;
                match layer.kind {
                    // Drips bias toward a vertical gradient.
                    DetailKind::Drip => {
                        let gradient = y as f64 / size.max(1) as f64;
                        value += 0.35 * intensity * gradient;
                    }
                    // Veins add high-frequency noise.
                    DetailKind::Veins => {
                        let fine = lattice_unit(base, x as i64, y as i64, layer_index);
                        value += 0.3 * intensity * (fine - 0.5);
                    }
                    // Frost biases toward the top edge.
                    DetailKind::Frost => {
                        let gradient = 1.0 - y as f64 / size.max(1) as f64;
                        value += 0.25 * intensity * gradient;
                    }
                    // Cracks carve thin dark lines.
                    DetailKind::Crack => {
                        let fine = lattice_unit(base, x as i64, y as i64, layer_index);
                        if fine < 0.06 {
                            value -= 0.4 * intensity;
                        }
                    }
                    DetailKind::Noise => {
                        let mid = sample_bilinear(base, x, y, BASE_CELL / 2, layer_index);
                        value += 0.2 * intensity * (mid - 0.5);
                    }
                    // Sparkles brighten after palette indexing; nothing here.
                    DetailKind::Sparkle => {}
                }
            }

            let value = value.clamp(0.0, 0.999_999);
            let index = (value * plan.palette.len() as f64) as usize;
            let color = plan.palette[index.min(plan.palette.len() - 1)];
            let mut r = color.r as f32 / 255.0;
            let mut g = color.g as f32 / 255.0;
            let mut b = color.b as f32 / 255.0;

            // Style grading: contrast around mid-gray, then saturation
            // around luma.
            let params = plan.style_params;
            for c in [&mut r, &mut g, &mut b] {
                *c = ((*c - 0.5) * params.contrast + 0.5).clamp(0.0, 1.0);
            }
            let luma = 0.299 * r + 0.587 * g + 0.114 * b;
            for c in [&mut r, &mut g, &mut b] {
                *c = (luma + (*c - luma) * params.saturation).clamp(0.0, 1.0);
            }

            // Sparkle layers brighten pixels above a noise threshold.
            for (i, layer) in plan.layers.iter().enumerate() {
                if layer.kind == DetailKind::Sparkle {
                    let fine = lattice_unit(base, x as i64, y as i64, (i + 1) as u32);
                    if fine > 0.85 {
                        let boost = 0.4 * layer.intensity as f32;
                        for c in [&mut r, &mut g, &mut b] {
                            *c = (*c + boost).clamp(0.0, 1.0);
                        }
                    }
                }
            }

            let (r, g, b) = quantize(r, g, b, plan.vanilla_safe);
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }

    PixelBuffer {
        width: size,
        height: size,
        pixels,
    }
}

/// Bilinear interpolation of lattice noise at pixel coordinates.
fn sample_bilinear(base: u64, x: u32, y: u32, cell: u32, layer: u32) -> f64 {
    let cell = cell.max(1) as f64;
    let fx = x as f64 / cell;
    let fy = y as f64 / cell;
    let x0 = fx.floor() as i64;
    let y0 = fy.floor() as i64;
    let tx = fx - x0 as f64;
    let ty = fy - y0 as f64;

    let v00 = lattice_unit(base, x0, y0, layer);
    let v10 = lattice_unit(base, x0 + 1, y0, layer);
    let v01 = lattice_unit(base, x0, y0 + 1, layer);
    let v11 = lattice_unit(base, x0 + 1, y0 + 1, layer);

    let top = v00 + (v10 - v00) * tx;
    let bottom = v01 + (v11 - v01) * tx;
    top + (bottom - top) * ty
}

/// Convert back to bytes, applying the vanilla-safe clamp when requested:
/// a minimum channel spread keeps pixels away from pure extremes so
/// generated art sits alongside the platform's existing textures.
fn quantize(r: f32, g: f32, b: f32, vanilla_safe: bool) -> (u8, u8, u8) {
    let mut r = (r * 255.0).round() as i32;
    let mut g = (g * 255.0).round() as i32;
    let mut b = (b * 255.0).round() as i32;

    if vanilla_safe {
        let spread = config().vanilla_safe_min_spread as i32;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max - min < spread {
            // Re-anchor the brightest channel high enough that the darkest
            // can sit a full spread below it without leaving 0..255.
            let hi = max.max(spread).min(255);
            let lo = hi - spread;
            if max == min {
                // Pure gray: tint warm deterministically.
                r = hi;
                g = g.clamp(lo, hi);
                b = lo;
            } else {
                for c in [&mut r, &mut g, &mut b] {
                    if *c == max {
                        *c = hi;
                    } else if *c == min {
                        *c = lo;
                    } else {
                        *c = (*c).clamp(lo, hi);
                    }
                }
            }
        }
    }

    (
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    )
}
