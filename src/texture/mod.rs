//! Texture synthesis: aesthetic profile → palette/motifs → procedural
//! layers → style → (optionally) rasterized pixels.

pub mod palette;
pub mod plan;
pub mod procedural;
pub mod profile;
pub mod raster;
pub mod style;

pub use palette::{PaletteFamily, Rgb};
pub use plan::{synthesize, synthesize_all, FinalTexturePlan};
pub use procedural::{DetailKind, DetailLayer, NoiseKind};
pub use profile::{AestheticProfile, AnimationHint, MaterialHint, OverlayHint};
pub use raster::{rasterize, PixelBuffer};
pub use style::{StyleKind, StyleParams};
