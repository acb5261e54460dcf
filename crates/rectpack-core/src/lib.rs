//! Core library for generating, packing and drawing rectangles.
//!
//! - Generator: random rectangles from a seeded RNG
//! - Packer: skyline bin packing (bottom-left / best-fit) under a fixed node budget
//! - Canvas: RGBA outline rendering, written out as PNG
//!
//! Quick example:
//! ```ignore
//! use rectpack_core::prelude::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = RunConfig::builder().seed(Some(7)).output("packed.png").build();
//! let layout = run(&cfg, &mut std::io::stdout())?;
//! println!("{}", layout.stats.summary());
//! # Ok(()) }
//! ```

pub mod canvas;
pub mod config;
pub mod encode;
pub mod error;
pub mod generator;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use canvas::*;
pub use config::*;
pub use encode::*;
pub use error::*;
pub use generator::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `rectpack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::canvas::{Canvas, Vec2, render};
    pub use crate::config::{
        OutlineStyle, PackConfig, RunConfig, RunConfigBuilder, SkylineHeuristic, SortOrder,
    };
    pub use crate::encode::{encode_png, write_png};
    pub use crate::error::{RectPackError, Result};
    pub use crate::generator::{generate_rects, seeded_rng};
    pub use crate::model::{PackRect, PackStats, Rect};
    pub use crate::packer::{Packer, pack_rects, skyline::SkylinePacker};
    pub use crate::pipeline::{Layout, generate_and_pack, run};
}
