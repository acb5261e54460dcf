use std::io::{self, Write};

use tracing::{info, instrument};

use crate::canvas::{Canvas, render};
use crate::config::RunConfig;
use crate::encode::write_png;
use crate::error::Result;
use crate::generator::{generate_rects, seeded_rng};
use crate::model::{PackRect, PackStats};
use crate::packer::pack_rects;

/// Outcome of the generate and pack stages.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Rectangles in generation order, with placements filled in.
    pub rects: Vec<PackRect>,
    pub stats: PackStats,
    /// Seed the rectangles were generated from.
    pub seed: u64,
}

/// Generates `cfg.rect_count` rectangles and packs them. Writes nothing.
pub fn generate_and_pack(cfg: &RunConfig) -> Result<Layout> {
    cfg.validate()?;
    let (mut rng, seed) = seeded_rng(cfg.seed);
    let mut rects = generate_rects(cfg.rect_count, cfg.min_side, cfg.max_side, &mut rng);
    let stats = pack_rects(&cfg.pack_config(), &mut rects)?;
    Ok(Layout { rects, stats, seed })
}

/// Writes one report line per rectangle, in input order.
pub fn write_report<W: Write + ?Sized>(rects: &[PackRect], out: &mut W) -> io::Result<()> {
    for r in rects {
        writeln!(out, "{r}")?;
    }
    out.flush()
}

/// Renders the canvas for a packed layout.
pub fn render_layout(cfg: &RunConfig, layout: &Layout) -> Canvas {
    render(cfg.canvas_width, cfg.canvas_height, &layout.rects, cfg.outline)
}

/// Generates, packs, reports to `out`, renders and writes the PNG to `cfg.output`.
///
/// The report is written before the image so it is complete even when the write fails.
#[instrument(skip_all)]
pub fn run<W: Write + ?Sized>(cfg: &RunConfig, out: &mut W) -> Result<Layout> {
    let layout = generate_and_pack(cfg)?;
    info!(seed = layout.seed, "{}", layout.stats.summary());

    write_report(&layout.rects, out)?;

    let canvas = render_layout(cfg, &layout);
    write_png(&canvas, &cfg.output)?;
    info!(path = %cfg.output.display(), "image written");
    Ok(layout)
}
