use std::cmp::Reverse;

use tracing::{debug, instrument};

use crate::config::{PackConfig, SortOrder};
use crate::error::Result;
use crate::model::{PackRect, PackStats, Rect};

pub mod skyline;

use skyline::SkylinePacker;

/// A packer places rectangles into a fixed-size bin.
///
/// Implementations must ensure no overlaps and keep every placement inside the bin.
/// `pack` returns `None` if the rectangle cannot be placed; the packer state is then unchanged.
pub trait Packer {
    fn can_pack(&self, w: u32, h: u32) -> bool;
    fn pack(&mut self, w: u32, h: u32) -> Option<Rect>;
}

/// Packs `rects` in place with a skyline packer built from `cfg`.
///
/// Every rectangle ends up either placed (`was_packed`, `x`, `y` set) or marked unpacked.
/// The slice keeps its input order; `cfg.sort_order` only decides the order of placement.
#[instrument(skip_all, fields(count = rects.len()))]
pub fn pack_rects(cfg: &PackConfig, rects: &mut [PackRect]) -> Result<PackStats> {
    cfg.validate()?;
    let mut packer = SkylinePacker::new(cfg.width, cfg.height, cfg.node_budget, cfg.heuristic)?;
    pack_with(&mut packer, cfg.sort_order, rects);
    Ok(PackStats::from_rects(rects, cfg.width, cfg.height))
}

/// Runs `packer` over `rects` in `order`, writing results back in place.
///
/// Zero-sized rectangles occupy no space and are placed at the origin.
pub fn pack_with<P: Packer + ?Sized>(packer: &mut P, order: SortOrder, rects: &mut [PackRect]) {
    for idx in placement_order(rects, order) {
        let r = &mut rects[idx];
        if r.w == 0 || r.h == 0 {
            r.place(0, 0);
            continue;
        }
        match packer.pack(r.w, r.h) {
            Some(place) => r.place(place.x, place.y),
            None => {
                r.unplace();
                debug!(id = r.id, w = r.w, h = r.h, "unable to pack");
            }
        }
    }
}

/// Indices of `rects` in the order they should be offered to the packer. Stable.
pub fn placement_order(rects: &[PackRect], order: SortOrder) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..rects.len()).collect();
    match order {
        SortOrder::HeightDesc => idx.sort_by_key(|&i| Reverse((rects[i].h, rects[i].w))),
        SortOrder::AreaDesc => idx.sort_by_key(|&i| {
            let r = &rects[i];
            Reverse(r.w as u64 * r.h as u64)
        }),
        SortOrder::MaxSideDesc => idx.sort_by_key(|&i| {
            let r = &rects[i];
            Reverse((r.w.max(r.h), r.w.min(r.h)))
        }),
        SortOrder::None => {}
    }
    idx
}
