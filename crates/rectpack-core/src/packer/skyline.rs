use super::Packer;
use crate::config::SkylineHeuristic;
use crate::error::{RectPackError, Result};
use crate::model::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SkylineNode {
    x: u32,
    y: u32,
    w: u32,
}

impl SkylineNode {
    #[inline]
    fn right(&self) -> u32 {
        self.x + self.w
    }
}

/// Skyline bin packer.
///
/// The skyline is a left-to-right list of segments covering `[0, width)`; each segment records the
/// height of the packed content above it. The number of segments never exceeds `node_budget`.
#[derive(Debug, Clone)]
pub struct SkylinePacker {
    border: Rect,
    skylines: Vec<SkylineNode>,
    heuristic: SkylineHeuristic,
    node_budget: usize,
}

impl SkylinePacker {
    /// Creates an empty `width` x `height` bin.
    ///
    /// `node_budget` must be at least `width`: every segment is at least one pixel wide, so that
    /// many segments always suffice.
    pub fn new(
        width: u32,
        height: u32,
        node_budget: usize,
        heuristic: SkylineHeuristic,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RectPackError::InvalidDimensions { width, height });
        }
        if node_budget < width as usize {
            return Err(RectPackError::NodeBudget {
                nodes: node_budget,
                width,
            });
        }
        Ok(Self {
            border: Rect::new(0, 0, width, height),
            skylines: vec![SkylineNode {
                x: 0,
                y: 0,
                w: width,
            }],
            heuristic,
            node_budget,
        })
    }

    /// Number of skyline segments currently in use.
    pub fn node_count(&self) -> usize {
        self.skylines.len()
    }

    fn can_put(&self, mut i: usize, w: u32, h: u32) -> Option<Rect> {
        let x = self.skylines[i].x;
        if x.checked_add(w)? > self.border.right() {
            return None;
        }
        let mut rect = Rect::new(x, 0, w, h);
        let mut width_left = w;
        loop {
            rect.y = rect.y.max(self.skylines[i].y);
            if rect.y.checked_add(h)? > self.border.bottom() {
                return None;
            }
            if self.skylines[i].w >= width_left {
                return Some(rect);
            }
            width_left -= self.skylines[i].w;
            i += 1;
            if i >= self.skylines.len() {
                return None;
            }
        }
    }

    fn wasted_area_for(&self, start: usize, r: &Rect) -> u64 {
        let mut area: u64 = 0;
        let mut width_left = r.w;
        let mut i = start;
        while width_left > 0 && i < self.skylines.len() {
            let seg = &self.skylines[i];
            let use_w = width_left.min(seg.w);
            area += (r.y - seg.y) as u64 * use_w as u64;
            width_left -= use_w;
            i += 1;
        }
        area
    }

    fn find_skyline(&self, w: u32, h: u32) -> Option<(usize, Rect)> {
        if w > self.border.w || h > self.border.h {
            return None;
        }
        let mut best: Option<((u64, u64, u32), usize, Rect)> = None;
        for i in 0..self.skylines.len() {
            let Some(r) = self.can_put(i, w, h) else {
                continue;
            };
            let waste = self.wasted_area_for(i, &r);
            let bottom = r.bottom() as u64;
            let score = match self.heuristic {
                SkylineHeuristic::BottomLeft => (bottom, waste, r.x),
                SkylineHeuristic::BestFit => (waste, bottom, r.x),
            };
            if best.as_ref().is_none_or(|(s, _, _)| score < *s) {
                best = Some((score, i, r));
            }
        }
        best.map(|(_, i, r)| (i, r))
    }

    fn split(&mut self, index: usize, rect: &Rect) {
        let skyline = SkylineNode {
            x: rect.x,
            y: rect.bottom(),
            w: rect.w,
        };
        debug_assert!(skyline.right() <= self.border.right());
        debug_assert!(skyline.y <= self.border.bottom());

        self.skylines.insert(index, skyline);

        let i = index + 1;
        while i < self.skylines.len() {
            if self.skylines[i].x >= skyline.right() {
                break;
            }
            let shrink = skyline.right() - self.skylines[i].x;
            if self.skylines[i].w <= shrink {
                self.skylines.remove(i);
            } else {
                self.skylines[i].x += shrink;
                self.skylines[i].w -= shrink;
                break;
            }
        }
    }

    fn merge(&mut self) {
        let mut i = 1;
        while i < self.skylines.len() {
            if self.skylines[i - 1].y == self.skylines[i].y {
                let w = self.skylines[i].w;
                self.skylines[i - 1].w += w;
                self.skylines.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn commit(&mut self, index: usize, rect: &Rect) -> bool {
        if self.skylines.len() < self.node_budget {
            self.split(index, rect);
            self.merge();
            return true;
        }
        // At the budget: only accept placements that do not grow the skyline.
        let saved = self.skylines.clone();
        self.split(index, rect);
        self.merge();
        if self.skylines.len() > self.node_budget {
            self.skylines = saved;
            return false;
        }
        true
    }
}

impl Packer for SkylinePacker {
    fn can_pack(&self, w: u32, h: u32) -> bool {
        w > 0 && h > 0 && self.find_skyline(w, h).is_some()
    }

    fn pack(&mut self, w: u32, h: u32) -> Option<Rect> {
        if w == 0 || h == 0 {
            return None;
        }
        let (i, place) = self.find_skyline(w, h)?;
        self.commit(i, &place).then_some(place)
    }
}
