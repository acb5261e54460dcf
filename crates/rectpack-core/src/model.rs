use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    /// Returns true if `r` is fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

/// A rectangle to be packed, and the result of packing it.
///
/// `x`/`y` are only meaningful when `was_packed` is true.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackRect {
    /// 1-based identifier, unique within a run.
    pub id: u32,
    pub w: u32,
    pub h: u32,
    pub x: u32,
    pub y: u32,
    pub was_packed: bool,
}

impl PackRect {
    /// Unplaced rectangle of the given size.
    pub fn new(id: u32, w: u32, h: u32) -> Self {
        Self {
            id,
            w,
            h,
            x: 0,
            y: 0,
            was_packed: false,
        }
    }

    /// Placed area, if packed.
    pub fn placement(&self) -> Option<Rect> {
        self.was_packed
            .then(|| Rect::new(self.x, self.y, self.w, self.h))
    }

    pub(crate) fn place(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
        self.was_packed = true;
    }

    pub(crate) fn unplace(&mut self) {
        self.x = 0;
        self.y = 0;
        self.was_packed = false;
    }
}

/// Renders the per-rectangle report line printed after packing.
impl fmt::Display for PackRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.was_packed {
            write!(
                f,
                "id: {} [{}x{}] packed at ({}, {})",
                self.id, self.w, self.h, self.x, self.y
            )
        } else {
            write!(f, "id: {} [{}x{}] unable to pack", self.id, self.w, self.h)
        }
    }
}

/// Statistics about a packing pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    /// Number of rectangles submitted.
    pub num_rects: usize,
    pub num_packed: usize,
    pub num_unpacked: usize,
    /// Sum of packed rectangle areas.
    pub used_area: u64,
    /// Area of the bin (width * height).
    pub total_area: u64,
    /// Occupancy ratio: used_area / total_area (0.0 to 1.0).
    pub occupancy: f64,
}

impl PackStats {
    /// Computes statistics for `rects` packed into a `width` x `height` bin.
    pub fn from_rects(rects: &[PackRect], width: u32, height: u32) -> Self {
        let total_area = (width as u64) * (height as u64);
        let mut num_packed = 0;
        let mut used_area = 0u64;
        for r in rects.iter().filter(|r| r.was_packed) {
            num_packed += 1;
            used_area += (r.w as u64) * (r.h as u64);
        }
        let occupancy = if total_area > 0 {
            used_area as f64 / total_area as f64
        } else {
            0.0
        };
        Self {
            num_rects: rects.len(),
            num_packed,
            num_unpacked: rects.len() - num_packed,
            used_area,
            total_area,
            occupancy,
        }
    }

    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Rects: {}, Packed: {}, Unpacked: {}, Occupancy: {:.2}%, Used Area: {} px², Total Area: {} px²",
            self.num_rects,
            self.num_packed,
            self.num_unpacked,
            self.occupancy * 100.0,
            self.used_area,
            self.total_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.total_area.saturating_sub(self.used_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_match_format() {
        let mut r = PackRect::new(7, 12, 19);
        assert_eq!(r.to_string(), "id: 7 [12x19] unable to pack");
        r.place(40, 3);
        assert_eq!(r.to_string(), "id: 7 [12x19] packed at (40, 3)");
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
    }

    #[test]
    fn stats_count_only_packed() {
        let mut a = PackRect::new(1, 10, 10);
        a.place(0, 0);
        let b = PackRect::new(2, 20, 20);
        let s = PackStats::from_rects(&[a, b], 100, 100);
        assert_eq!(s.num_packed, 1);
        assert_eq!(s.num_unpacked, 1);
        assert_eq!(s.used_area, 100);
        assert_eq!(s.wasted_area(), 9_900);
        assert!((s.occupancy - 0.01).abs() < 1e-9);
    }
}
