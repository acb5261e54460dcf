use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{RectPackError, Result};

/// Default canvas (and bin) width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 256;
/// Default canvas (and bin) height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 256;
/// Default skyline node budget.
pub const DEFAULT_NODE_BUDGET: usize = 256;
/// Default number of generated rectangles.
pub const DEFAULT_RECT_COUNT: usize = 100;
/// Smallest generated side (inclusive).
pub const DEFAULT_MIN_SIDE: u32 = 10;
/// Largest generated side (exclusive).
pub const DEFAULT_MAX_SIDE: u32 = 24;
/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "packed.png";

const _: () = assert!(DEFAULT_NODE_BUDGET >= DEFAULT_CANVAS_WIDTH as usize);

/// Skyline placement heuristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkylineHeuristic {
    /// Lowest top edge first; ties go to the least wasted area, then leftmost.
    BottomLeft,
    /// Least wasted area under the rectangle; ties go to the lowest top edge.
    BestFit,
}

impl FromStr for SkylineHeuristic {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bl" | "bottomleft" | "bottom_left" => Ok(Self::BottomLeft),
            "bf" | "bestfit" | "best_fit" => Ok(Self::BestFit),
            _ => Err(()),
        }
    }
}

/// Order in which rectangles are offered to the packer.
/// Results are always written back in input order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    HeightDesc,
    AreaDesc,
    MaxSideDesc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "height_desc" => Ok(Self::HeightDesc),
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// How outline points are stamped onto the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutlineStyle {
    /// 3x3 block around every interpolated point.
    Thick,
    /// Single pixel per interpolated point.
    Thin,
}

impl FromStr for OutlineStyle {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thick" => Ok(Self::Thick),
            "thin" => Ok(Self::Thin),
            _ => Err(()),
        }
    }
}

/// Packer-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackConfig {
    pub width: u32,
    pub height: u32,
    /// Maximum number of skyline segments; must be >= `width`.
    pub node_budget: usize,
    pub heuristic: SkylineHeuristic,
    pub sort_order: SortOrder,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            node_budget: DEFAULT_NODE_BUDGET,
            heuristic: default_heuristic(),
            sort_order: default_sort_order(),
        }
    }
}

impl PackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RectPackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.node_budget < self.width as usize {
            return Err(RectPackError::NodeBudget {
                nodes: self.node_budget,
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Settings for a whole generate -> pack -> render -> write run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Canvas width in pixels; also the bin width.
    pub canvas_width: u32,
    /// Canvas height in pixels; also the bin height.
    pub canvas_height: u32,
    /// Skyline node budget (>= canvas_width).
    pub node_budget: usize,
    /// Number of rectangles to generate.
    pub rect_count: usize,
    /// Smallest side, inclusive.
    pub min_side: u32,
    /// Largest side, exclusive.
    pub max_side: u32,

    #[serde(default = "default_heuristic")]
    pub heuristic: SkylineHeuristic,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
    #[serde(default = "default_outline")]
    pub outline: OutlineStyle,

    /// RNG seed. None derives one from the wall clock.
    #[serde(default)]
    pub seed: Option<u64>,
    /// PNG destination.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            node_budget: DEFAULT_NODE_BUDGET,
            rect_count: DEFAULT_RECT_COUNT,
            min_side: DEFAULT_MIN_SIDE,
            max_side: DEFAULT_MAX_SIDE,
            heuristic: default_heuristic(),
            sort_order: default_sort_order(),
            outline: default_outline(),
            seed: None,
            output: default_output(),
        }
    }
}

impl RunConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - Canvas dimensions are zero
    /// - The node budget is smaller than the canvas width
    /// - The side range is empty or starts at zero
    pub fn validate(&self) -> Result<()> {
        self.pack_config().validate()?;

        if self.min_side == 0 {
            return Err(RectPackError::InvalidConfig(
                "min_side must be positive".into(),
            ));
        }
        if self.min_side >= self.max_side {
            return Err(RectPackError::InvalidConfig(format!(
                "side range [{}, {}) is empty",
                self.min_side, self.max_side
            )));
        }
        if u32::try_from(self.rect_count).is_err() {
            let msg = format!("rect_count {} exceeds u32::MAX", self.rect_count);
            return Err(RectPackError::InvalidConfig(msg));
        }
        if self.output.as_os_str().is_empty() {
            return Err(RectPackError::InvalidConfig("output path is empty".into()));
        }
        Ok(())
    }

    /// The subset of settings the packer needs.
    pub fn pack_config(&self) -> PackConfig {
        PackConfig {
            width: self.canvas_width,
            height: self.canvas_height,
            node_budget: self.node_budget,
            heuristic: self.heuristic,
            sort_order: self.sort_order,
        }
    }

    /// Create a fluent builder for `RunConfig`.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }
}

fn default_heuristic() -> SkylineHeuristic {
    SkylineHeuristic::BottomLeft
}
fn default_sort_order() -> SortOrder {
    SortOrder::HeightDesc
}
fn default_outline() -> OutlineStyle {
    OutlineStyle::Thick
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Builder for `RunConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct RunConfigBuilder {
    cfg: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: RunConfig::default(),
        }
    }
    pub fn with_canvas(mut self, w: u32, h: u32) -> Self {
        self.cfg.canvas_width = w;
        self.cfg.canvas_height = h;
        self
    }
    pub fn node_budget(mut self, v: usize) -> Self {
        self.cfg.node_budget = v;
        self
    }
    pub fn rect_count(mut self, v: usize) -> Self {
        self.cfg.rect_count = v;
        self
    }
    pub fn side_range(mut self, min: u32, max: u32) -> Self {
        self.cfg.min_side = min;
        self.cfg.max_side = max;
        self
    }
    pub fn heuristic(mut self, v: SkylineHeuristic) -> Self {
        self.cfg.heuristic = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn outline(mut self, v: OutlineStyle) -> Self {
        self.cfg.outline = v;
        self
    }
    pub fn seed(mut self, v: Option<u64>) -> Self {
        self.cfg.seed = v;
        self
    }
    pub fn output(mut self, v: impl Into<PathBuf>) -> Self {
        self.cfg.output = v.into();
        self
    }
    pub fn build(self) -> RunConfig {
        self.cfg
    }
}
