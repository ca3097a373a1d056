//! Spritesheet segmentation pipeline.
//!
//! One sheet flows strictly forward through four stages: a border-seeded
//! flood fill classifies the background, connected-component labelling
//! finds candidate sprite regions, close regions merge into whole
//! sprites, and each surviving region is cropped with its background
//! punched out to transparent. The pipeline is pure with respect to the
//! filesystem; callers own decode, encode and reporting.

pub mod classify;
pub mod cutter;
pub mod mask;
pub mod regions;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

pub use classify::ClassifierParams;
pub use cutter::cut_sprite;
pub use mask::{flood_background, VisitedMask};
pub use regions::{find_regions, merge_regions, Region};

/// Tuning knobs for one slicing run.
///
/// Defaults match the values the pipeline was tuned with; they are
/// deliberately configuration, not constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Background colour thresholds.
    pub classifier: ClassifierParams,
    /// Minimum bounding-box side for a component to count as a sprite
    /// candidate.
    pub min_size: u32,
    /// Maximum distance between boxes that still merge.
    pub merge_gap: u32,
    /// Merged regions at or below this many foreground pixels are
    /// dropped as artifacts.
    pub min_pixels: u64,
    /// Transparent padding added around each crop.
    pub padding: u32,
    /// Row bucket height for reading-order sorting.
    pub row_bucket: u32,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierParams::default(),
            min_size: 30,
            merge_gap: 3,
            min_pixels: 500,
            padding: 2,
            row_bucket: 50,
        }
    }
}

/// One extracted sprite: the cropped transparent image, its output
/// name, and the padded, clamped box it was cut from.
pub struct SlicedSprite {
    pub name: String,
    pub image: RgbaImage,
    pub region: Region,
}

/// Drop artifact regions and sort survivors into reading order.
///
/// Regions at or below `min_pixels` foreground pixels go; the rest sort
/// by `(min_y / row_bucket, min_x)` — a coarse row bucket then
/// left-to-right, which approximates reading order without exact row
/// alignment across sprites of different heights.
pub fn filter_and_sort(mut regions: Vec<Region>, config: &SlicerConfig) -> Vec<Region> {
    regions.retain(|r| r.pixels > config.min_pixels);
    let bucket = config.row_bucket.max(1);
    regions.sort_by_key(|r| (r.min_y / bucket, r.min_x));
    regions
}

/// Slice one decoded sheet into named transparent sprites.
///
/// Sprites are named `{prefix}_{index:02}`, 1-based, in reading order.
/// An all-background sheet yields an empty vec; regions whose padded
/// box clamps to zero area are skipped.
pub fn slice_sheet(img: &RgbaImage, prefix: &str, config: &SlicerConfig) -> Vec<SlicedSprite> {
    let background = flood_background(img, &config.classifier);
    let regions = find_regions(&background, config.min_size);
    let regions = merge_regions(regions, config.merge_gap);
    let regions = filter_and_sort(regions, config);

    let (w, h) = img.dimensions();
    let mut sprites = Vec::with_capacity(regions.len());

    for (i, region) in regions.iter().enumerate() {
        let Some(image) = cut_sprite(img, region, config.padding, &config.classifier) else {
            continue;
        };
        let padded = Region {
            min_x: region.min_x.saturating_sub(config.padding),
            min_y: region.min_y.saturating_sub(config.padding),
            max_x: region.max_x.saturating_add(config.padding).min(w),
            max_y: region.max_y.saturating_add(config.padding).min(h),
            pixels: region.pixels,
        };
        sprites.push(SlicedSprite {
            name: format!("{}_{:02}", prefix, i + 1),
            image,
            region: padded,
        });
    }

    sprites
}
