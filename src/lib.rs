//! snip - Spritesheet slicer
//!
//! A library for extracting individual sprites from composite
//! spritesheets: flood-fill background detection, connected-component
//! region extraction, proximity merging, and transparent cropping.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod report;

pub use error::{Result, SnipError};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use pipeline::{
    cut_sprite, find_regions, flood_background, merge_regions, slice_sheet, ClassifierParams,
    Region, SlicedSprite, SlicerConfig, VisitedMask,
};
pub use report::{write_report, SheetReport, SpriteFrame};
