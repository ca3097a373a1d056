//! JSON frame metadata for sliced sheets.
//!
//! Written next to the sprite PNGs when `--json` is passed, so game
//! tooling can map each sprite back to its location on the source
//! sheet.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SnipError};
use crate::pipeline::SlicedSprite;

/// Report for one sliced sheet.
#[derive(Debug, Serialize)]
pub struct SheetReport {
    pub sheet: String,
    pub width: u32,
    pub height: u32,
    pub sprites: Vec<SpriteFrame>,
}

/// One sprite's padded, clamped box on the source sheet.
#[derive(Debug, Serialize)]
pub struct SpriteFrame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    /// Exact foreground pixel count, not box area.
    pub pixels: u64,
}

impl SheetReport {
    pub fn new(sheet: &str, width: u32, height: u32, sprites: &[SlicedSprite]) -> Self {
        let frames = sprites
            .iter()
            .map(|s| SpriteFrame {
                name: s.name.clone(),
                x: s.region.min_x,
                y: s.region.min_y,
                w: s.region.width(),
                h: s.region.height(),
                pixels: s.region.pixels,
            })
            .collect();

        Self {
            sheet: sheet.to_string(),
            width,
            height,
            sprites: frames,
        }
    }
}

/// Write a sheet report as pretty-printed JSON.
pub fn write_report(report: &SheetReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| SnipError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize sheet report: {}", e),
    })?;
    fs::write(path, json).map_err(|e| SnipError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet report: {}", e),
    })?;
    Ok(())
}
