//! Slice command implementation.
//!
//! Loads one spritesheet, runs the segmentation pipeline, and writes
//! each extracted sprite as a transparent PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use image::RgbaImage;

use crate::error::{Result, SnipError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{slice_sheet, SlicedSprite, SlicerConfig};
use crate::report::{write_report, SheetReport};

/// Slice a spritesheet into individual sprite PNGs
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Spritesheet image to slice
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output name prefix (default: input filename stem)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output directory for sliced sprites
    #[arg(long, short, default_value = "sliced")]
    pub output: PathBuf,

    /// Transparent padding around each sprite, in pixels
    #[arg(long, default_value = "2")]
    pub padding: u32,

    /// Maximum gap between regions that still merge
    #[arg(long, default_value = "3")]
    pub gap: u32,

    /// Minimum bounding-box side for a sprite candidate
    #[arg(long, default_value = "30")]
    pub min_size: u32,

    /// Drop sprites with this many foreground pixels or fewer
    #[arg(long, default_value = "500")]
    pub min_pixels: u64,

    /// Also write {prefix}.json frame metadata
    #[arg(long)]
    pub json: bool,
}

impl SliceArgs {
    fn config(&self) -> SlicerConfig {
        SlicerConfig {
            padding: self.padding,
            merge_gap: self.gap,
            min_size: self.min_size,
            min_pixels: self.min_pixels,
            ..SlicerConfig::default()
        }
    }
}

/// Load a spritesheet as an RGBA buffer.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SnipError::Io {
            path: path.to_path_buf(),
            message: format!("File not found: {}", display_path(path)),
        });
    }

    let img = image::open(path)
        .map_err(|e| SnipError::Decode {
            path: path.to_path_buf(),
            message: format!("Failed to decode image: {}", e),
        })?
        .to_rgba8();

    Ok(img)
}

/// Write sliced sprites into the output directory as PNGs.
pub fn save_sprites(sprites: &[SlicedSprite], output: &Path, printer: &Printer) -> Result<()> {
    for sprite in sprites {
        let path = output.join(format!("{}.png", sprite.name));
        sprite.image.save(&path).map_err(|e| SnipError::Io {
            path: path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;
        printer.info(
            "Saved",
            &format!(
                "{} ({}x{}px)",
                display_path(&path),
                sprite.image.width(),
                sprite.image.height()
            ),
        );
    }
    Ok(())
}

/// Slice one sheet and write its sprites (and optional JSON report).
/// Returns the number of sprites written.
pub fn slice_one(
    input: &Path,
    prefix: &str,
    output: &Path,
    config: &SlicerConfig,
    json: bool,
    printer: &Printer,
) -> Result<usize> {
    printer.status("Processing", &display_path(input));

    let img = load_sheet(input)?;
    let sprites = slice_sheet(&img, prefix, config);

    printer.info("Found", &plural(sprites.len(), "sprite", "sprites"));

    if !output.exists() {
        fs::create_dir_all(output).map_err(|e| SnipError::Io {
            path: output.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    save_sprites(&sprites, output, printer)?;

    if json {
        let sheet_name = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sheet")
            .to_string();
        let report = SheetReport::new(&sheet_name, img.width(), img.height(), &sprites);
        let report_path = output.join(format!("{}.json", prefix));
        write_report(&report, &report_path)?;
        printer.info("Wrote", &display_path(&report_path));
    }

    Ok(sprites.len())
}

pub fn run(args: SliceArgs, printer: &Printer) -> Result<()> {
    let prefix = args.prefix.clone().unwrap_or_else(|| {
        args.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sheet")
            .to_string()
    });

    let count = slice_one(
        &args.input,
        &prefix,
        &args.output,
        &args.config(),
        args.json,
        printer,
    )?;

    printer.success(
        "Finished",
        &format!(
            "{} -> {}",
            plural(count, "sprite", "sprites"),
            display_path(&args.output)
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn write_test_sheet(path: &Path) {
        let mut img = RgbaImage::from_pixel(100, 100, WHITE);
        for y in 10..50 {
            for x in 10..50 {
                img.put_pixel(x, y, BLUE);
            }
        }
        img.save(path).unwrap();
    }

    fn args(input: PathBuf, output: PathBuf) -> SliceArgs {
        SliceArgs {
            input,
            prefix: None,
            output,
            padding: 2,
            gap: 3,
            min_size: 30,
            min_pixels: 500,
            json: false,
        }
    }

    #[test]
    fn test_slice_writes_sprites() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("houses.png");
        let out = dir.path().join("out");
        write_test_sheet(&sheet);

        run(args(sheet, out.clone()), &Printer::new()).unwrap();

        let sprite_path = out.join("houses_01.png");
        assert!(sprite_path.exists());

        let sprite = image::open(&sprite_path).unwrap().to_rgba8();
        assert_eq!((sprite.width(), sprite.height()), (44, 44));
        // Padding corner is transparent, interior opaque blue
        assert_eq!(sprite.get_pixel(0, 0)[3], 0);
        assert_eq!(sprite.get_pixel(20, 20).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_slice_with_explicit_prefix() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("input.png");
        let out = dir.path().join("out");
        write_test_sheet(&sheet);

        let mut a = args(sheet, out.clone());
        a.prefix = Some("buildings".to_string());
        run(a, &Printer::new()).unwrap();

        assert!(out.join("buildings_01.png").exists());
    }

    #[test]
    fn test_slice_writes_json_report() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("houses.png");
        let out = dir.path().join("out");
        write_test_sheet(&sheet);

        let mut a = args(sheet, out.clone());
        a.json = true;
        run(a, &Printer::new()).unwrap();

        let report: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(out.join("houses.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(report["sheet"], "houses.png");
        assert_eq!(report["sprites"][0]["name"], "houses_01");
        assert_eq!(report["sprites"][0]["x"], 8);
        assert_eq!(report["sprites"][0]["pixels"], 1600);
    }

    #[test]
    fn test_slice_missing_input() {
        let dir = tempdir().unwrap();
        let result = run(
            args(dir.path().join("absent.png"), dir.path().join("out")),
            &Printer::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_slice_undecodable_input() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("broken.png");
        fs::write(&sheet, b"not a png").unwrap();

        let result = run(args(sheet, dir.path().join("out")), &Printer::new());
        assert!(matches!(result, Err(SnipError::Decode { .. })));
    }

    #[test]
    fn test_slice_empty_sheet_writes_nothing() {
        let dir = tempdir().unwrap();
        let sheet = dir.path().join("blank.png");
        let out = dir.path().join("out");
        RgbaImage::from_pixel(10, 10, WHITE).save(&sheet).unwrap();

        run(args(sheet, out.clone()), &Printer::new()).unwrap();

        let entries: Vec<_> = fs::read_dir(&out).unwrap().collect();
        assert!(entries.is_empty());
    }
}
