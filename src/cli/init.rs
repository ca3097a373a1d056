//! Init command implementation.
//!
//! Generates a starter `sheets.yaml` manifest listing the image files
//! found in a directory, with placeholder prefixes derived from their
//! filenames.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SnipError};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, plural, Printer};

/// Image extensions picked up by `snip init`.
const SHEET_EXTENSIONS: &[&str] = &["png", "webp", "gif", "bmp"];

/// Initialize a snip project by generating a sheets.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing sheets.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(SnipError::Manifest {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));

    // Collect image files directly in the target directory
    let mut sheets: BTreeMap<String, String> = BTreeMap::new();
    let entries = fs::read_dir(&args.path).map_err(|e| SnipError::Io {
        path: args.path.clone(),
        message: format!("Failed to read directory: {}", e),
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if !ext.is_some_and(|e| SHEET_EXTENSIONS.contains(&e.as_str())) {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sheet")
            .to_string();
        sheets.insert(filename, stem);
    }

    // Build YAML manually for clean formatting and a helpful comment
    let mut yaml = String::new();
    yaml.push_str("# Map each spritesheet to an output name prefix, e.g.\n");
    yaml.push_str("#   example.webp: sheet01_example\n");
    if sheets.is_empty() {
        // "sheets:" with no entries would parse as null, not an empty map
        yaml.push_str("sheets: {}\n");
    } else {
        yaml.push_str("sheets:\n");
        for (file, prefix) in &sheets {
            yaml.push_str(&format!("  {}: {}\n", file, prefix));
        }
    }
    yaml.push_str("output: sliced\n");

    fs::write(&manifest_path, &yaml).map_err(|e| SnipError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(sheets.len(), "sheet", "sheets")
        ),
    );

    Ok(())
}
