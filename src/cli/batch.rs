//! Batch command implementation.
//!
//! Runs the slicer over every sheet listed in a manifest. Sheets are
//! independent, so a missing or undecodable input skips that sheet with
//! a warning and the run continues.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, SnipError};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};

/// Slice every sheet listed in a manifest
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Manifest file (sheet filename -> output prefix mapping)
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest's)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write per-sheet JSON frame metadata
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BatchArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;

    if manifest.sheets.is_empty() {
        printer.warning("Warning", "Manifest lists no sheets");
        return Ok(());
    }

    // Sheet paths are relative to the manifest's directory
    let base = args
        .manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());

    let mut totals: Vec<(String, usize)> = Vec::new();
    let mut skipped = 0usize;

    for (file, prefix) in manifest.sheets_by_prefix() {
        let input = base.join(file);

        if !input.exists() {
            printer.warning("Skipping", &format!("{} (not found)", display_path(&input)));
            skipped += 1;
            continue;
        }

        match super::slice::slice_one(&input, prefix, &output, &manifest.slicer, args.json, printer)
        {
            Ok(count) => totals.push((prefix.to_string(), count)),
            Err(e @ SnipError::Decode { .. }) => {
                printer.error("Skipping", &format!("{}: {}", display_path(&input), e));
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let total: usize = totals.iter().map(|(_, n)| n).sum();
    printer.success(
        "Finished",
        &format!(
            "{} from {}",
            plural(total, "sprite", "sprites"),
            plural(totals.len(), "sheet", "sheets")
        ),
    );
    for (prefix, count) in &totals {
        printer.info(prefix, &plural(*count, "sprite", "sprites"));
    }
    if skipped > 0 {
        printer.warning("Skipped", &plural(skipped, "sheet", "sheets"));
    }

    Ok(())
}
