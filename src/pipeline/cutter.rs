//! Sprite cropping and transparency punch-out.

use image::{imageops, RgbaImage};

use super::classify::ClassifierParams;
use super::mask::flood_background;
use super::regions::Region;

/// Crop one region out of the sheet with `padding` on all sides and
/// make its background transparent.
///
/// Returns `None` when the padded, clamped box collapses to zero area
/// (a degenerate region must never reach the encoder).
///
/// The crop is an independent copy; the sheet stays untouched for the
/// remaining regions. The background fill runs again on the crop alone
/// rather than reusing the sheet-level mask: padding can pull in pixels
/// the sheet fill never visited, and their status has to be judged
/// against the crop's own border. Matched background pixels get alpha
/// zero with RGB left as-is.
pub fn cut_sprite(
    sheet: &RgbaImage,
    region: &Region,
    padding: u32,
    params: &ClassifierParams,
) -> Option<RgbaImage> {
    let (w, h) = sheet.dimensions();

    let x1 = region.min_x.saturating_sub(padding);
    let y1 = region.min_y.saturating_sub(padding);
    let x2 = region.max_x.saturating_add(padding).min(w);
    let y2 = region.max_y.saturating_add(padding).min(h);

    if x2 <= x1 || y2 <= y1 {
        return None;
    }

    let mut crop = imageops::crop_imm(sheet, x1, y1, x2 - x1, y2 - y1).to_image();

    let background = flood_background(&crop, params);
    for y in 0..crop.height() {
        for x in 0..crop.width() {
            if background.get(x, y) {
                crop.get_pixel_mut(x, y)[3] = 0;
            }
        }
    }

    Some(crop)
}
