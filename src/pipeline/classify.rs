//! Background pixel classification.
//!
//! Spritesheets exported from art tools sit on a near-white or light
//! checkerboard backdrop. Both checker tones are close to neutral grey,
//! so a pixel is treated as background when it is bright and its
//! channels are close together.

use serde::{Deserialize, Serialize};

/// Thresholds for the background classifier.
///
/// These are empirically tuned for near-white/light-grey checker
/// backdrops (~255 and ~237 tones); they are carried as configuration
/// rather than constants so unusual sheets can override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    /// Minimum average channel intensity (exclusive) for background.
    pub min_intensity: u8,
    /// Maximum channel spread (exclusive) for background.
    pub max_spread: u8,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            min_intensity: 225,
            max_spread: 12,
        }
    }
}

impl ClassifierParams {
    /// Classify a colour as background-like.
    ///
    /// True when the average of (r, g, b) exceeds `min_intensity` and
    /// max-minus-min channel spread is below `max_spread`. Alpha plays
    /// no part in classification. Pure and total over all inputs.
    pub fn is_background(&self, r: u8, g: u8, b: u8) -> bool {
        // Compare the channel sum against 3x the threshold so the
        // average test is exact, with no integer-division rounding.
        let sum = r as u16 + g as u16 + b as u16;
        let spread = r.max(g).max(b) - r.min(g).min(b);
        sum > 3 * self.min_intensity as u16 && spread < self.max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(r: u8, g: u8, b: u8) -> bool {
        ClassifierParams::default().is_background(r, g, b)
    }

    #[test]
    fn test_white_is_background() {
        assert!(classify(255, 255, 255));
    }

    #[test]
    fn test_checker_grey_is_background() {
        // The darker checkerboard tone
        assert!(classify(237, 237, 237));
    }

    #[test]
    fn test_dark_pixel_is_foreground() {
        assert!(!classify(0, 0, 0));
        assert!(!classify(120, 120, 120));
    }

    #[test]
    fn test_bright_saturated_pixel_is_foreground() {
        // Bright but strongly coloured: spread too wide
        assert!(!classify(255, 240, 230));
        assert!(!classify(255, 255, 200));
    }

    #[test]
    fn test_intensity_boundary() {
        // avg == 225 exactly is not background; one step above is
        assert!(!classify(225, 225, 225));
        assert!(classify(226, 226, 226));
        // sum 676 > 675 even though 676/3 truncates to 225
        assert!(classify(226, 225, 225));
    }

    #[test]
    fn test_spread_boundary() {
        // spread == 12 exactly is not background; 11 is
        assert!(!classify(255, 250, 243));
        assert!(classify(255, 250, 244));
    }

    #[test]
    fn test_channel_permutation_symmetry() {
        // Classification depends only on the multiset of channels
        let triples = [(250u8, 244u8, 255u8), (230, 228, 235), (255, 200, 210)];
        for (r, g, b) in triples {
            let expected = classify(r, g, b);
            assert_eq!(classify(r, b, g), expected);
            assert_eq!(classify(g, r, b), expected);
            assert_eq!(classify(g, b, r), expected);
            assert_eq!(classify(b, r, g), expected);
            assert_eq!(classify(b, g, r), expected);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let loose = ClassifierParams {
            min_intensity: 100,
            max_spread: 200,
        };
        assert!(loose.is_background(120, 150, 130));
        assert!(!loose.is_background(90, 90, 90));
    }
}
