//! Border-seeded background flood fill.
//!
//! Marks every pixel reachable from the image edge through
//! background-like pixels only. Foreground pixels act as walls, so
//! background areas fully enclosed by artwork (e.g. inside a window)
//! are *not* marked — which is what keeps them opaque downstream.

use std::collections::VecDeque;

use image::RgbaImage;

use super::classify::ClassifierParams;

/// Flat boolean visitation mask, one bit per pixel, indexed `y*w + x`.
///
/// A contiguous array rather than a hash set: O(1) access and the scan
/// loops walk it in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl VisitedMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.bits[idx] = true;
    }

    /// Number of marked pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// The 4-connected in-bounds neighbours of (x, y).
pub(crate) fn neighbours4(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    let candidates = [
        (x.wrapping_add(1), y),
        (x.wrapping_sub(1), y),
        (x, y.wrapping_add(1)),
        (x, y.wrapping_sub(1)),
    ];
    candidates
        .into_iter()
        .filter(move |&(nx, ny)| nx < width && ny < height)
}

/// Flood fill background-like pixels reachable from the image border.
///
/// Multi-source BFS seeded from every border pixel, expanding
/// 4-connected. A dequeued pixel that fails the background test is
/// dropped without being marked, so border-touching artwork stays
/// foreground. The explicit queue keeps large sheets off the call
/// stack.
pub fn flood_background(img: &RgbaImage, params: &ClassifierParams) -> VisitedMask {
    let (w, h) = img.dimensions();
    let mut mask = VisitedMask::new(w, h);
    if w == 0 || h == 0 {
        return mask;
    }

    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();

    // Seed each border pixel once: full top/bottom rows, then the side
    // columns minus the corners.
    for x in 0..w {
        queue.push_back((x, 0));
        if h > 1 {
            queue.push_back((x, h - 1));
        }
    }
    for y in 1..h.saturating_sub(1) {
        queue.push_back((0, y));
        if w > 1 {
            queue.push_back((w - 1, y));
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        if mask.get(x, y) {
            continue;
        }
        let p = img.get_pixel(x, y);
        if !params.is_background(p[0], p[1], p[2]) {
            continue;
        }
        mask.set(x, y);
        for (nx, ny) in neighbours4(x, y, w, h) {
            if !mask.get(nx, ny) {
                queue.push_back((nx, ny));
            }
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn params() -> ClassifierParams {
        ClassifierParams::default()
    }

    #[test]
    fn test_all_background_fully_marked() {
        let img = RgbaImage::from_pixel(10, 10, WHITE);
        let mask = flood_background(&img, &params());
        assert_eq!(mask.count(), 100);
    }

    #[test]
    fn test_all_foreground_unmarked() {
        let img = RgbaImage::from_pixel(8, 8, BLUE);
        let mask = flood_background(&img, &params());
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_foreground_block_excluded() {
        let mut img = RgbaImage::from_pixel(20, 20, WHITE);
        for y in 5..10 {
            for x in 5..10 {
                img.put_pixel(x, y, BLUE);
            }
        }
        let mask = flood_background(&img, &params());
        assert_eq!(mask.count(), 400 - 25);
        assert!(!mask.get(7, 7));
        assert!(mask.get(0, 0));
        assert!(mask.get(19, 19));
    }

    #[test]
    fn test_enclosed_background_not_reached() {
        // A blue ring around a white centre: the centre is background
        // coloured but unreachable from the border.
        let mut img = RgbaImage::from_pixel(9, 9, WHITE);
        for i in 2..7 {
            img.put_pixel(i, 2, BLUE);
            img.put_pixel(i, 6, BLUE);
            img.put_pixel(2, i, BLUE);
            img.put_pixel(6, i, BLUE);
        }
        let mask = flood_background(&img, &params());
        assert!(!mask.get(4, 4));
        assert!(mask.get(0, 4));
    }

    #[test]
    fn test_border_foreground_not_marked() {
        let mut img = RgbaImage::from_pixel(5, 5, WHITE);
        img.put_pixel(0, 0, BLUE);
        let mask = flood_background(&img, &params());
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
    }

    #[test]
    fn test_diagonal_gap_does_not_leak() {
        // Two foreground pixels touching only diagonally form a wall
        // with a diagonal "gap"; 4-connectivity does pass between them
        // horizontally/vertically but never through a shared corner.
        let mut img = RgbaImage::from_pixel(3, 3, BLUE);
        img.put_pixel(0, 0, WHITE);
        img.put_pixel(1, 1, WHITE);
        img.put_pixel(2, 2, WHITE);
        let mask = flood_background(&img, &params());
        // (0,0) is a border seed; (1,1) is only diagonally adjacent
        assert!(mask.get(0, 0));
        assert!(!mask.get(1, 1));
    }

    #[test]
    fn test_idempotent() {
        let mut img = RgbaImage::from_pixel(16, 16, WHITE);
        for y in 4..12 {
            for x in 4..12 {
                img.put_pixel(x, y, BLUE);
            }
        }
        let first = flood_background(&img, &params());
        let second = flood_background(&img, &params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_row_image() {
        let img = RgbaImage::from_pixel(6, 1, WHITE);
        let mask = flood_background(&img, &params());
        assert_eq!(mask.count(), 6);
    }

    #[test]
    fn test_single_pixel_image() {
        let img = RgbaImage::from_pixel(1, 1, WHITE);
        let mask = flood_background(&img, &params());
        assert!(mask.get(0, 0));
    }
}
