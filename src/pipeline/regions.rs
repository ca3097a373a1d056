//! Sprite region extraction and merging.
//!
//! Connected-component labelling over foreground pixels (everything the
//! background fill did not reach), followed by proximity merging of the
//! resulting bounding boxes. Sprites drawn with detached parts (drop
//! shadows, antennae, outlines broken by antialiasing) come out of
//! labelling as several components; merging reassembles them.

use std::collections::VecDeque;

use super::mask::{neighbours4, VisitedMask};

/// A sprite candidate: an axis-aligned bounding box plus the number of
/// foreground pixels found inside it.
///
/// `max_x`/`max_y` are exclusive, so `width() == max_x - min_x`.
/// `pixels` is only ever summed during merges, never recomputed from
/// box area, so it stays an exact foreground count for sparse sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixels: u64,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// True when the boxes overlap or lie within `gap` pixels of each
    /// other on both axes.
    fn is_near(&self, other: &Region, gap: u32) -> bool {
        self.min_x.saturating_sub(gap) <= other.max_x
            && self.max_x + gap >= other.min_x
            && self.min_y.saturating_sub(gap) <= other.max_y
            && self.max_y + gap >= other.min_y
    }

    /// Grow this region to the union of both boxes, summing counts.
    fn absorb(&mut self, other: &Region) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
        self.pixels += other.pixels;
    }
}

/// Label connected foreground components and return their regions.
///
/// Row-major sweep; every unvisited pixel outside `background` starts a
/// 4-connected BFS that collects one component, tracking its bounding
/// box and pixel count. Components whose box is narrower or shorter
/// than `min_size` are noise (stray antialiasing fragments) and are
/// discarded, though their pixels stay visited. The two masks together
/// ensure each pixel is examined once, so the whole pass is O(w*h).
///
/// Returned order is discovery order, top-left first; callers impose
/// their own ordering.
pub fn find_regions(background: &VisitedMask, min_size: u32) -> Vec<Region> {
    let (w, h) = (background.width(), background.height());
    let mut labelled = VisitedMask::new(w, h);
    let mut regions = Vec::new();
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            if background.get(x, y) || labelled.get(x, y) {
                continue;
            }

            let (mut min_x, mut min_y) = (x, y);
            let (mut max_x, mut max_y) = (x, y);
            let mut pixels: u64 = 0;

            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                if background.get(cx, cy) || labelled.get(cx, cy) {
                    continue;
                }
                labelled.set(cx, cy);
                pixels += 1;

                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for (nx, ny) in neighbours4(cx, cy, w, h) {
                    if !background.get(nx, ny) && !labelled.get(nx, ny) {
                        queue.push_back((nx, ny));
                    }
                }
            }

            let region = Region {
                min_x,
                min_y,
                max_x: max_x + 1,
                max_y: max_y + 1,
                pixels,
            };
            if region.width() >= min_size && region.height() >= min_size {
                regions.push(region);
            }
        }
    }

    regions
}

/// Merge regions that overlap or sit within `gap` pixels of each other.
///
/// Iterates full pairwise passes until a pass makes no merge. A single
/// pass is not enough: with A near B and B near C but A far from C, the
/// A-C union only appears after B has been absorbed. Region counts per
/// sheet are small (tens), so the quadratic passes are cheap.
pub fn merge_regions(mut regions: Vec<Region>, gap: u32) -> Vec<Region> {
    loop {
        let mut merged_any = false;
        let mut consumed = vec![false; regions.len()];
        let mut next: Vec<Region> = Vec::with_capacity(regions.len());

        for i in 0..regions.len() {
            if consumed[i] {
                continue;
            }
            let mut acc = regions[i];
            for j in (i + 1)..regions.len() {
                if consumed[j] {
                    continue;
                }
                if acc.is_near(&regions[j], gap) {
                    acc.absorb(&regions[j]);
                    consumed[j] = true;
                    merged_any = true;
                }
            }
            next.push(acc);
        }

        regions = next;
        if !merged_any {
            return regions;
        }
    }
}
