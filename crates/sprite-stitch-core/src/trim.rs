use image::RgbaImage;

/// Tight content bounding box of an image, measured against transparent padding.
///
/// All four fields are inclusive pixel coordinates in the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub first_left: u32,
    pub first_right: u32,
    pub first_top: u32,
    pub first_bottom: u32,
}

impl ContentBounds {
    /// Trimmed width (`first_right - first_left + 1`).
    pub fn width(&self) -> u32 {
        self.first_right - self.first_left + 1
    }
    /// Trimmed height (`first_bottom - first_top + 1`).
    pub fn height(&self) -> u32 {
        self.first_bottom - self.first_top + 1
    }
}

/// Computes the content bounding box of `rgba`, treating every pixel whose alpha
/// equals `padding_alpha` as padding.
///
/// Columns are scanned inward from the left and right edges at the same time, rows
/// likewise from the top and bottom; each scan stops as soon as both boundaries are
/// known, so shallow borders cost far less than a full O(W*H) pass. A fully
/// transparent image degenerates to the full frame (no trim). The source image is
/// never mutated.
pub fn content_bounds(rgba: &RgbaImage, padding_alpha: u8) -> ContentBounds {
    let (w, h) = rgba.dimensions();
    let mut bounds = ContentBounds {
        first_left: 0,
        first_right: w.saturating_sub(1),
        first_top: 0,
        first_bottom: h.saturating_sub(1),
    };
    if w == 0 || h == 0 {
        return bounds;
    }

    let column_has_content =
        |x: u32| (0..h).any(|y| rgba.get_pixel(x, y)[3] != padding_alpha);
    let row_has_content = |y: u32| (0..w).any(|x| rgba.get_pixel(x, y)[3] != padding_alpha);

    // Horizontal: walk both column cursors inward until each side hits content.
    let mut lo = 0u32;
    let mut hi = w - 1;
    let mut found_left = false;
    let mut found_right = false;
    while (!found_left || !found_right) && lo <= hi {
        if !found_left {
            if column_has_content(lo) {
                bounds.first_left = lo;
                found_left = true;
            } else {
                lo += 1;
            }
        }
        if !found_right && lo <= hi {
            if column_has_content(hi) {
                bounds.first_right = hi;
                found_right = true;
            } else if hi == 0 {
                break;
            } else {
                hi -= 1;
            }
        }
    }
    if !found_left {
        // No content anywhere: report the full frame rather than a negative trim.
        return ContentBounds {
            first_left: 0,
            first_right: w - 1,
            first_top: 0,
            first_bottom: h - 1,
        };
    }

    // Vertical: same inward walk over rows.
    let mut top = 0u32;
    let mut bottom = h - 1;
    let mut found_top = false;
    let mut found_bottom = false;
    while (!found_top || !found_bottom) && top <= bottom {
        if !found_top {
            if row_has_content(top) {
                bounds.first_top = top;
                found_top = true;
            } else {
                top += 1;
            }
        }
        if !found_bottom && top <= bottom {
            if row_has_content(bottom) {
                bounds.first_bottom = bottom;
                found_bottom = true;
            } else if bottom == 0 {
                break;
            } else {
                bottom -= 1;
            }
        }
    }

    bounds
}
