use serde::{Deserialize, Serialize};

/// A placed coordinate (pixels, top-left origin).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    /// Returns true if `self` and `other` share any area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// One source image to place on the sheet.
///
/// `key` is the opaque identity, unique within a single layout run (typically the
/// source path). `width`/`height` are the dimensions handed to the layout engine,
/// i.e. the trimmed content size when border trimming ran. Constructed once from a
/// decoded image's measured dimensions; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteItem {
    pub key: String,
    pub width: u32,
    pub height: u32,
    /// Offset of the first visible pixel in the original image when padding was
    /// trimmed; `None` when the item was not trimmed.
    pub first_pixel: Option<Point>,
    /// Grouping key (e.g. parent directory). Only the DirectoryBased strategy reads it.
    pub group: Option<String>,
    /// Ordering key (e.g. full path). Only the DirectoryBased strategy reads it.
    pub order: Option<String>,
}

impl SpriteItem {
    /// A bare item with no trim offsets or directory keys.
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
            first_pixel: None,
            group: None,
            order: None,
        }
    }
}
