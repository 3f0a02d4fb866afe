use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Result, StitchError};
use crate::model::Point;

/// Mapping from item key to placed coordinate, plus overall canvas dimensions.
///
/// A `Layout` is populated by a strategy, then [`finalize`](Layout::finalize)d
/// exactly once; querying coordinates before finalization is a contract violation
/// and mutating after it is refused. Deleting an item leaves a hole — nothing is
/// ever re-laid-out.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    coords: BTreeMap<String, Point>,
    width: u32,
    height: u32,
    dims_set: bool,
    finalized: bool,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places (or re-places) `key` at `(x, y)`.
    pub fn set_item_coord(&mut self, key: impl Into<String>, x: u32, y: u32) -> Result<()> {
        self.ensure_mutable()?;
        self.coords.insert(key.into(), Point::new(x, y));
        Ok(())
    }

    /// Coordinate of `key`, or `Ok(None)` for an absent-but-valid key.
    ///
    /// Calling this before [`finalize`](Layout::finalize) is a programming error
    /// and reported as [`StitchError::NotFinalized`], distinct from "not found".
    pub fn get_item_coord(&self, key: &str) -> Result<Option<Point>> {
        if !self.finalized {
            return Err(StitchError::NotFinalized);
        }
        Ok(self.coords.get(key).copied())
    }

    /// Removes `key` from the layout. The freed area stays empty; other items keep
    /// their coordinates. Deleting an absent key is warned, not an error.
    pub fn delete_item(&mut self, key: &str) -> Result<()> {
        self.ensure_mutable()?;
        if self.coords.remove(key).is_none() {
            warn!(key, "delete_item: no such item in layout");
        }
        Ok(())
    }

    /// Translates every placed item by `(dx, dy)`.
    ///
    /// Coordinates are clamped at zero (with a warning) since placements cannot be
    /// negative; within that constraint `move_items(-dx, -dy)` is the exact inverse.
    pub fn move_items(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.ensure_mutable()?;
        for (key, p) in self.coords.iter_mut() {
            let nx = p.x as i64 + dx as i64;
            let ny = p.y as i64 + dy as i64;
            if nx < 0 || ny < 0 {
                warn!(%key, nx, ny, "move_items: clamping coordinate at 0");
            }
            p.x = nx.max(0) as u32;
            p.y = ny.max(0) as u32;
        }
        Ok(())
    }

    /// Copies every entry of `other` into this layout.
    ///
    /// Keys are expected to be disjoint; a colliding key is warned and the incoming
    /// coordinate wins. Canvas dimensions take the maximum of both layouts.
    pub fn merge_with(&mut self, other: &Layout) -> Result<()> {
        self.ensure_mutable()?;
        for (key, p) in other.coords.iter() {
            if self.coords.insert(key.clone(), *p).is_some() {
                warn!(%key, "merge_with: duplicate item key, keeping incoming coordinate");
            }
        }
        if other.dims_set {
            self.set_dimensions(self.width.max(other.width), self.height.max(other.height));
        }
        Ok(())
    }

    /// All item keys, in deterministic (sorted) order.
    pub fn item_keys(&self) -> Vec<&str> {
        self.coords.keys().map(|k| k.as_str()).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.coords.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.dims_set = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Flags the layout ready for querying. One-way: a second call is warned and
    /// ignored. A layout whose canvas dimensions were never set is warned too but
    /// stays usable with zero-valued dimensions.
    pub fn finalize(&mut self) {
        if self.finalized {
            warn!("finalize: layout already finalized");
            return;
        }
        if !self.dims_set {
            warn!("finalize: canvas dimensions were never set");
        }
        self.finalized = true;
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.finalized {
            Err(StitchError::Finalized)
        } else {
            Ok(())
        }
    }
}
