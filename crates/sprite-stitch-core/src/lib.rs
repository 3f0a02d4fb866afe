//! Core library for laying out CSS sprite sheets.
//!
//! - Layout strategies: Packed (growing binary-tree bin packer), DirectoryBased (one row
//!   per source directory), FixedDimension (uniform grid with a fixed column count)
//! - Border trimming: transparent padding is measured and removed before layout
//! - Pipeline: `stitch_images` takes in-memory images and returns a composited sheet
//!   plus a finalized [`Layout`] mapping each item key to its coordinate.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sprite_stitch_core::{InputImage, SheetConfig, stitch_images};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("icons/a.png")?.decode()?;
//! let img2 = ImageReader::open("icons/b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "icons/a.png".into(), image: img1 },
//!   InputImage { key: "icons/b.png".into(), image: img2 },
//! ];
//! let out = stitch_images(inputs, SheetConfig::default())?;
//! println!("sheet: {}x{}", out.layout.width(), out.layout.height());
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod trim;

pub use config::*;
pub use error::*;
pub use export::*;
pub use layout::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;
pub use trim::*;

pub mod strategy;

/// Convenience prelude for common types and functions.
/// Importing `sprite_stitch_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{LayoutKind, SheetConfig, SheetConfigBuilder};
    pub use crate::layout::Layout;
    pub use crate::model::{Point, Rect, SpriteItem};
    pub use crate::packer::growing::{Block, GrowingBinPacker};
    pub use crate::strategy::build_layout;
    pub use crate::trim::{ContentBounds, content_bounds};
    pub use crate::{InputImage, SheetOutput, stitch_images, stitch_layout};
}
