use image::{DynamicImage, RgbaImage};
use tracing::instrument;

use crate::compositing::blit_rgba;
use crate::config::SheetConfig;
use crate::error::{Result, StitchError};
use crate::layout::Layout;
use crate::model::{Point, SpriteItem};
use crate::strategy::build_layout;
use crate::trim::content_bounds;

/// In-memory image to place on the sheet (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a stitch run: the finalized layout, the (possibly trimmed) item
/// records, and the composited RGBA sheet.
#[derive(Debug)]
pub struct SheetOutput {
    pub layout: Layout,
    pub items: Vec<SpriteItem>,
    pub rgba: RgbaImage,
}

/// Lays out `inputs` per `cfg` and composites them into a single RGBA sheet.
///
/// When `cfg.trim` is set, each image's transparent border is measured first and
/// only the content rectangle is packed and blitted. Grouping and ordering keys for
/// the DirectoryBased strategy are derived from the input key: the parent directory
/// and the full key respectively.
#[instrument(skip_all)]
pub fn stitch_images(inputs: Vec<InputImage>, cfg: SheetConfig) -> Result<SheetOutput> {
    cfg.validate()?;
    if inputs.is_empty() {
        return Err(StitchError::Empty);
    }

    struct Prep {
        item: SpriteItem,
        rgba: RgbaImage,
    }

    let mut prepared: Vec<Prep> = Vec::with_capacity(inputs.len());
    for inp in inputs {
        let rgba = inp.image.to_rgba8();
        let (iw, ih) = rgba.dimensions();
        let mut item = SpriteItem::new(inp.key.clone(), iw, ih);
        if cfg.trim {
            let bounds = content_bounds(&rgba, cfg.padding_alpha);
            if bounds.width() < iw || bounds.height() < ih {
                item.width = bounds.width();
                item.height = bounds.height();
                item.first_pixel = Some(Point::new(bounds.first_left, bounds.first_top));
            }
        }
        item.group = Some(parent_dir(&inp.key).to_string());
        item.order = Some(inp.key.clone());
        prepared.push(Prep { item, rgba });
    }

    let items: Vec<SpriteItem> = prepared.iter().map(|p| p.item.clone()).collect();
    let layout = build_layout(&items, &cfg)?;

    let mut canvas = RgbaImage::new(layout.width(), layout.height());
    for p in &prepared {
        if let Some(pos) = layout.get_item_coord(&p.item.key)? {
            let (sx, sy) = p
                .item
                .first_pixel
                .map(|fp| (fp.x, fp.y))
                .unwrap_or((0, 0));
            blit_rgba(
                &p.rgba,
                &mut canvas,
                pos.x,
                pos.y,
                sx,
                sy,
                p.item.width,
                p.item.height,
            );
        }
    }

    Ok(SheetOutput {
        layout,
        items,
        rgba: canvas,
    })
}

/// Layout-only path: computes placements from pre-measured items, no pixel data.
pub fn stitch_layout(
    items: Vec<SpriteItem>,
    cfg: SheetConfig,
) -> Result<(Layout, Vec<SpriteItem>)> {
    let layout = build_layout(&items, &cfg)?;
    Ok((layout, items))
}

/// Everything up to the last `/` of `key`, or the empty string for bare names.
fn parent_dir(key: &str) -> &str {
    key.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}
