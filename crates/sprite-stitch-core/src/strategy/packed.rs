use tracing::warn;

use crate::error::Result;
use crate::layout::Layout;
use crate::model::SpriteItem;
use crate::packer::growing::{Block, GrowingBinPacker};

/// Tight packing via the growing binary-tree bin packer.
///
/// Items are fed to the packer sorted by descending height (ties broken by
/// ascending key, so equal inputs always pack identically); the canvas becomes the
/// packer's achieved bounding box. Items the packer cannot place are warned and
/// left out of the layout.
pub fn layout(items: &[SpriteItem]) -> Result<Layout> {
    let mut blocks: Vec<Block> = items
        .iter()
        .map(|it| Block::new(it.key.clone(), it.width, it.height))
        .collect();
    blocks.sort_by(|a, b| b.h.cmp(&a.h).then_with(|| a.key.cmp(&b.key)));

    let (width, height) = GrowingBinPacker::fit(&mut blocks)?;

    let mut layout = Layout::new();
    for block in &blocks {
        match block.fit {
            Some(p) => layout.set_item_coord(&block.key, p.x, p.y)?,
            None => warn!(
                key = %block.key,
                w = block.w,
                h = block.h,
                "packer could not place item; leaving it off the sheet"
            ),
        }
    }
    layout.set_dimensions(width, height);
    Ok(layout)
}
