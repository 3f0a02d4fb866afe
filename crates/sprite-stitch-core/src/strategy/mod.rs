use crate::config::{LayoutKind, SheetConfig};
use crate::error::{Result, StitchError};
use crate::layout::Layout;
use crate::model::SpriteItem;

pub mod directory;
pub mod fixed;
pub mod packed;

/// Runs the configured strategy over `items` and returns a finalized [`Layout`].
///
/// An empty item set is a hard error; everything else that goes wrong during
/// placement (an unplaceable item, say) is reported per item and the layout is
/// produced from whatever could be placed.
pub fn build_layout(items: &[SpriteItem], cfg: &SheetConfig) -> Result<Layout> {
    cfg.validate()?;
    if items.is_empty() {
        return Err(StitchError::Empty);
    }
    let mut layout = match cfg.layout {
        LayoutKind::Packed => packed::layout(items)?,
        LayoutKind::DirectoryBased => directory::layout(items)?,
        LayoutKind::FixedDimension => fixed::layout(items, cfg.items_per_row)?,
    };
    layout.finalize();
    Ok(layout)
}
