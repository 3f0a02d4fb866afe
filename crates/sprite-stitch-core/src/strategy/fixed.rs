use crate::error::{Result, StitchError};
use crate::layout::Layout;
use crate::model::SpriteItem;

/// Uniform grid with `per_row` items per row.
///
/// Every cell is sized to the maximum width/height observed across all items (not a
/// tight pack); items fill the grid row-major in input order, so exact coordinates
/// are deterministic only under a stable input ordering. Canvas is always
/// `per_row * cell_w` wide and `ceil(k / per_row) * cell_h` tall.
pub fn layout(items: &[SpriteItem], per_row: u32) -> Result<Layout> {
    if per_row == 0 {
        return Err(StitchError::InvalidConfig(
            "items_per_row must be at least 1".into(),
        ));
    }
    let cell_w = items.iter().map(|it| it.width).max().unwrap_or(0);
    let cell_h = items.iter().map(|it| it.height).max().unwrap_or(0);

    let mut layout = Layout::new();
    for (i, item) in items.iter().enumerate() {
        let col = (i as u32) % per_row;
        let row = (i as u32) / per_row;
        layout.set_item_coord(&item.key, col * cell_w, row * cell_h)?;
    }

    let rows = (items.len() as u32).div_ceil(per_row);
    layout.set_dimensions(per_row * cell_w, rows * cell_h);
    Ok(layout)
}
