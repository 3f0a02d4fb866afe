use crate::error::Result;
use crate::layout::Layout;
use crate::model::SpriteItem;

/// One row of sprites per source directory.
///
/// Items are sorted by (group, order) ascending — missing keys sort as empty
/// strings — and laid out left to right; a change of group drops the cursor to a
/// fresh row. Rows are never packed against each other and items are never
/// reordered beyond the ordering key.
pub fn layout(items: &[SpriteItem]) -> Result<Layout> {
    let mut sorted: Vec<&SpriteItem> = items.iter().collect();
    sorted.sort_by(|a, b| {
        let ka = (a.group.as_deref().unwrap_or(""), a.order.as_deref().unwrap_or(""));
        let kb = (b.group.as_deref().unwrap_or(""), b.order.as_deref().unwrap_or(""));
        ka.cmp(&kb)
    });

    let mut layout = Layout::new();
    let mut x = 0u32;
    let mut y = 0u32;
    let mut row_height = 0u32;
    let mut width = 0u32;
    let mut current_group: Option<&str> = None;

    for item in sorted {
        let group = item.group.as_deref().unwrap_or("");
        if current_group.is_some_and(|g| g != group) {
            y += row_height;
            x = 0;
            row_height = 0;
        }
        current_group = Some(group);

        layout.set_item_coord(&item.key, x, y)?;
        x += item.width;
        width = width.max(x);
        row_height = row_height.max(item.height);
    }

    layout.set_dimensions(width, y + row_height);
    Ok(layout)
}
