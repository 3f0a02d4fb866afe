use serde_json::{Value, json};

use crate::error::Result;
use crate::layout::Layout;
use crate::model::SpriteItem;

/// Serialize a finalized layout as a JSON object keyed by item name.
///
/// Shape: `{ "width", "height", "items": { key: { x, y, w, h } } }`. Items without
/// a coordinate (e.g. unplaceable ones) are omitted.
pub fn layout_to_json(layout: &Layout, items: &[SpriteItem]) -> Result<Value> {
    let mut map = serde_json::Map::new();
    for item in items {
        if let Some(p) = layout.get_item_coord(&item.key)? {
            map.insert(
                item.key.clone(),
                json!({
                    "x": p.x,
                    "y": p.y,
                    "w": item.width,
                    "h": item.height,
                }),
            );
        }
    }
    Ok(json!({
        "width": layout.width(),
        "height": layout.height(),
        "items": Value::Object(map),
    }))
}
