use sprite_stitch_core::{Layout, Result, SpriteItem};

/// Turns an item key (usually a path) into a usable CSS class name.
///
/// Lowercases, maps every non-alphanumeric run to a single `-`, strips the file
/// extension, and prefixes a `s-` when the name would start with a digit or be
/// empty.
pub fn class_name(key: &str) -> String {
    let stem = key
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(key);
    let stem = stem.rsplit_once('.').map(|(s, _)| s).unwrap_or(stem);

    let mut out = String::with_capacity(stem.len());
    let mut last_dash = true;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "s-");
    }
    out
}

/// Renders one CSS rule per placed item, in the classic sprite-sheet shape:
/// `background-position` is the negated coordinate, width/height the (possibly
/// trimmed) item size.
pub fn stylesheet(layout: &Layout, items: &[SpriteItem], sheet_url: &str) -> Result<String> {
    let mut css = String::new();
    for item in items {
        let Some(p) = layout.get_item_coord(&item.key)? else {
            continue;
        };
        css.push_str(&format!(
            ".{} {{ background: url('{}') no-repeat -{}px -{}px; width: {}px; height: {}px; }}\n",
            class_name(&item.key),
            sheet_url,
            p.x,
            p.y,
            item.width,
            item.height,
        ));
    }
    Ok(css)
}
