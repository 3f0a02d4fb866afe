use sprite_stitch_core::config::{LayoutKind, SheetConfig};
use sprite_stitch_core::model::SpriteItem;
use sprite_stitch_core::strategy::build_layout;

fn cfg(n: u32) -> SheetConfig {
    SheetConfig {
        layout: LayoutKind::FixedDimension,
        items_per_row: n,
        ..Default::default()
    }
}

#[test]
fn seven_items_three_per_row() {
    // Cell size is the max width/height across all inputs: (20, 15).
    let sizes = [(10, 10), (20, 5), (8, 15), (6, 6), (12, 12), (4, 4), (20, 15)];
    let items: Vec<SpriteItem> = sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| SpriteItem::new(format!("i{i}"), w, h))
        .collect();

    let layout = build_layout(&items, &cfg(3)).unwrap();

    // ceil(7/3) = 3 rows; rows of 3, 3, 1
    for (i, _) in sizes.iter().enumerate() {
        let p = layout.get_item_coord(&format!("i{i}")).unwrap().unwrap();
        assert_eq!(p.x, (i as u32 % 3) * 20, "col of item {i}");
        assert_eq!(p.y, (i as u32 / 3) * 15, "row of item {i}");
    }
    assert_eq!(layout.width(), 3 * 20);
    assert_eq!(layout.height(), 3 * 15);
}

#[test]
fn exact_multiple_fills_the_grid() {
    let items: Vec<SpriteItem> = (0..6).map(|i| SpriteItem::new(format!("i{i}"), 7, 9)).collect();
    let layout = build_layout(&items, &cfg(2)).unwrap();
    assert_eq!(layout.width(), 2 * 7);
    assert_eq!(layout.height(), 3 * 9);
    let last = layout.get_item_coord("i5").unwrap().unwrap();
    assert_eq!((last.x, last.y), (7, 18));
}

#[test]
fn grid_is_deterministic_for_stable_input_order() {
    let items: Vec<SpriteItem> = (0..5).map(|i| SpriteItem::new(format!("i{i}"), 3, 3)).collect();
    let l1 = build_layout(&items, &cfg(4)).unwrap();
    let l2 = build_layout(&items, &cfg(4)).unwrap();
    for it in &items {
        assert_eq!(
            l1.get_item_coord(&it.key).unwrap(),
            l2.get_item_coord(&it.key).unwrap()
        );
    }
}

#[test]
fn zero_items_per_row_is_invalid_config() {
    let items = vec![SpriteItem::new("a", 1, 1)];
    assert!(matches!(
        build_layout(&items, &cfg(0)),
        Err(sprite_stitch_core::StitchError::InvalidConfig(_))
    ));
}
