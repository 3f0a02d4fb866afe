use sprite_stitch_core::layout::Layout;
use sprite_stitch_core::model::Point;
use sprite_stitch_core::StitchError;

fn sample_layout() -> Layout {
    let mut l = Layout::new();
    l.set_item_coord("a", 0, 0).unwrap();
    l.set_item_coord("b", 10, 0).unwrap();
    l.set_item_coord("c", 0, 20).unwrap();
    l.set_dimensions(30, 40);
    l
}

#[test]
fn query_before_finalize_is_a_contract_violation() {
    let l = sample_layout();
    match l.get_item_coord("a") {
        Err(StitchError::NotFinalized) => {}
        other => panic!("expected NotFinalized, got {other:?}"),
    }
}

#[test]
fn absent_id_is_not_an_error_after_finalize() {
    let mut l = sample_layout();
    l.finalize();
    assert_eq!(l.get_item_coord("nope").unwrap(), None);
    assert_eq!(l.get_item_coord("a").unwrap(), Some(Point::new(0, 0)));
}

#[test]
fn get_item_coord_is_idempotent() {
    let mut l = sample_layout();
    l.finalize();
    let first = l.get_item_coord("b").unwrap();
    let second = l.get_item_coord("b").unwrap();
    assert_eq!(first, second);
}

#[test]
fn mutation_after_finalize_is_refused() {
    let mut l = sample_layout();
    l.finalize();
    assert!(matches!(
        l.set_item_coord("d", 1, 1),
        Err(StitchError::Finalized)
    ));
    assert!(matches!(l.delete_item("a"), Err(StitchError::Finalized)));
    assert!(matches!(l.move_items(1, 1), Err(StitchError::Finalized)));
}

#[test]
fn delete_leaves_a_hole_and_other_items_untouched() {
    let mut l = sample_layout();
    l.delete_item("b").unwrap();
    // deleting an absent id again only warns
    l.delete_item("b").unwrap();
    l.finalize();

    assert_eq!(l.item_keys(), vec!["a", "c"]);
    assert_eq!(l.get_item_coord("b").unwrap(), None);
    assert_eq!(l.get_item_coord("a").unwrap(), Some(Point::new(0, 0)));
    assert_eq!(l.get_item_coord("c").unwrap(), Some(Point::new(0, 20)));
}

#[test]
fn move_items_translates_everything_and_inverts() {
    let mut l = sample_layout();
    l.move_items(5, 7).unwrap();
    l.move_items(-5, -7).unwrap();
    l.finalize();
    assert_eq!(l.get_item_coord("a").unwrap(), Some(Point::new(0, 0)));
    assert_eq!(l.get_item_coord("b").unwrap(), Some(Point::new(10, 0)));
    assert_eq!(l.get_item_coord("c").unwrap(), Some(Point::new(0, 20)));
}

#[test]
fn move_items_shifts_by_exact_delta() {
    let mut l = sample_layout();
    l.move_items(3, 4).unwrap();
    l.finalize();
    assert_eq!(l.get_item_coord("a").unwrap(), Some(Point::new(3, 4)));
    assert_eq!(l.get_item_coord("b").unwrap(), Some(Point::new(13, 4)));
    assert_eq!(l.get_item_coord("c").unwrap(), Some(Point::new(3, 24)));
}

#[test]
fn merge_is_last_write_wins_on_collision() {
    let mut a = sample_layout();
    let mut b = Layout::new();
    b.set_item_coord("b", 99, 99).unwrap();
    b.set_item_coord("d", 1, 2).unwrap();
    b.set_dimensions(120, 10);

    a.merge_with(&b).unwrap();
    a.finalize();

    assert_eq!(a.get_item_coord("b").unwrap(), Some(Point::new(99, 99)));
    assert_eq!(a.get_item_coord("d").unwrap(), Some(Point::new(1, 2)));
    // dims take the max of both layouts
    assert_eq!((a.width(), a.height()), (120, 40));
}

#[test]
fn finalize_without_dimensions_is_non_fatal() {
    let mut l = Layout::new();
    l.set_item_coord("a", 0, 0).unwrap();
    l.finalize();
    // warned, but usable with zero-valued dimensions
    assert_eq!((l.width(), l.height()), (0, 0));
    assert_eq!(l.get_item_coord("a").unwrap(), Some(Point::new(0, 0)));
}

#[test]
fn finalize_is_one_way() {
    let mut l = sample_layout();
    l.finalize();
    assert!(l.is_finalized());
    l.finalize(); // second call warns and is ignored
    assert!(l.is_finalized());
}
