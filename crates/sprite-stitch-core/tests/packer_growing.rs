use sprite_stitch_core::StitchError;
use sprite_stitch_core::model::Rect;
use sprite_stitch_core::packer::growing::{Block, GrowingBinPacker};

fn placed_rects(blocks: &[Block]) -> Vec<Rect> {
    blocks
        .iter()
        .filter_map(|b| b.fit.map(|p| Rect::new(p.x, p.y, b.w, b.h)))
        .collect()
}

fn disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                return false;
            }
        }
    }
    true
}

#[test]
fn three_rects_fit_within_naive_stacking_bound() {
    // Pre-sorted descending by height, per the packer's ordering contract.
    let mut blocks = vec![
        Block::new("a", 100, 100),
        Block::new("b", 80, 80),
        Block::new("c", 80, 80),
    ];
    let (w, h) = GrowingBinPacker::fit(&mut blocks).expect("fit");

    let rects = placed_rects(&blocks);
    assert_eq!(rects.len(), 3, "all three rectangles must be placed");
    assert!(disjoint(&rects));
    // Naive row-stacking upper bound, not an exact-optimum check.
    assert!(w <= 180, "bounding width {w} exceeds 180");
    assert!(h <= 180, "bounding height {h} exceeds 180");
}

#[test]
fn bounding_box_is_tight_over_placements() {
    let mut blocks = vec![
        Block::new("a", 40, 30),
        Block::new("b", 20, 30),
        Block::new("c", 10, 10),
        Block::new("d", 5, 8),
    ];
    let (w, h) = GrowingBinPacker::fit(&mut blocks).expect("fit");

    let mut max_x = 0;
    let mut max_y = 0;
    for r in placed_rects(&blocks) {
        max_x = max_x.max(r.x + r.w);
        max_y = max_y.max(r.y + r.h);
    }
    assert_eq!((w, h), (max_x, max_y));
}

#[test]
fn deterministic_bit_for_bit() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    let mut sizes: Vec<(u32, u32)> = (0..150)
        .map(|_| (rng.gen_range(2..=64), rng.gen_range(2..=64)))
        .collect();
    // caller-side sort: descending height
    sizes.sort_by(|a, b| b.1.cmp(&a.1));

    let make = |sizes: &[(u32, u32)]| -> Vec<Block> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Block::new(format!("r{i}"), w, h))
            .collect()
    };

    let mut run1 = make(&sizes);
    let mut run2 = make(&sizes);
    let dims1 = GrowingBinPacker::fit(&mut run1).expect("fit");
    let dims2 = GrowingBinPacker::fit(&mut run2).expect("fit");

    assert_eq!(dims1, dims2);
    for (a, b) in run1.iter().zip(run2.iter()) {
        assert_eq!(a.fit, b.fit);
    }
    assert!(disjoint(&placed_rects(&run1)));
}

#[test]
fn empty_input_is_a_hard_error() {
    let mut blocks: Vec<Block> = Vec::new();
    match GrowingBinPacker::fit(&mut blocks) {
        Err(StitchError::Empty) => {}
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[test]
fn oversized_block_stays_unplaced_and_packing_continues() {
    // The bin starts at 10x10; a 50x50 block can grow in neither direction
    // (it exceeds the bin on both perpendicular axes), but later blocks still place.
    let mut blocks = vec![
        Block::new("seed", 10, 10),
        Block::new("giant", 50, 50),
        Block::new("small", 5, 5),
    ];
    GrowingBinPacker::fit(&mut blocks).expect("fit");

    assert!(blocks[0].fit.is_some());
    assert!(blocks[1].fit.is_none(), "giant block must be left unplaced");
    assert!(blocks[2].fit.is_some());
    assert!(disjoint(&placed_rects(&blocks)));
}

#[test]
fn single_block_bin_matches_block() {
    let mut blocks = vec![Block::new("only", 33, 21)];
    let (w, h) = GrowingBinPacker::fit(&mut blocks).expect("fit");
    assert_eq!(blocks[0].fit.map(|p| (p.x, p.y)), Some((0, 0)));
    assert_eq!((w, h), (33, 21));
}

#[test]
fn identical_squares_grow_roughly_square() {
    let mut blocks: Vec<Block> = (0..16).map(|i| Block::new(format!("s{i}"), 10, 10)).collect();
    let (w, h) = GrowingBinPacker::fit(&mut blocks).expect("fit");
    let rects = placed_rects(&blocks);
    assert_eq!(rects.len(), 16);
    assert!(disjoint(&rects));
    // 16 10x10 squares should settle into a 40x40 square under the squareness rule.
    assert_eq!((w, h), (40, 40));
}
