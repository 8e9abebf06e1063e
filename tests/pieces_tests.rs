//! Piece catalog tests: shape coverage and geometry.

use blockfall::core::{blocks_at, shape_blocks, Board};
use blockfall::types::{Rotation, Shape, SPAWN_POSITION};

const ALL_SHAPES: [Shape; 7] = [
    Shape::I,
    Shape::O,
    Shape::T,
    Shape::S,
    Shape::Z,
    Shape::J,
    Shape::L,
];

const ALL_ROTATIONS: [Rotation; 4] = [
    Rotation::Up,
    Rotation::Right,
    Rotation::Down,
    Rotation::Left,
];

#[test]
fn catalog_covers_all_twenty_eight_entries() {
    for shape in ALL_SHAPES {
        for rotation in ALL_ROTATIONS {
            let blocks = shape_blocks(shape, rotation);
            assert_eq!(blocks.len(), 4, "{:?}/{:?}", shape, rotation);
        }
    }
}

#[test]
fn every_shape_fits_at_the_spawn_position() {
    let board = Board::new();
    let (x, y) = SPAWN_POSITION;
    for shape in ALL_SHAPES {
        let cells = blocks_at(shape, Rotation::Up, x, y);
        assert!(
            !board.has_collision(&cells),
            "{:?} does not fit at spawn: {:?}",
            shape,
            cells
        );
    }
}

#[test]
fn rotation_cycle_returns_to_original_offsets() {
    for shape in ALL_SHAPES {
        for start in ALL_ROTATIONS {
            let mut rotation = start;
            for _ in 0..4 {
                rotation = rotation.rotate_cw();
            }
            assert_eq!(shape_blocks(shape, rotation), shape_blocks(shape, start));

            let mut rotation = start;
            for _ in 0..4 {
                rotation = rotation.rotate_ccw();
            }
            assert_eq!(shape_blocks(shape, rotation), shape_blocks(shape, start));
        }
    }
}

#[test]
fn o_piece_is_rotation_invariant() {
    let reference = shape_blocks(Shape::O, Rotation::Up);
    for rotation in ALL_ROTATIONS {
        assert_eq!(shape_blocks(Shape::O, rotation), reference);
    }
}

#[test]
fn blocks_at_is_a_pure_translation() {
    for shape in ALL_SHAPES {
        for rotation in ALL_ROTATIONS {
            let local = shape_blocks(shape, rotation);
            let moved = blocks_at(shape, rotation, 3, 7);
            for (l, m) in local.iter().zip(moved.iter()) {
                assert_eq!((l.0 + 3, l.1 + 7), *m);
            }
        }
    }
}

#[test]
fn shapes_occupy_four_distinct_cells() {
    for shape in ALL_SHAPES {
        for rotation in ALL_ROTATIONS {
            let blocks = shape_blocks(shape, rotation);
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(blocks[i], blocks[j], "{:?}/{:?}", shape, rotation);
                }
            }
        }
    }
}
