//! Piece catalog and geometry.
//!
//! Maps every (shape, rotation) pair to four cell offsets in a small 0..3
//! local coordinate space, and translates those offsets into absolute board
//! coordinates. The catalog is static data; rotation is a pure lookup, so
//! stepping a rotation four times trivially reproduces the original offsets.

use crate::types::{Rotation, Shape};

/// Offset of a single block relative to the piece anchor.
pub type BlockOffset = (i8, i8);

/// The four block offsets of a piece in one rotation state.
pub type PieceBlocks = [BlockOffset; 4];

/// Catalog lookup: block offsets for a shape in a given rotation.
pub fn shape_blocks(shape: Shape, rotation: Rotation) -> PieceBlocks {
    match shape {
        Shape::I => i_blocks(rotation),
        Shape::O => o_blocks(rotation),
        Shape::T => t_blocks(rotation),
        Shape::S => s_blocks(rotation),
        Shape::Z => z_blocks(rotation),
        Shape::J => j_blocks(rotation),
        Shape::L => l_blocks(rotation),
    }
}

/// Absolute board cells occupied by a piece anchored at (x, y).
///
/// Pure translation; does not consult the board.
pub fn blocks_at(shape: Shape, rotation: Rotation, x: i8, y: i8) -> PieceBlocks {
    let mut blocks = shape_blocks(shape, rotation);
    for (bx, by) in &mut blocks {
        *bx += x;
        *by += y;
    }
    blocks
}

fn i_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        // Horizontal on the anchor row.
        Rotation::Up => [(0, 0), (1, 0), (2, 0), (3, 0)],
        Rotation::Right => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::Down => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::Left => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O is rotation-invariant.
fn o_blocks(_rotation: Rotation) -> PieceBlocks {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn t_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        Rotation::Up => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::Right => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::Down => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::Left => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        Rotation::Up => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::Right => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::Down => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::Left => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        Rotation::Up => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::Right => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::Down => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::Left => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        Rotation::Up => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::Right => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::Down => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::Left => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_blocks(rotation: Rotation) -> PieceBlocks {
    match rotation {
        Rotation::Up => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::Right => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::Down => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::Left => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}
