//! Direction and jump vectors as `(row delta, column delta)` pairs.

pub type Direction = (i8, i8);

/// Rook directions: up, left, down, right
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop directions
pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonals
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn is_orthogonal(dir: Direction) -> bool {
    dir.0 == 0 || dir.1 == 0
}

pub fn reverse(dir: Direction) -> Direction {
    (-dir.0, -dir.1)
}

/// A piece pinned along `pin` may only travel parallel to it.
pub fn along_axis(dir: Direction, pin: Direction) -> bool {
    dir == pin || dir == reverse(pin)
}
