/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Grid position as `(row, col)`.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the in-bounds neighbors of a position, orthogonal and diagonal.
///
/// Positions are `(row, col)`. The 3x3 window around the center is clipped to
/// the board and walked in row-major order, so the row above comes first, left
/// to right, then the center row, then the row below. Edge cells yield 5
/// neighbors and corners yield 3.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Position,
    first_col: Coord,
    last: Position,
    cursor: Option<Position>,
}

impl NeighborIter {
    pub(crate) fn new((row, col): Position, (rows, cols): Position) -> Self {
        let last = (
            row.saturating_add(1).min(rows.saturating_sub(1)),
            col.saturating_add(1).min(cols.saturating_sub(1)),
        );
        let first = (row.saturating_sub(1), col.saturating_sub(1));
        Self {
            center: (row, col),
            first_col: first.1,
            last,
            cursor: (rows > 0 && cols > 0).then_some(first),
        }
    }

    fn step(&self, (row, col): Position) -> Option<Position> {
        if col < self.last.1 {
            Some((row, col + 1))
        } else if row < self.last.0 {
            Some((row + 1, self.first_col))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = self.cursor {
            self.cursor = self.step(pos);
            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
