use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for mine counts, revealed counts, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
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

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // grids are only ever built from `Coord`-sized configs
        let bounds = (rows as Coord, cols as Coord);
        NeighborIter::new(index, bounds)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(dr)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(dc)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// In-bounds 8-neighborhood of a cell; yields 3 cells at corners and 5 along edges.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
