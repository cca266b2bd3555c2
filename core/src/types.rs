/// Coordinate along one axis of the grid.
pub type Coord = u8;

/// `(row, col)` position on the grid, row first.
pub type Coord2 = (Coord, Coord);

/// Rows and columns per side.
pub const GRID_SIZE: Coord = 3;

/// Total number of cells.
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// Walks every position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
}
