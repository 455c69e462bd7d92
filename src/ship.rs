//! Ship definitions: orientation and fleet entries.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step (row, col) along the ship's axis.
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// One fleet entry: a ship class with its length and how many of it to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this type in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Cells covered by all ships of this type.
    pub fn cells(&self) -> usize {
        self.length * self.count
    }
}

/// Total ship cells a fleet occupies once placed.
pub fn fleet_cells(fleet: &[ShipType]) -> usize {
    fleet.iter().map(ShipType::cells).sum()
}

/// Cells covered by a ship of `length` anchored at (row, col). Cells may fall
/// outside the board; callers bounds-check them.
pub fn ship_cells(
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (dr, dc) = orientation.step();
    (0..length).map(move |i| (row + i * dr, col + i * dc))
}
