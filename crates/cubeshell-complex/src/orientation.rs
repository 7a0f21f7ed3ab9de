use cubeshell_geom::Vector;

/// One of the six axis-aligned sides of a unit cuboid.
///
/// Declaration order is the canonical iteration order used everywhere a
/// cuboid's faces are walked, so emitted geometry is reproducible.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    Top = 4,
    Bottom = 5,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
        Orientation::Top,
        Orientation::Bottom,
    ];

    /// Returns the `[0..6)` index of this orientation.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into an `Orientation`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Orientation> {
        Self::ALL.get(i).copied()
    }

    /// The side of the neighbouring cuboid that touches this one.
    #[inline]
    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::North => Orientation::South,
            Orientation::South => Orientation::North,
            Orientation::East => Orientation::West,
            Orientation::West => Orientation::East,
            Orientation::Top => Orientation::Bottom,
            Orientation::Bottom => Orientation::Top,
        }
    }

    /// Unit grid step out through this side.
    #[inline]
    pub fn step(self) -> Vector {
        match self {
            Orientation::North => Vector::new(0, 0, -1),
            Orientation::South => Vector::new(0, 0, 1),
            Orientation::East => Vector::new(1, 0, 0),
            Orientation::West => Vector::new(-1, 0, 0),
            Orientation::Top => Vector::new(0, 1, 0),
            Orientation::Bottom => Vector::new(0, -1, 0),
        }
    }

    /// Corner indices into a cuboid's sorted corners, in winding order.
    #[inline]
    pub fn corner_indices(self) -> [usize; 4] {
        match self {
            Orientation::North => [0, 2, 6, 4],
            Orientation::South => [1, 5, 7, 3],
            Orientation::East => [5, 4, 6, 7],
            Orientation::West => [0, 1, 3, 2],
            Orientation::Top => [6, 2, 3, 7],
            Orientation::Bottom => [0, 4, 5, 1],
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
        }
    }
}

impl core::fmt::Display for Orientation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
