use thiserror::Error;

use crate::cuboid::Centroid;

/// Rejections raised while building cuboids or inserting them into a complex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    #[error("a cuboid needs exactly 8 corners, got {0}")]
    CornerCount(usize),

    #[error("corners do not form an axis-aligned unit cube (corner {index} is {found}, expected {expected})")]
    NotUnitCube {
        index: usize,
        found: cubeshell_geom::Point,
        expected: cubeshell_geom::Point,
    },

    #[error("a unit cube with smallest corner {0} would extend past the i32 grid")]
    OutOfRange(cubeshell_geom::Point),

    #[error("a cuboid centred at {0} is already in the complex")]
    DuplicateCentroid(Centroid),
}

pub type ComplexResult<T> = Result<T, ComplexError>;
