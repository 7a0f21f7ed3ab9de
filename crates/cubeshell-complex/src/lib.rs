//! Unit-cuboid complexes: face adjacency bookkeeping and outer shell extraction.
#![forbid(unsafe_code)]

pub mod complex;
pub mod cuboid;
pub mod error;
pub mod orientation;
pub mod shell;

pub use complex::{ComplexStats, Exposure, FaceRecord, VoxelComplex};
pub use cuboid::{Centroid, Cuboid, Face};
pub use error::{ComplexError, ComplexResult};
pub use orientation::Orientation;
pub use shell::{Shell, ShellBuilder, extract_shell};
