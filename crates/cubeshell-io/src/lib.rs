//! Table ingestion and mesh output for cuboid complexes.
#![forbid(unsafe_code)]

pub mod error;
pub mod fea;
pub mod off;
pub mod stl;
pub mod tables;

pub use error::{ExportError, IngestError};
pub use fea::{
    DenseElement, EPSILON, FeaTables, TablePaths, is_dense, load_dense_complex, load_dense_cuboids,
};
pub use off::{save_off, to_off, write_off};
pub use stl::{StlFormat, save_stl, to_ascii_stl, to_binary_stl};
pub use tables::{read_connectivity, read_density, read_nodes};
