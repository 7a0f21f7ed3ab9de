use std::path::PathBuf;

use cubeshell_complex::ComplexError;
use thiserror::Error;

/// Failures while reading the node, connectivity and density tables.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("{connectivity} elements in the connectivity table but {density} density values")]
    RowCountMismatch { connectivity: usize, density: usize },

    #[error("element {element} references node {node}, but the node table ends at {max}")]
    UnknownNode {
        element: usize,
        node: usize,
        max: usize,
    },

    #[error("element {element} was rejected")]
    InvalidElement {
        element: usize,
        #[source]
        source: ComplexError,
    },
}

/// Failures while writing a mesh file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
