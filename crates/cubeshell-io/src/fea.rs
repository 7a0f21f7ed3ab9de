use std::path::PathBuf;

use cubeshell_complex::{Cuboid, VoxelComplex};
use cubeshell_geom::Point;
use serde::Deserialize;

use crate::error::IngestError;
use crate::tables::{read_connectivity, read_density, read_nodes};

/// Margin a density must clear above the threshold to count as dense.
pub const EPSILON: f64 = 1.0e-5;

/// Strict density test: values within `EPSILON` of `threshold` are not dense.
#[inline]
pub fn is_dense(density: f64, threshold: f64) -> bool {
    density - threshold > EPSILON
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TablePaths {
    #[serde(default = "default_nodes")]
    pub nodes: PathBuf,
    #[serde(default = "default_connectivity")]
    pub connectivity: PathBuf,
    #[serde(default = "default_density")]
    pub density: PathBuf,
}

fn default_nodes() -> PathBuf {
    PathBuf::from("Node.txt")
}
fn default_connectivity() -> PathBuf {
    PathBuf::from("Connectivity.txt")
}
fn default_density() -> PathBuf {
    PathBuf::from("density.txt")
}

impl Default for TablePaths {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            connectivity: default_connectivity(),
            density: default_density(),
        }
    }
}

/// Node coordinates, element connectivity and per-element density.
#[derive(Clone, Debug, Default)]
pub struct FeaTables {
    /// Index 0 is a placeholder; node ids are 1-based.
    pub nodes: Vec<Point>,
    pub connectivity: Vec<Vec<usize>>,
    pub density: Vec<f64>,
}

impl FeaTables {
    pub fn load(paths: &TablePaths) -> Result<Self, IngestError> {
        Ok(Self {
            nodes: read_nodes(&paths.nodes)?,
            connectivity: read_connectivity(&paths.connectivity)?,
            density: read_density(&paths.density)?,
        })
    }

    /// Elements whose density passes [`is_dense`], in table order.
    pub fn dense_elements(&self, threshold: f64) -> Result<Vec<DenseElement>, IngestError> {
        if self.connectivity.len() != self.density.len() {
            return Err(IngestError::RowCountMismatch {
                connectivity: self.connectivity.len(),
                density: self.density.len(),
            });
        }
        let mut out = Vec::new();
        for (row, (ids, &density)) in self.connectivity.iter().zip(&self.density).enumerate() {
            if !is_dense(density, threshold) {
                continue;
            }
            let element = row + 1;
            let corners = ids
                .iter()
                .map(|&node| {
                    self.nodes.get(node).copied().ok_or(IngestError::UnknownNode {
                        element,
                        node,
                        max: self.nodes.len().saturating_sub(1),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            out.push(DenseElement { element, corners });
        }
        log::info!(
            "filtered {} dense cuboids of {} (threshold {})",
            out.len(),
            self.density.len(),
            threshold
        );
        Ok(out)
    }

    /// Corner lists of the dense elements.
    pub fn dense_cuboids(&self, threshold: f64) -> Result<Vec<Vec<Point>>, IngestError> {
        Ok(self
            .dense_elements(threshold)?
            .into_iter()
            .map(|e| e.corners)
            .collect())
    }

    /// Inserts every dense element into a new complex. Bad corner sets and
    /// repeated cells are reported against their element row.
    pub fn dense_complex(&self, threshold: f64) -> Result<VoxelComplex, IngestError> {
        let elements = self.dense_elements(threshold)?;
        let mut complex = VoxelComplex::with_capacity(elements.len());
        for DenseElement { element, corners } in elements {
            let rejected = |source| IngestError::InvalidElement { element, source };
            let cuboid = Cuboid::new(corners).map_err(rejected)?;
            complex.insert(cuboid).map_err(rejected)?;
        }
        log::info!("inserted {} cuboids", complex.len());
        Ok(complex)
    }
}

/// One dense element with its 1-based row in the connectivity table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseElement {
    pub element: usize,
    pub corners: Vec<Point>,
}

/// Reads the three tables and keeps the dense elements.
pub fn load_dense_cuboids(
    paths: &TablePaths,
    threshold: f64,
) -> Result<Vec<Vec<Point>>, IngestError> {
    FeaTables::load(paths)?.dense_cuboids(threshold)
}

/// Reads the three tables and builds the complex of dense elements.
pub fn load_dense_complex(paths: &TablePaths, threshold: f64) -> Result<VoxelComplex, IngestError> {
    FeaTables::load(paths)?.dense_complex(threshold)
}
