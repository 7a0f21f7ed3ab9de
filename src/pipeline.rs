use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cubeshell_io::{StlFormat, load_dense_complex, save_off, save_stl};

use crate::config::{MeshFormat, ShellConfig};

/// Totals reported after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub cuboids: usize,
    pub exposed_faces: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub output: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cuboids, {} exposed faces -> {} vertices, {} triangles in {}",
            self.cuboids,
            self.exposed_faces,
            self.vertices,
            self.triangles,
            self.output.display()
        )
    }
}

/// Tables in, mesh file out.
pub fn run(cfg: &ShellConfig) -> Result<RunSummary> {
    if !(0.0..=1.0).contains(&cfg.threshold) {
        log::warn!("density threshold {} is outside [0, 1]", cfg.threshold);
    }

    let complex = load_dense_complex(&cfg.input, cfg.threshold).context("loading FEA tables")?;
    if complex.is_empty() {
        log::warn!("no element is denser than {}; the mesh will be empty", cfg.threshold);
    }
    let stats = complex.stats();
    log::debug!("{stats:?}");

    let shell = complex.shell();
    match cfg.format {
        MeshFormat::Off => save_off(&shell, &cfg.output)?,
        MeshFormat::Stl => save_stl(&shell, &cfg.output, StlFormat::Binary)?,
        MeshFormat::StlAscii => save_stl(&shell, &cfg.output, StlFormat::Ascii)?,
    }

    Ok(RunSummary {
        cuboids: stats.cuboids,
        exposed_faces: stats.exposed_faces,
        vertices: shell.vertex_count(),
        triangles: shell.triangle_count(),
        output: cfg.output.clone(),
    })
}
