//! Object File Format (ASCII) output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cubeshell_complex::Shell;

use crate::error::ExportError;

/// Writes `shell` as `OFF`, a counts line, one `X Y Z` line per vertex and
/// one `3 i0 i1 i2` line per triangle.
pub fn write_off<W: Write>(shell: &Shell, mut out: W) -> io::Result<()> {
    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", shell.vertex_count(), shell.triangle_count())?;
    for v in &shell.vertices {
        writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in &shell.triangles {
        writeln!(out, "3 {a} {b} {c}")?;
    }
    out.flush()
}

pub fn to_off(shell: &Shell) -> String {
    let mut buf = Vec::with_capacity(16 + 12 * shell.vertex_count() + 16 * shell.triangle_count());
    // Writing into a Vec cannot fail
    let _ = write_off(shell, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn save_off(shell: &Shell, path: &Path) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    write_off(shell, BufWriter::new(file)).map_err(wrap)?;
    log::info!(
        "wrote {} ({} vertices, {} triangles)",
        path.display(),
        shell.vertex_count(),
        shell.triangle_count()
    );
    Ok(())
}
