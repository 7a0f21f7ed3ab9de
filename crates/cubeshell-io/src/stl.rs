use std::fs;
use std::path::Path;

use cubeshell_complex::Shell;
use cubeshell_geom::Point;

use crate::error::ExportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StlFormat {
    Binary,
    Ascii,
}

#[inline]
fn to_f32(p: Point) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}

#[inline]
fn facet_normal(t: [Point; 3]) -> [f32; 3] {
    let n = (t[0] - t[1]).cross(t[0] - t[2]);
    let len = (n.magnitude2() as f64).sqrt();
    if len == 0.0 {
        [0.0, 0.0, 0.0]
    } else {
        [
            (n.x as f64 / len) as f32,
            (n.y as f64 / len) as f32,
            (n.z as f64 / len) as f32,
        ]
    }
}

fn facets(shell: &Shell) -> impl Iterator<Item = ([f32; 3], [[f32; 3]; 3])> + '_ {
    shell.triangles.iter().map(|t| {
        let pts = t.map(|i| shell.vertices[i as usize]);
        (facet_normal(pts), pts.map(to_f32))
    })
}

pub fn to_binary_stl(shell: &Shell, name: &str) -> Vec<u8> {
    let mut bytes = Vec::<u8>::with_capacity(84 + shell.triangle_count() * 50);

    // A header beginning with "solid" is read as ASCII STL
    let mut header = [0u8; 80];
    let label = format!("cubeshell {name}");
    let label_bytes = label.as_bytes();
    let header_len = label_bytes.len().min(80);
    header[..header_len].copy_from_slice(&label_bytes[..header_len]);
    bytes.extend_from_slice(&header);

    bytes.extend_from_slice(&(shell.triangle_count() as u32).to_le_bytes());

    for (n, [a, b, c]) in facets(shell) {
        push_f32_triplet(&mut bytes, n);
        push_f32_triplet(&mut bytes, a);
        push_f32_triplet(&mut bytes, b);
        push_f32_triplet(&mut bytes, c);
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }

    bytes
}

pub fn to_ascii_stl(shell: &Shell, name: &str) -> String {
    let mut out = String::new();
    out.push_str("solid ");
    out.push_str(name);
    out.push('\n');

    for (n, [a, b, c]) in facets(shell) {
        out.push_str(&format!("  facet normal {} {} {}\n", n[0], n[1], n[2]));
        out.push_str("    outer loop\n");
        for v in [a, b, c] {
            out.push_str(&format!("      vertex {} {} {}\n", v[0], v[1], v[2]));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str("endsolid ");
    out.push_str(name);
    out.push('\n');
    out
}

/// Writes `shell` to `path`; the solid is named after the file stem.
pub fn save_stl(shell: &Shell, path: &Path, format: StlFormat) -> Result<(), ExportError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("shell");
    let bytes = match format {
        StlFormat::Binary => to_binary_stl(shell, name),
        StlFormat::Ascii => to_ascii_stl(shell, name).into_bytes(),
    };
    fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {} ({:?} STL, {} triangles)",
        path.display(),
        format,
        shell.triangle_count()
    );
    Ok(())
}

#[inline]
fn push_f32_triplet(bytes: &mut Vec<u8>, value: [f32; 3]) {
    bytes.extend_from_slice(&value[0].to_le_bytes());
    bytes.extend_from_slice(&value[1].to_le_bytes());
    bytes.extend_from_slice(&value[2].to_le_bytes());
}
