use cubeshell_geom::Point;
use hashbrown::HashMap;

use crate::complex::VoxelComplex;

/// Indexed triangle mesh of a complex's exposed faces.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub vertices: Vec<Point>,
    pub triangles: Vec<[u32; 3]>,
}

impl Shell {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Resolves triangle `i` to its three corner positions.
    pub fn triangle_points(&self, i: usize) -> Option<[Point; 3]> {
        let t = self.triangles.get(i)?;
        Some(t.map(|v| self.vertices[v as usize]))
    }
}

/// Accumulates quads into a [`Shell`], sharing one index per distinct
/// coordinate.
#[derive(Default)]
pub struct ShellBuilder {
    vertices: Vec<Point>,
    triangles: Vec<[u32; 3]>,
    lookup: HashMap<Point, u32>,
}

impl ShellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve capacity for approximately `n_quads` quads.
    pub fn with_quad_capacity(n_quads: usize) -> Self {
        Self {
            // Neighbouring quads share most corners; one new vertex per quad
            // is close for solid blocks.
            vertices: Vec::with_capacity(n_quads + 8),
            triangles: Vec::with_capacity(n_quads * 2),
            lookup: HashMap::with_capacity(n_quads + 8),
        }
    }

    /// Returns the index of `p`, appending it if it has not been seen.
    #[inline]
    pub fn vertex_index(&mut self, p: Point) -> u32 {
        let next = self.vertices.len() as u32;
        let idx = *self.lookup.entry(p).or_insert(next);
        if idx == next {
            self.vertices.push(p);
        }
        idx
    }

    /// Appends a quad as the triangles `(v0, v1, v2)` and `(v2, v3, v0)`.
    pub fn add_quad(&mut self, quad: [Point; 4]) {
        let [a, b, c, d] = quad.map(|p| self.vertex_index(p));
        self.triangles.push([a, b, c]);
        self.triangles.push([c, d, a]);
    }

    pub fn finish(self) -> Shell {
        Shell {
            vertices: self.vertices,
            triangles: self.triangles,
        }
    }
}

/// Builds the outer surface of `complex` from scratch.
pub fn extract_shell(complex: &VoxelComplex) -> Shell {
    let stats = complex.stats();
    let mut builder = ShellBuilder::with_quad_capacity(stats.exposed_faces);
    for face in complex.exposed_faces() {
        builder.add_quad(face.vertices());
    }
    let shell = builder.finish();
    log::debug!(
        "shell: {} vertices, {} triangles from {} exposed faces",
        shell.vertex_count(),
        shell.triangle_count(),
        stats.exposed_faces
    );
    shell
}

impl VoxelComplex {
    /// Outer surface mesh; recomputed on every call.
    pub fn shell(&self) -> Shell {
        extract_shell(self)
    }
}
