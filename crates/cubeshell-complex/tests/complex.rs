use cubeshell_complex::{Centroid, Cuboid, Orientation, Shell, VoxelComplex};
use cubeshell_geom::Point;

fn cube_corners(x: i32, y: i32, z: i32) -> Vec<Point> {
    let mut v = Vec::with_capacity(8);
    // Deliberately unsorted: top layer first
    for dy in [1, 0] {
        for dz in [1, 0] {
            for dx in [0, 1] {
                v.push(Point::new(x + dx, y + dy, z + dz));
            }
        }
    }
    v
}

fn centroid(x: f64, y: f64, z: f64) -> Centroid {
    Centroid::from_coordinates([x, y, z]).unwrap()
}

fn sorted_triangles(shell: &Shell) -> Vec<[Point; 3]> {
    let mut tris: Vec<_> = (0..shell.triangle_count())
        .map(|i| shell.triangle_points(i).unwrap())
        .collect();
    tris.sort();
    tris
}

#[test]
fn isolated_cuboid() {
    let complex = VoxelComplex::from_cuboids([cube_corners(0, 0, 0)]).unwrap();
    let shell = complex.shell();
    assert_eq!(complex.stats().exposed_faces, 6);
    assert_eq!(shell.vertex_count(), 8);
    assert_eq!(shell.triangle_count(), 12);
}

#[test]
fn two_cubes_adjacent_along_x() {
    let complex =
        VoxelComplex::from_cuboids([cube_corners(0, 0, 0), cube_corners(1, 0, 0)]).unwrap();
    let first = centroid(0.5, 0.5, 0.5);
    let second = centroid(1.5, 0.5, 0.5);

    assert_eq!(complex.is_exposed(first, Orientation::East), Some(false));
    assert_eq!(complex.is_exposed(second, Orientation::West), Some(false));
    for o in Orientation::ALL {
        if o != Orientation::East {
            assert_eq!(complex.is_exposed(first, o), Some(true), "{o}");
        }
        if o != Orientation::West {
            assert_eq!(complex.is_exposed(second, o), Some(true), "{o}");
        }
    }

    let shell = complex.shell();
    assert_eq!(shell.vertex_count(), 12);
    assert_eq!(shell.triangle_count(), 20);
}

#[test]
fn first_emitted_faces_follow_canonical_order() {
    let complex = VoxelComplex::from_cuboids([cube_corners(0, 0, 0)]).unwrap();
    let shell = complex.shell();
    // North face of the first cuboid comes first
    assert_eq!(
        &shell.vertices[..4],
        &[
            Point::new(0, 0, 0),
            Point::new(0, 1, 0),
            Point::new(1, 1, 0),
            Point::new(1, 0, 0),
        ]
    );
    assert_eq!(shell.triangles[0], [0, 1, 2]);
    assert_eq!(shell.triangles[1], [2, 3, 0]);
}

#[test]
fn extraction_is_idempotent() {
    let complex = VoxelComplex::from_cuboids([
        cube_corners(0, 0, 0),
        cube_corners(0, 1, 0),
        cube_corners(0, 1, 1),
    ])
    .unwrap();
    let a = complex.shell();
    let b = complex.shell();
    assert_eq!(a, b);
    assert_eq!(a.triangle_count(), 2 * complex.stats().exposed_faces);
}

#[test]
fn vertices_are_unique() {
    let mut corners = Vec::new();
    for x in 0..3 {
        for y in 0..2 {
            for z in 0..2 {
                corners.push(cube_corners(x, y, z));
            }
        }
    }
    let shell = VoxelComplex::from_cuboids(corners).unwrap().shell();
    let mut v = shell.vertices.clone();
    v.sort();
    v.dedup();
    assert_eq!(v.len(), shell.vertex_count());
    // A solid 3x2x2 block only exposes its 32 outer unit squares
    assert_eq!(shell.triangle_count(), 2 * 2 * (3 * 2 + 3 * 2 + 2 * 2));
}

#[test]
fn insertion_order_does_not_change_surface() {
    let cells = [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1), (2, 1, 1), (5, 5, 5)];
    let forward = VoxelComplex::from_cuboids(cells.iter().map(|&(x, y, z)| cube_corners(x, y, z)))
        .unwrap();
    let backward =
        VoxelComplex::from_cuboids(cells.iter().rev().map(|&(x, y, z)| cube_corners(x, y, z)))
            .unwrap();

    for (cuboid, exposure) in forward.iter() {
        assert_eq!(backward.exposure(cuboid.centroid()), Some(exposure));
    }
    assert_eq!(
        sorted_triangles(&forward.shell()),
        sorted_triangles(&backward.shell())
    );
}

#[test]
fn hollow_box_keeps_inner_faces() {
    // 3x3x3 block with the centre removed: 26 cuboids, inner cavity adds 6 faces
    let mut cubes = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                if (x, y, z) != (1, 1, 1) {
                    cubes.push(Cuboid::at(Point::new(x, y, z)));
                }
            }
        }
    }
    let mut complex = VoxelComplex::new();
    for c in cubes {
        complex.insert(c).unwrap();
    }
    let stats = complex.stats();
    assert_eq!(stats.cuboids, 26);
    assert_eq!(stats.exposed_faces, 54 + 6);
    assert_eq!(stats.exposed_faces, 6 * 26 - 2 * stats.adjacent_pairs);
}
