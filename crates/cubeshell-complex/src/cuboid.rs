use core::cmp::Ordering;
use core::fmt;

use cubeshell_geom::{Point, Vector};

use crate::error::{ComplexError, ComplexResult};
use crate::orientation::Orientation;

/// Exact arithmetic mean of a unit cuboid's corners.
///
/// Stored at twice its value so that half-unit positions stay integral and
/// can be used as hash keys without floating-point equality. The doubled
/// triple is kept in `i64`, which covers every `i32` corner and its
/// neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Centroid {
    doubled: [i64; 3],
}

impl Centroid {
    /// Centroid of the unit cuboid whose smallest corner is `min`.
    #[inline]
    pub fn from_min_corner(min: Point) -> Self {
        Self {
            doubled: min.coordinates().map(|c| 2 * c as i64 + 1),
        }
    }

    /// Looks up a centroid by real coordinates. Returns `None` unless every
    /// coordinate is a multiple of one half.
    pub fn from_coordinates(c: [f64; 3]) -> Option<Self> {
        let mut doubled = [0i64; 3];
        for (out, v) in doubled.iter_mut().zip(c) {
            let twice = v * 2.0;
            if !twice.is_finite() || twice.fract() != 0.0 {
                return None;
            }
            if twice < i64::MIN as f64 || twice >= i64::MAX as f64 {
                return None;
            }
            *out = twice as i64;
        }
        Some(Self { doubled })
    }

    #[inline]
    pub fn coordinates(self) -> [f64; 3] {
        self.doubled.map(|d| d as f64 / 2.0)
    }

    /// Centroid of the cell one unit away through `orientation`.
    #[inline]
    pub fn neighbor(self, orientation: Orientation) -> Centroid {
        let step = orientation.step().coordinates();
        let mut doubled = self.doubled;
        for (d, s) in doubled.iter_mut().zip(step) {
            *d += 2 * s as i64;
        }
        Centroid { doubled }
    }
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coordinates();
        write!(f, "({x}, {y}, {z})")
    }
}

/// One quadrilateral side of a cuboid, borrowing the cuboid's corners.
#[derive(Clone, Copy, Debug)]
pub struct Face<'a> {
    corners: &'a [Point; 8],
    orientation: Orientation,
}

impl<'a> Face<'a> {
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.corners[self.orientation.corner_indices()[i]]
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 4] {
        self.orientation.corner_indices().map(|i| self.corners[i])
    }

    /// Cross product of the edges v0→v1 and v0→v2; points out of the cuboid.
    #[inline]
    pub fn normal(&self) -> Vector {
        let v = self.vertices();
        (v[0] - v[1]).cross(v[0] - v[2])
    }
}

impl PartialEq for Face<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices() == other.vertices()
    }
}

impl Eq for Face<'_> {}

/// An axis-aligned unit cube given by its eight corners.
///
/// Corners are kept sorted by the point order, which places them at
/// `min + (bx, by, bz)` with index `bx << 2 | by << 1 | bz`. The face table
/// in [`Orientation::corner_indices`] depends on that layout, so construction
/// rejects any corner set that does not produce it.
#[derive(Clone, Debug)]
pub struct Cuboid {
    corners: [Point; 8],
}

impl Cuboid {
    pub fn new(corners: impl IntoIterator<Item = Point>) -> ComplexResult<Self> {
        let list: Vec<Point> = corners.into_iter().collect();
        let mut corners: [Point; 8] = list
            .as_slice()
            .try_into()
            .map_err(|_| ComplexError::CornerCount(list.len()))?;
        corners.sort_unstable();
        let min = corners[0];
        if min.coordinates().contains(&i32::MAX) {
            return Err(ComplexError::OutOfRange(min));
        }
        for (i, found) in corners.iter().enumerate() {
            let expected = min + corner_offset(i);
            if *found != expected {
                return Err(ComplexError::NotUnitCube {
                    index: i,
                    found: *found,
                    expected,
                });
            }
        }
        Ok(Self { corners })
    }

    /// Unit cuboid spanning `min ..= min + (1, 1, 1)`.
    ///
    /// Panics in debug builds if a coordinate of `min` is `i32::MAX`; use
    /// [`Cuboid::new`] for untrusted corners.
    pub fn at(min: Point) -> Self {
        Self {
            corners: core::array::from_fn(|i| min + corner_offset(i)),
        }
    }

    #[inline]
    pub fn corners(&self) -> &[Point; 8] {
        &self.corners
    }

    #[inline]
    pub fn min_corner(&self) -> Point {
        self.corners[0]
    }

    #[inline]
    pub fn centroid(&self) -> Centroid {
        Centroid::from_min_corner(self.corners[0])
    }

    #[inline]
    pub fn face(&self, orientation: Orientation) -> Face<'_> {
        Face {
            corners: &self.corners,
            orientation,
        }
    }

    /// All six faces in canonical orientation order.
    #[inline]
    pub fn faces(&self) -> [Face<'_>; 6] {
        Orientation::ALL.map(|o| self.face(o))
    }
}

#[inline]
fn corner_offset(i: usize) -> Vector {
    Vector::new(((i >> 2) & 1) as i32, ((i >> 1) & 1) as i32, (i & 1) as i32)
}

impl TryFrom<Vec<Point>> for Cuboid {
    type Error = ComplexError;
    fn try_from(corners: Vec<Point>) -> ComplexResult<Self> {
        Cuboid::new(corners)
    }
}

impl TryFrom<[Point; 8]> for Cuboid {
    type Error = ComplexError;
    fn try_from(corners: [Point; 8]) -> ComplexResult<Self> {
        Cuboid::new(corners)
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.centroid() == other.centroid()
    }
}

impl Eq for Cuboid {}

impl PartialOrd for Cuboid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cuboid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.centroid().cmp(&other.centroid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_corners(min: Point) -> Vec<Point> {
        let mut v = Vec::new();
        for dx in 0..2 {
            for dy in 0..2 {
                for dz in 0..2 {
                    v.push(min + Vector::new(dx, dy, dz));
                }
            }
        }
        v
    }

    #[test]
    fn sorts_shuffled_corners() {
        let mut corners = unit_corners(Point::new(3, -1, 7));
        corners.reverse();
        corners.swap(1, 5);
        let c = Cuboid::new(corners).unwrap();
        assert_eq!(c, Cuboid::at(Point::new(3, -1, 7)));
        assert_eq!(c.min_corner(), Point::new(3, -1, 7));
        assert!(c.corners().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_wrong_corner_count() {
        let mut corners = unit_corners(Point::ORIGIN);
        corners.pop();
        assert_eq!(Cuboid::new(corners), Err(ComplexError::CornerCount(7)));
        assert_eq!(
            Cuboid::new(Vec::<Point>::new()),
            Err(ComplexError::CornerCount(0))
        );
    }

    #[test]
    fn rejects_non_unit_cube() {
        let mut corners = unit_corners(Point::ORIGIN);
        corners[7] = Point::new(2, 1, 1);
        assert!(matches!(
            Cuboid::new(corners),
            Err(ComplexError::NotUnitCube { index: 7, .. })
        ));

        // Duplicate corner instead of a distinct one
        let mut corners = unit_corners(Point::ORIGIN);
        corners[1] = corners[0];
        assert!(matches!(
            Cuboid::new(corners),
            Err(ComplexError::NotUnitCube { .. })
        ));
    }

    #[test]
    fn centroid_is_corner_mean() {
        let c = Cuboid::at(Point::new(1, 0, -2));
        assert_eq!(c.centroid().coordinates(), [1.5, 0.5, -1.5]);
        assert_eq!(
            Centroid::from_coordinates([1.5, 0.5, -1.5]),
            Some(c.centroid())
        );
        assert_eq!(c.centroid().to_string(), "(1.5, 0.5, -1.5)");
    }

    #[test]
    fn centroids_stay_distinct_at_grid_extremes() {
        let far = 1 << 30;
        let pos = Cuboid::new(unit_corners(Point::new(far, 0, 0))).unwrap();
        let neg = Cuboid::new(unit_corners(Point::new(-far, 0, 0))).unwrap();
        assert_ne!(pos.centroid(), neg.centroid());
        assert_eq!(pos.centroid().coordinates(), [far as f64 + 0.5, 0.5, 0.5]);

        let top = Cuboid::new(unit_corners(Point::new(i32::MAX - 1, i32::MIN, 0))).unwrap();
        assert_eq!(
            top.centroid().coordinates(),
            [i32::MAX as f64 - 0.5, i32::MIN as f64 + 0.5, 0.5]
        );
        // The neighbour past the grid edge is still a distinct key
        let east = top.centroid().neighbor(Orientation::East);
        assert_eq!(east.coordinates()[0], i32::MAX as f64 + 0.5);
        assert_eq!(east.neighbor(Orientation::West), top.centroid());
    }

    #[test]
    fn rejects_cube_past_grid_edge() {
        let corners = vec![Point::new(i32::MAX, 0, 0); 8];
        assert_eq!(
            Cuboid::new(corners),
            Err(ComplexError::OutOfRange(Point::new(i32::MAX, 0, 0)))
        );
    }

    #[test]
    fn centroid_from_coordinates_rejects_off_grid() {
        assert_eq!(Centroid::from_coordinates([0.25, 0.5, 0.5]), None);
        assert_eq!(Centroid::from_coordinates([f64::NAN, 0.5, 0.5]), None);
    }

    #[test]
    fn neighbor_centroids_are_one_unit_apart() {
        let c = Cuboid::at(Point::ORIGIN).centroid();
        assert_eq!(
            c.neighbor(Orientation::East).coordinates(),
            [1.5, 0.5, 0.5]
        );
        assert_eq!(
            c.neighbor(Orientation::North).coordinates(),
            [0.5, 0.5, -0.5]
        );
        assert_eq!(c.neighbor(Orientation::Top).coordinates(), [0.5, 1.5, 0.5]);
        for o in Orientation::ALL {
            assert_eq!(c.neighbor(o).neighbor(o.opposite()), c);
        }
    }

    #[test]
    fn face_table_matches_sorted_corners() {
        let c = Cuboid::at(Point::ORIGIN);
        let p = |x, y, z| Point::new(x, y, z);
        assert_eq!(
            c.face(Orientation::North).vertices(),
            [p(0, 0, 0), p(0, 1, 0), p(1, 1, 0), p(1, 0, 0)]
        );
        assert_eq!(
            c.face(Orientation::South).vertices(),
            [p(0, 0, 1), p(1, 0, 1), p(1, 1, 1), p(0, 1, 1)]
        );
        assert_eq!(
            c.face(Orientation::East).vertices(),
            [p(1, 0, 1), p(1, 0, 0), p(1, 1, 0), p(1, 1, 1)]
        );
        assert_eq!(
            c.face(Orientation::West).vertices(),
            [p(0, 0, 0), p(0, 0, 1), p(0, 1, 1), p(0, 1, 0)]
        );
        assert_eq!(
            c.face(Orientation::Top).vertices(),
            [p(1, 1, 0), p(0, 1, 0), p(0, 1, 1), p(1, 1, 1)]
        );
        assert_eq!(
            c.face(Orientation::Bottom).vertices(),
            [p(0, 0, 0), p(1, 0, 0), p(1, 0, 1), p(0, 0, 1)]
        );
    }

    #[test]
    fn face_normals_point_outward() {
        let c = Cuboid::at(Point::new(-4, 9, 2));
        for face in c.faces() {
            assert_eq!(face.normal(), face.orientation().step());
        }
    }

    #[test]
    fn cuboids_order_by_centroid() {
        let a = Cuboid::at(Point::new(0, 5, 5));
        let b = Cuboid::at(Point::new(1, 0, 0));
        assert!(a < b);
        let mut v = vec![b.clone(), a.clone()];
        v.sort();
        assert_eq!(v, vec![a, b]);
    }
}
