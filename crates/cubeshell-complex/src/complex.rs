use core::ops::Index;

use cubeshell_geom::Point;
use hashbrown::HashMap;

use crate::cuboid::{Centroid, Cuboid, Face};
use crate::error::{ComplexError, ComplexResult};
use crate::orientation::Orientation;

/// Per-orientation exposure flags of one cuboid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exposure([bool; 6]);

impl Exposure {
    pub const ALL_EXPOSED: Exposure = Exposure([true; 6]);

    #[inline]
    pub fn set(&mut self, orientation: Orientation, exposed: bool) {
        self.0[orientation.index()] = exposed;
    }

    #[inline]
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&e| e).count()
    }

    /// Exposed orientations in canonical order.
    pub fn exposed(self) -> impl Iterator<Item = Orientation> {
        Orientation::ALL.into_iter().filter(move |o| self.0[o.index()])
    }
}

impl Index<Orientation> for Exposure {
    type Output = bool;
    #[inline]
    fn index(&self, o: Orientation) -> &bool {
        &self.0[o.index()]
    }
}

/// A face together with whether it borders empty space.
#[derive(Clone, Copy, Debug)]
pub struct FaceRecord<'a> {
    pub orientation: Orientation,
    pub face: Face<'a>,
    pub exposed: bool,
}

#[derive(Clone, Debug)]
struct Occupant {
    cuboid: Cuboid,
    exposure: Exposure,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexStats {
    pub cuboids: usize,
    pub exposed_faces: usize,
    pub shared_faces: usize,
    pub adjacent_pairs: usize,
}

/// Sparse set of unit cuboids keyed by centroid, tracking which faces of
/// each cuboid touch an occupied neighbour.
///
/// Two cuboids one unit apart along an axis always have their facing sides
/// marked shared, whatever order they were inserted in. Cuboids are kept in
/// insertion order for iteration.
#[derive(Default, Clone, Debug)]
pub struct VoxelComplex {
    occupants: Vec<Occupant>,
    index: HashMap<Centroid, usize>,
}

impl VoxelComplex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            occupants: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    /// Builds a complex from raw corner lists, stopping at the first list
    /// that is not a unit cube or repeats a centroid.
    pub fn from_cuboids<I, C>(cuboids: I) -> ComplexResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = Point>,
    {
        let iter = cuboids.into_iter();
        let mut complex = Self::with_capacity(iter.size_hint().0);
        for corners in iter {
            complex.insert(Cuboid::new(corners)?)?;
        }
        log::info!("inserted {} cuboids", complex.len());
        Ok(complex)
    }

    /// Inserts `cuboid` and marks every face it shares with an existing
    /// neighbour as covered on both sides.
    pub fn insert(&mut self, cuboid: Cuboid) -> ComplexResult<()> {
        let key = cuboid.centroid();
        if self.index.contains_key(&key) {
            return Err(ComplexError::DuplicateCentroid(key));
        }
        let slot = self.occupants.len();
        let mut exposure = Exposure::ALL_EXPOSED;
        for o in Orientation::ALL {
            if let Some(&n) = self.index.get(&key.neighbor(o)) {
                exposure.set(o, false);
                self.occupants[n].exposure.set(o.opposite(), false);
            }
        }
        log::trace!("insert {} exposed={}", key, exposure.count());
        self.occupants.push(Occupant { cuboid, exposure });
        self.index.insert(key, slot);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    #[inline]
    pub fn contains(&self, centroid: Centroid) -> bool {
        self.index.contains_key(&centroid)
    }

    pub fn get(&self, centroid: Centroid) -> Option<&Cuboid> {
        self.occupant(centroid).map(|o| &o.cuboid)
    }

    pub fn exposure(&self, centroid: Centroid) -> Option<Exposure> {
        self.occupant(centroid).map(|o| o.exposure)
    }

    pub fn is_exposed(&self, centroid: Centroid, orientation: Orientation) -> Option<bool> {
        self.exposure(centroid).map(|e| e[orientation])
    }

    /// All six face records of the cuboid at `centroid`, in canonical order.
    pub fn faces(&self, centroid: Centroid) -> Option<[FaceRecord<'_>; 6]> {
        self.occupant(centroid).map(Occupant::records)
    }

    /// Cuboids with their exposure, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Cuboid, Exposure)> + '_ {
        self.occupants.iter().map(|o| (&o.cuboid, o.exposure))
    }

    /// Every exposed face: cuboids in insertion order, then orientations in
    /// canonical order.
    pub fn exposed_faces(&self) -> impl Iterator<Item = Face<'_>> + '_ {
        self.occupants
            .iter()
            .flat_map(|occ| occ.exposure.exposed().map(move |o| occ.cuboid.face(o)))
    }

    pub fn stats(&self) -> ComplexStats {
        let cuboids = self.len();
        let exposed_faces: usize = self.occupants.iter().map(|o| o.exposure.count()).sum();
        let shared_faces = 6 * cuboids - exposed_faces;
        ComplexStats {
            cuboids,
            exposed_faces,
            shared_faces,
            adjacent_pairs: shared_faces / 2,
        }
    }

    #[inline]
    fn occupant(&self, centroid: Centroid) -> Option<&Occupant> {
        self.index.get(&centroid).map(|&i| &self.occupants[i])
    }
}

impl Occupant {
    fn records(&self) -> [FaceRecord<'_>; 6] {
        Orientation::ALL.map(|o| FaceRecord {
            orientation: o,
            face: self.cuboid.face(o),
            exposed: self.exposure[o],
        })
    }
}
