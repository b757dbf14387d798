use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::utils::hashmap::HashMap;
use crate::utils::lattice_key;
use smallvec::SmallVec;

/// A corner of a filled cell, with the number of filled cells sharing it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveCorner {
    /// The position of the corner.
    pub point: Point<Real>,
    /// The number of filled cells this corner belongs to.
    pub multiplicity: u32,
}

/// The set of the corners of all filled cells of a voxelization.
///
/// Two points closer than [`ActiveCornerSet::epsilon`] are considered to be the same
/// corner. Corners are reference-counted: removing the corners of one cell keeps the
/// corners still shared with other filled cells.
///
/// Points are bucketed on a lattice of cell size `epsilon` so membership tests only
/// look at the 27 buckets around the queried point.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ActiveCornerSet {
    epsilon: Real,
    buckets: HashMap<[i64; 3], SmallVec<[ActiveCorner; 2]>>,
    len: usize,
}

impl Default for ActiveCornerSet {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl ActiveCornerSet {
    /// Creates an empty set where corners closer than `epsilon` are merged.
    pub fn new(epsilon: Real) -> Self {
        Self {
            epsilon: epsilon.max(DEFAULT_EPSILON),
            buckets: HashMap::default(),
            len: 0,
        }
    }

    /// The distance under which two corners are identical.
    #[inline]
    pub fn epsilon(&self) -> Real {
        self.epsilon
    }

    /// The number of distinct corners in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every corner from this set.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    fn locate(&self, pt: &Point<Real>) -> Option<([i64; 3], usize)> {
        let key = lattice_key(pt, self.epsilon);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = [key[0] + dx, key[1] + dy, key[2] + dz];

                    if let Some(bucket) = self.buckets.get(&neighbor) {
                        if let Some(i) = bucket
                            .iter()
                            .position(|corner| na::distance(&corner.point, pt) < self.epsilon)
                        {
                            return Some((neighbor, i));
                        }
                    }
                }
            }
        }

        None
    }

    /// The corner matching `pt`, if any.
    pub fn get(&self, pt: &Point<Real>) -> Option<&ActiveCorner> {
        let (key, i) = self.locate(pt)?;
        self.buckets.get(&key).map(|bucket| &bucket[i])
    }

    /// Does this set contain a corner matching `pt`?
    #[inline]
    pub fn contains(&self, pt: &Point<Real>) -> bool {
        self.locate(pt).is_some()
    }

    /// The number of filled cells sharing the corner `pt`.
    #[inline]
    pub fn multiplicity(&self, pt: &Point<Real>) -> u32 {
        self.get(pt).map(|corner| corner.multiplicity).unwrap_or(0)
    }

    /// Adds one reference to the corner `pt`.
    ///
    /// Returns `true` if the corner was not already part of this set.
    pub fn insert(&mut self, pt: Point<Real>) -> bool {
        if let Some((key, i)) = self.locate(&pt) {
            if let Some(bucket) = self.buckets.get_mut(&key) {
                bucket[i].multiplicity += 1;
            }
            return false;
        }

        self.buckets
            .entry(lattice_key(&pt, self.epsilon))
            .or_default()
            .push(ActiveCorner {
                point: pt,
                multiplicity: 1,
            });
        self.len += 1;
        true
    }

    /// Removes one reference to the corner `pt`.
    ///
    /// Returns the number of references left, or `None` if `pt` is not part of this set.
    pub fn remove(&mut self, pt: &Point<Real>) -> Option<u32> {
        let (key, i) = self.locate(pt)?;
        let bucket = self.buckets.get_mut(&key)?;
        bucket[i].multiplicity = bucket[i].multiplicity.saturating_sub(1);
        let left = bucket[i].multiplicity;

        if left == 0 {
            let _ = bucket.swap_remove(i);
            self.len -= 1;

            if bucket.is_empty() {
                let _ = self.buckets.remove(&key);
            }
        }

        Some(left)
    }

    /// Adds one reference to each corner of `cell`.
    pub fn insert_cell(&mut self, cell: &Aabb) {
        for pt in cell.vertices() {
            let _ = self.insert(pt);
        }
    }

    /// Removes one reference to each corner of `cell`.
    pub fn remove_cell(&mut self, cell: &Aabb) {
        for pt in cell.vertices() {
            let _ = self.remove(&pt);
        }
    }

    /// For each corner of `cell`, in marching-cubes order, does it belong to this set?
    pub fn cell_activation(&self, cell: &Aabb) -> [bool; 8] {
        cell.vertices().map(|pt| self.contains(&pt))
    }

    /// The bit mask of the corners of `cell` belonging to this set.
    ///
    /// Bit `i` is set if the `i`-th corner (in [`Aabb::vertices`] order) is active.
    pub fn cube_index(&self, cell: &Aabb) -> u8 {
        self.cell_activation(cell)
            .iter()
            .enumerate()
            .fold(0, |index, (i, active)| index | ((*active as u8) << i))
    }

    /// Iterates through the corners of this set, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveCorner> {
        self.buckets.values().flat_map(|bucket| bucket.iter())
    }
}
