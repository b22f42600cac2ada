use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{BoundsError, BoundsResult};
use super::vector3::Vector3;

// ─────────────────────────────────────────────────────────────────────────────
// ContainmentType
// ─────────────────────────────────────────────────────────────────────────────

/// Spatial relationship between a bounding volume and a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainmentType {
    Disjoint,
    Contains,
    Intersects,
}

// ─────────────────────────────────────────────────────────────────────────────
// BoundingBox
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned box spanned by two opposite corners.
///
/// Every query assumes `min <= max` on each axis but nothing enforces it.
/// An inverted box is accepted silently and yields meaningless results;
/// use [`BoundingBox::validate`] where that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub const CORNER_COUNT: usize = 8;

    #[must_use]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing every point of `points`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::EmptyPoints`] when the sequence yields nothing.
    pub fn from_points<I>(points: I) -> BoundsResult<Self>
    where
        I: IntoIterator<Item = Vector3>,
    {
        let mut min = Vector3::splat(f32::MAX);
        let mut max = Vector3::splat(f32::MIN);
        let mut count = 0_usize;
        for p in points {
            min = min.min(p);
            max = max.max(p);
            count += 1;
        }
        if count == 0 {
            log::debug!("refusing to bound an empty point sequence");
            return Err(BoundsError::EmptyPoints);
        }
        log::trace!("bounded {count} points: min {min}, max {max}");
        Ok(Self::new(min, max))
    }

    /// Like [`BoundingBox::from_points`], but distinguishes a missing
    /// sequence from an empty one.
    ///
    /// # Errors
    ///
    /// [`BoundsError::NullPoints`] for `None`, [`BoundsError::EmptyPoints`]
    /// for a sequence without points.
    pub fn create_from_points<I>(points: Option<I>) -> BoundsResult<Self>
    where
        I: IntoIterator<Item = Vector3>,
    {
        let Some(points) = points else {
            log::debug!("refusing to bound a missing point sequence");
            return Err(BoundsError::NullPoints);
        };
        Self::from_points(points)
    }

    /// Smallest box containing both `a` and `b`.
    #[must_use]
    pub fn create_merged(a: Self, b: Self) -> Self {
        a.warn_if_inverted("create_merged");
        b.warn_if_inverted("create_merged");
        Self::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// Classifies `point`. Only `Disjoint` or `Contains` is ever returned;
    /// a point on a face counts as contained.
    #[must_use]
    pub fn contains_point(&self, point: Vector3) -> ContainmentType {
        if point.x < self.min.x
            || point.x > self.max.x
            || point.y < self.min.y
            || point.y > self.max.y
            || point.z < self.min.z
            || point.z > self.max.z
        {
            ContainmentType::Disjoint
        } else {
            ContainmentType::Contains
        }
    }

    /// Classifies `other` as disjoint, partially overlapping, or fully inside.
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> ContainmentType {
        self.warn_if_inverted("contains_box");
        other.warn_if_inverted("contains_box");

        // separating axis on x, y, z
        if other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
            || other.max.z < self.min.z
            || other.min.z > self.max.z
        {
            return ContainmentType::Disjoint;
        }

        if other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
            && other.min.z >= self.min.z
            && other.max.z <= self.max.z
        {
            return ContainmentType::Contains;
        }

        ContainmentType::Intersects
    }

    /// `true` when the boxes overlap on all three axes. Touching faces count.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.warn_if_inverted("intersects");
        other.warn_if_inverted("intersects");

        if self.max.x < other.min.x || self.min.x > other.max.x {
            return false;
        }
        if self.max.y < other.min.y || self.min.y > other.max.y {
            return false;
        }
        self.max.z >= other.min.z && self.min.z <= other.max.z
    }

    /// The eight corners: the front face (max z) clockwise from top-left,
    /// then the back face (min z) in the same order.
    ///
    /// Callers index this positionally, so the order is fixed.
    #[must_use]
    pub const fn corners(&self) -> [Vector3; Self::CORNER_COUNT] {
        let (min, max) = (self.min, self.max);
        [
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, min.y, min.z),
        ]
    }

    /// Writes [`BoundingBox::corners`] into the first eight slots of `out`.
    /// Slots past the eighth are left untouched.
    ///
    /// # Errors
    ///
    /// [`BoundsError::CornerBufferTooSmall`] when `out` has fewer than
    /// [`BoundingBox::CORNER_COUNT`] elements; `out` is not modified.
    pub fn corners_into(&self, out: &mut [Vector3]) -> BoundsResult<()> {
        if out.len() < Self::CORNER_COUNT {
            return Err(BoundsError::CornerBufferTooSmall {
                len: out.len(),
                required: Self::CORNER_COUNT,
            });
        }
        out[..Self::CORNER_COUNT].copy_from_slice(&self.corners());
        Ok(())
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Dimensions along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Half of [`BoundingBox::size`].
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.size() * 0.5
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Opt-in check that `min <= max` on every axis. Queries never reject
    /// an inverted box themselves.
    ///
    /// # Errors
    ///
    /// [`BoundsError::Inverted`] naming the first offending axis. NaN
    /// components also fail.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> BoundsResult<()> {
        let axes = [
            ('x', self.min.x, self.max.x),
            ('y', self.min.y, self.max.y),
            ('z', self.min.z, self.max.z),
        ];
        for (axis, min, max) in axes {
            if !(min <= max) {
                return Err(BoundsError::Inverted { axis, min, max });
            }
        }
        Ok(())
    }

    /// Sum of the corner hashes.
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        self.min.hash_code().wrapping_add(self.max.hash_code())
    }

    #[cfg(all(debug_assertions, feature = "bounds_validation"))]
    fn warn_if_inverted(&self, op: &str) {
        if let Err(err) = self.validate() {
            log::warn!("{op} received {self}: {err}");
        }
    }

    #[cfg(not(all(debug_assertions, feature = "bounds_validation")))]
    #[allow(clippy::unused_self)]
    fn warn_if_inverted(&self, _op: &str) {}
}

impl Hash for BoundingBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Min:{} Max:{}}}", self.min, self.max)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
