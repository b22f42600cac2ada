use thiserror::Error;

/// Result type for bounding-box construction and corner queries.
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Failures raised by [`BoundingBox`](super::BoundingBox) operations.
///
/// Numeric edge cases (division by zero, zero-length normalization) are
/// never reported here; they propagate as IEEE-754 special values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// No point sequence was supplied at all.
    #[error("point sequence is missing")]
    NullPoints,
    /// A point sequence was supplied but yielded no points.
    #[error("point sequence is empty")]
    EmptyPoints,
    /// The caller-supplied corner buffer cannot hold every corner.
    #[error("corner buffer holds {len} elements, at least {required} are required")]
    CornerBufferTooSmall { len: usize, required: usize },
    /// `min` exceeds `max` on the given axis.
    #[error("bounding box is inverted on the {axis} axis (min {min} > max {max})")]
    Inverted { axis: char, min: f32, max: f32 },
}

impl BoundsError {
    /// `true` for the invalid-argument family, `false` for empty input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::EmptyPoints)
    }
}
