#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Single-precision geometric primitives for game code: [`Vector3`] and the
//! axis-aligned [`BoundingBox`].
//!
//! Arithmetic follows IEEE-754 throughout. Nothing here checks for division
//! by zero or zero-length normalization; those produce infinities or NaN.

pub mod geom;

pub use geom::{BoundingBox, BoundsError, BoundsResult, ContainmentType, Vector3};
