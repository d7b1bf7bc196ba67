//! Some shared linear algebra concepts

use crate::numeric::Float;
use nalgebra::Vector3;

/// 3-vectors of real numbers, as used for positions, momenta and fields
pub type Vector3R = Vector3<Float>;

/// Particle momentum (spatial 3-momentum, kg·m/s in SI units)
pub type Momentum = Vector3R;

/// Convenience const for accessing the X coordinate of a 3-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 3-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 3-vector
pub const Z: usize = 2;
