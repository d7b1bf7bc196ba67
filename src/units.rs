//! Physical constants used by the relativistic conversions
//!
//! Everything is expressed in SI units, matching the momentum samples
//! (kg·m/s) produced by the surrounding particle tracker. Values are CODATA.

use crate::numeric::Float;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: Float = 2.997_924_58e8;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: Float = 9.109_383_7015e-31;

/// Electron rest energy m_e·c² (J)
pub const ELECTRON_REST_ENERGY: Float = ELECTRON_MASS * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
