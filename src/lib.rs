//! Discrete trajectory sampling and relativistic kinematics
//!
//!
//! # Introduction (for the physicist)
//!
//! This small computational library provides the numerical core of a
//! retarded-field (Lienard-Wiechert) radiation calculation: it keeps the four
//! most recent samples of a quantity along a particle trajectory, estimates
//! time derivatives of that quantity with centered finite differences, and
//! converts a momentum history into the Lorentz factor 𝛾 and normalized
//! velocity 𝛽 = v/c that the retarded-field formulas consume.
//!
//! It makes no assumption of equidistant time sampling: the time samples only
//! have to be strictly increasing, and every buffer computes its derivatives
//! against one shared buffer of simulation time values.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Each quantity (position, momentum, field, ...) lives in a rolling window
//! of four samples, labeled `old2` (t−3), `old` (t−2), `now` (t−1) and
//! `future` (t−0). Two symmetric difference quotients are available, one
//! valid at `old` and one at `now`; they are exact for signals linear in
//! time. The denominators are raw time differences two slots apart, with no
//! explicit factor of 2 — on a uniform grid of step h this is the standard
//! second-order centered stencil over 2h, on a non-uniform grid it remains a
//! first-order-accurate centered estimate. Downstream numerics depend on this
//! exact quotient, so it is kept as is.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Two components, instantiated per tracked quantity per particle:
//!
//! * [`TimeSeries4<T>`], a generic four-sample rolling window advanced once
//!   per simulation step, holding a non-owning handle to the shared
//!   [`TimeBase`] of its particle.
//! * [`RelativisticConverter`], a stateless sample-wise momentum → 𝛾/𝛽
//!   transform that stamps its outputs with the same time base.
//!
//! The surrounding simulation driver owns the stepping loop and decides how
//! particles are scheduled; nothing here synchronizes, and a particle's
//! buffer set (time base included) must stay on a single worker.

#![warn(missing_docs)]

pub mod linalg;
pub mod numeric;
pub mod relativity;
pub mod series;
pub mod units;

pub use relativity::RelativisticConverter;
pub use series::{TimeBase, TimeSeries4};

/// We'll use anyhow's type-erased result type throughout the library
pub type Result<T> = anyhow::Result<T>;
