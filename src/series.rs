//! Rolling four-sample windows over a shared simulation time line
//!
//! This module provides the storage side of the trajectory core: a shared
//! [`TimeBase`] holding the four most recent simulation time values, and the
//! generic [`TimeSeries4`] window which pairs four samples of some quantity
//! with that time base to offer centered finite-difference derivatives.

use crate::{numeric::Float, Result};

use anyhow::ensure;

use num_traits::Zero;

use std::{
    cell::Cell,
    ops::{Div, Sub},
    rc::Rc,
};

/// Sample types storable in a [`TimeSeries4`] window
///
/// Scalars ([`Float`]) and nalgebra's fixed-size vectors both qualify: all a
/// sample type needs is subtraction between samples and division by a time
/// difference, applied component-wise for vectors, plus a zero value for
/// empty-window construction.
pub trait Sample: Copy + Zero + Sub<Output = Self> + Div<Float, Output = Self> {}
//
impl<T> Sample for T where T: Copy + Zero + Sub<Output = Self> + Div<Float, Output = Self> {}

/// Shared rolling window of the four most recent simulation time values
///
/// One instance exists per particle, owned by the simulation driver and
/// advanced by it exactly once per step. Every quantity window of that
/// particle holds an `Rc` handle to it, so the time samples are mutated
/// through interior mutability. `Cell` makes this type `!Sync`, which matches
/// the scheduling contract: a particle's buffer set is only ever touched by
/// one worker at a time.
pub struct TimeBase {
    /// Time samples for the four logical slots, oldest first
    samples: [Cell<Float>; 4],
}
//
impl TimeBase {
    // ### CONSTRUCTION ###

    /// Set up a time base from four explicit time samples
    ///
    /// The samples must be strictly increasing; derivative denominators are
    /// time differences, so a degenerate or reordered time line would
    /// silently poison every derivative computed against it.
    pub fn new(old2: Float, old: Float, now: Float, future: Float) -> Result<Self> {
        ensure!(
            old2 < old && old < now && now < future,
            "time samples must be strictly increasing (got {old2}, {old}, {now}, {future})"
        );
        Ok(Self {
            samples: [
                Cell::new(old2),
                Cell::new(old),
                Cell::new(now),
                Cell::new(future),
            ],
        })
    }

    /// Set up a time base for uniform stepping: t₀, t₀+h, t₀+2h, t₀+3h
    pub fn with_step(t_first: Float, step: Float) -> Result<Self> {
        ensure!(step > 0., "time step must be positive (got {step})");
        Self::new(
            t_first,
            t_first + step,
            t_first + 2. * step,
            t_first + 3. * step,
        )
    }

    // ### ADVANCEMENT ###

    /// Discard the oldest time sample and insert the next one
    ///
    /// Must be called exactly once per simulation step, before advancing the
    /// quantity windows that reference this time base.
    pub fn advance(&self, next: Float) {
        debug_assert!(
            next > self.future(),
            "time samples must be strictly increasing"
        );
        for newer in 1..self.samples.len() {
            self.samples[newer - 1].set(self.samples[newer].get());
        }
        self.samples[3].set(next);
    }

    // ### SLOT ACCESS ###

    /// Time value at the `old2` slot (t−3)
    pub fn old2(&self) -> Float {
        self.samples[0].get()
    }

    /// Time value at the `old` slot (t−2)
    pub fn old(&self) -> Float {
        self.samples[1].get()
    }

    /// Time value at the `now` slot (t−1)
    pub fn now(&self) -> Float {
        self.samples[2].get()
    }

    /// Time value at the `future` slot (t−0)
    pub fn future(&self) -> Float {
        self.samples[3].get()
    }
}

/// Rolling window of the four most recent samples of one quantity
///
/// The four logical slots are labeled `old2` (t−3), `old` (t−2), `now` (t−1)
/// and `future` (t−0). A window is paired for its whole lifetime with the
/// [`TimeBase`] of its particle; several windows (position, momentum, field,
/// ...) legitimately share one time base, and must be advanced in lockstep
/// with it.
///
/// The time base handle may be `None` for windows whose derivatives are never
/// requested (e.g. purely accumulated quantities); asking such a window for a
/// derivative is a programming error and panics.
#[derive(Clone)]
pub struct TimeSeries4<T: Sample> {
    /// Sample at t−3
    old2: T,

    /// Sample at t−2
    old: T,

    /// Sample at t−1
    now: T,

    /// Sample at t−0
    future: T,

    /// Non-owning handle to the time samples of the same four slots
    time: Option<Rc<TimeBase>>,
}
//
impl<T: Sample> TimeSeries4<T> {
    // ### CONSTRUCTION ###

    /// Build a fully populated window bound to `time`
    pub fn new(old2: T, old: T, now: T, future: T, time: Option<Rc<TimeBase>>) -> Self {
        Self {
            old2,
            old,
            now,
            future,
            time,
        }
    }

    /// Build an empty (all-zero) window bound to `time`
    ///
    /// The window only carries meaningful derivatives once four real samples
    /// have been fed in through [`TimeSeries4::advance`].
    pub fn empty(time: Option<Rc<TimeBase>>) -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero(), time)
    }

    // ### ADVANCEMENT ###

    /// Discard the oldest sample and insert the next one at the `future` slot
    ///
    /// This is the sole mutator of the window. Callers are responsible for
    /// invoking it exactly once per simulation step, synchronized with
    /// advancing the shared time base; no staleness check is performed.
    pub fn advance(&mut self, next: T) {
        self.old2 = self.old;
        self.old = self.now;
        self.now = self.future;
        self.future = next;
    }

    /// Copy the four samples of `other` into this window
    ///
    /// Both windows must reference the identical time base: copying samples
    /// across unrelated time lines would produce nonsensical derivatives, so
    /// mixing them up is treated as a fatal programming error.
    pub fn assign(&mut self, other: &Self) {
        assert!(
            same_time_base(&self.time, &other.time),
            "assignment between windows bound to different time bases"
        );
        self.old2 = other.old2;
        self.old = other.old;
        self.now = other.now;
        self.future = other.future;
    }

    // ### SLOT ACCESS ###

    /// Sample at the `old2` slot (t−3)
    pub fn old2(&self) -> T {
        self.old2
    }

    /// Sample at the `old` slot (t−2)
    pub fn old(&self) -> T {
        self.old
    }

    /// Sample at the `now` slot (t−1)
    pub fn now(&self) -> T {
        self.now
    }

    /// Sample at the `future` slot (t−0)
    pub fn future(&self) -> T {
        self.future
    }

    /// Handle to the shared time base, for correlating windows
    pub fn time_base(&self) -> Option<&Rc<TimeBase>> {
        self.time.as_ref()
    }

    // ### DERIVATIVES ###

    /// Centered derivative estimate at the `old` slot (t−2)
    ///
    /// Computed as `(now − old2) / (t.now − t.old2)`, the symmetric quotient
    /// over the two samples surrounding `old`. On a uniform time grid of step
    /// h the denominator equals 2h and this is the standard second-order
    /// centered difference; on a non-uniform grid it remains a valid centered
    /// estimate of first-order accuracy. The quotient is kept in exactly this
    /// form, without an explicit factor of 2.
    pub fn dot_old(&self) -> T {
        let time = self.time_base_for_derivative();
        let dt = time.now() - time.old2();
        debug_assert!(dt > 0., "degenerate time samples in derivative");
        (self.now - self.old2) / dt
    }

    /// Centered derivative estimate at the `now` slot (t−1)
    ///
    /// Computed as `(future − old) / (t.future − t.old)`, the analogue of
    /// [`TimeSeries4::dot_old`] one slot later. No derivative is available at
    /// the outermost slots (`old2`, `future`): the four-point window only
    /// yields the two interior stencils.
    pub fn dot_now(&self) -> T {
        let time = self.time_base_for_derivative();
        let dt = time.future() - time.old();
        debug_assert!(dt > 0., "degenerate time samples in derivative");
        (self.future - self.old) / dt
    }

    /// Backward difference `now − old` over the most recent completed step
    ///
    /// This is a plain sample difference, not a derivative: there is no
    /// division by the elapsed time.
    pub fn delta_old(&self) -> T {
        self.now - self.old
    }

    /// Access the time base, or die on the contract violation
    fn time_base_for_derivative(&self) -> &TimeBase {
        self.time
            .as_deref()
            .expect("derivative requested on a window with no time base")
    }
}

/// Check whether two windows reference the identical time base
///
/// Identity, not value equality: two time bases holding equal samples still
/// describe unrelated time lines. Two unbound windows count as matching.
fn same_time_base(a: &Option<Rc<TimeBase>>, b: &Option<Rc<TimeBase>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
