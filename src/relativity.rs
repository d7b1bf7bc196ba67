//! Relativistic kinematics derived from a particle's momentum history
//!
//! Detector backends need the Lorentz factor 𝛾 and the normalized velocity
//! 𝛽 = v/c at the same four time slots as the sampled trajectory, so the
//! conversions here map a whole momentum window to 𝛾/𝛽 windows stamped with
//! the same time base.
//!
//! The underlying identities are `E = sqrt((p·c)² + (m₀·c²)²) = 𝛾·m₀·c²` and
//! `𝛽 = v/c` with `v = p / (m₀·𝛾)`.

use crate::{
    linalg::Momentum,
    numeric::Float,
    series::{TimeBase, TimeSeries4},
    units::{ELECTRON_MASS, ELECTRON_REST_ENERGY, SPEED_OF_LIGHT},
};

use prefix_num_ops::real::*;

use std::rc::Rc;

/// Sample-wise momentum → 𝛾/𝛽 converter for one particle
///
/// Holds nothing but a handle to the particle's shared time base, which is
/// only used to stamp the converted windows; every conversion is a pure
/// function of its inputs.
pub struct RelativisticConverter {
    /// Time base of the momentum windows this converter is applied to
    time: Rc<TimeBase>,
}
//
impl RelativisticConverter {
    /// Set up conversions for windows bound to `time`
    pub fn new(time: Rc<TimeBase>) -> Self {
        Self { time }
    }

    // ### SINGLE-SAMPLE CONVERSIONS ###

    /// Lorentz factor of a single momentum sample
    ///
    /// `𝛾 = sqrt((|p|·c)² + (m_e·c²)²) / (m_e·c²)`, which is ≥ 1 for any
    /// finite momentum and exactly 1 at rest.
    pub fn gamma_of(&self, p: Momentum) -> Float {
        let pc_2 = p.norm_squared() * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
        sqrt(pc_2 + ELECTRON_REST_ENERGY * ELECTRON_REST_ENERGY) / ELECTRON_REST_ENERGY
    }

    /// Normalized velocity 𝛽 = v/c of a single momentum sample
    ///
    /// `𝛽 = p / (c·m_e·𝛾)`, the zero vector at rest regardless of `gamma`.
    /// `gamma` is taken as an argument rather than recomputed so that a
    /// caller needing both quantities pays for the square root only once.
    pub fn beta_of(&self, p: Momentum, gamma: Float) -> Momentum {
        p / (SPEED_OF_LIGHT * ELECTRON_MASS * gamma)
    }

    // ### WINDOW CONVERSIONS ###

    /// Convert a momentum window into a Lorentz factor window
    ///
    /// All four slots are converted, including the outer ones that carry no
    /// derivative: this is a sample-wise map, not a stencil. The result is
    /// bound to the same time base, so its two interior derivatives estimate
    /// d𝛾/dt along the trajectory.
    pub fn momentum_to_gamma(&self, p: &TimeSeries4<Momentum>) -> TimeSeries4<Float> {
        TimeSeries4::new(
            self.gamma_of(p.old2()),
            self.gamma_of(p.old()),
            self.gamma_of(p.now()),
            self.gamma_of(p.future()),
            Some(self.time.clone()),
        )
    }

    /// Convert a momentum window into a normalized-velocity window
    ///
    /// `gamma` is the already-converted Lorentz factor window for the same
    /// momentum samples, typically the output of
    /// [`RelativisticConverter::momentum_to_gamma`].
    pub fn momentum_to_beta(
        &self,
        p: &TimeSeries4<Momentum>,
        gamma: &TimeSeries4<Float>,
    ) -> TimeSeries4<Momentum> {
        TimeSeries4::new(
            self.beta_of(p.old2(), gamma.old2()),
            self.beta_of(p.old(), gamma.old()),
            self.beta_of(p.now(), gamma.now()),
            self.beta_of(p.future(), gamma.future()),
            Some(self.time.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeBase;

    fn converter() -> RelativisticConverter {
        RelativisticConverter::new(Rc::new(TimeBase::with_step(0., 1e-15).unwrap()))
    }

    #[test]
    fn gamma_at_rest_is_exactly_one() {
        assert_eq!(converter().gamma_of(Momentum::zeros()), 1.);
    }

    #[test]
    fn beta_at_rest_is_exactly_zero() {
        let conv = converter();
        for gamma in [1., 2., 1e6] {
            assert_eq!(conv.beta_of(Momentum::zeros(), gamma), Momentum::zeros());
        }
    }

    #[test]
    fn speed_stays_below_light_speed() {
        // |beta| < 1 for any finite momentum, over many orders of magnitude
        let conv = converter();
        for exponent in -24..=-16 {
            let p = Momentum::new(3., -4., 12.) * powi(10., exponent);
            let gamma = conv.gamma_of(p);
            assert!(gamma >= 1.);
            let beta = conv.beta_of(p, gamma);
            assert!(beta.norm() < 1.);
        }
    }

    #[test]
    fn gamma_matches_momentum_rapidity_form() {
        // Same quantity through an algebraically equivalent route:
        // gamma = sqrt(1 + (|p| / (m_e·c))²)
        let conv = converter();
        let p = Momentum::new(0., 1e-22, -2e-21);
        let ratio = p.norm() / (ELECTRON_MASS * SPEED_OF_LIGHT);
        let expected = sqrt(1. + ratio * ratio);
        assert!((conv.gamma_of(p) - expected).abs() < 1e-12 * expected);
    }

    #[test]
    fn window_conversions_cover_all_four_slots() {
        let conv = converter();
        let p = TimeSeries4::new(
            Momentum::zeros(),
            Momentum::new(0., 0., 1e-21),
            Momentum::new(0., 0., 2e-21),
            Momentum::new(0., 0., 3e-21),
            None,
        );

        let gamma = conv.momentum_to_gamma(&p);
        assert_eq!(gamma.old2(), 1.);
        assert_eq!(gamma.old(), conv.gamma_of(p.old()));
        assert_eq!(gamma.now(), conv.gamma_of(p.now()));
        assert_eq!(gamma.future(), conv.gamma_of(p.future()));

        let beta = conv.momentum_to_beta(&p, &gamma);
        assert_eq!(beta.old2(), Momentum::zeros());
        assert_eq!(beta.future(), conv.beta_of(p.future(), gamma.future()));

        // Both results are stamped with the converter's time base
        let time = conv.time.clone();
        assert!(Rc::ptr_eq(gamma.time_base().unwrap(), &time));
        assert!(Rc::ptr_eq(beta.time_base().unwrap(), &time));
    }
}
