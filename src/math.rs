//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Square root with negative radicands clamped to zero.
///
/// Near resonance `1 - pf²` can round to a tiny negative number; the result is
/// then exactly zero instead of NaN.
#[must_use]
pub fn clamped_sqrt(radicand: Scalar) -> Scalar {
    if radicand < 0.0 {
        tracing::trace!(radicand, "clamping negative radicand to zero");
        0.0
    } else {
        radicand.sqrt()
    }
}

/// Phase angle `arccos(pf)` in radians, with `pf` clamped to `[-1, 1]`.
#[must_use]
pub fn phase_from_power_factor(power_factor: Scalar) -> Scalar {
    power_factor.clamp(-1.0, 1.0).acos()
}
