use num_complex::Complex;

use crate::circuits::analysis::DomainError;
use crate::math::Scalar;
use crate::units::{Farad, Frequency, Henry, Impedance, Quantity, Voltage};

/// Trait implemented by all circuit components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, DomainError>;

    /// Human-readable identifier (e.g. `R1`).
    fn name(&self) -> &str;
}

/// Lumped resistor model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Resistor {
    name: String,
    resistance: Impedance<Scalar>,
}

impl Resistor {
    /// Creates a resistor.
    #[must_use]
    pub fn new(name: impl Into<String>, resistance_ohms: Scalar) -> Self {
        Self {
            name: name.into(),
            resistance: Impedance::new(resistance_ohms),
        }
    }

    /// Resistance magnitude in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance.value()
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> Result<Complex<Scalar>, DomainError> {
        Ok(Complex::new(self.resistance(), 0.0))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped capacitor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Capacitor {
    name: String,
    capacitance: Quantity<Scalar, Farad>,
}

impl Capacitor {
    /// Creates a capacitor.
    #[must_use]
    pub fn new(name: impl Into<String>, capacitance_f: Scalar) -> Self {
        Self {
            name: name.into(),
            capacitance: Quantity::new(capacitance_f),
        }
    }

    /// Returns the capacitance magnitude in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }

    /// Capacitive reactance magnitude `1 / (ωC)` in ohms.
    ///
    /// Fails instead of returning infinity when `ω = 0` (DC), `C = 0`, or
    /// `ωC` is too small to invert.
    pub fn reactance(&self, omega: Scalar) -> Result<Scalar, DomainError> {
        if omega == 0.0 {
            return Err(DomainError::ZeroFrequency);
        }
        if self.capacitance() == 0.0 {
            return Err(DomainError::ZeroCapacitance);
        }
        let x = 1.0 / (omega * self.capacitance());
        if x.is_finite() {
            Ok(x)
        } else {
            Err(DomainError::Overflow("capacitive reactance"))
        }
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, DomainError> {
        Ok(Complex::new(0.0, -self.reactance(omega)?))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped inductor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Inductor {
    name: String,
    inductance: Quantity<Scalar, Henry>,
}

impl Inductor {
    /// Creates an inductor.
    #[must_use]
    pub fn new(name: impl Into<String>, inductance_h: Scalar) -> Self {
        Self {
            name: name.into(),
            inductance: Quantity::new(inductance_h),
        }
    }

    /// Returns the inductance magnitude in henries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance.value()
    }

    /// Inductive reactance `ωL` in ohms.
    #[must_use]
    pub fn reactance(&self, omega: Scalar) -> Scalar {
        omega * self.inductance()
    }
}

impl Component for Inductor {
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, DomainError> {
        Ok(Complex::new(0.0, self.reactance(omega)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ideal sinusoidal voltage source at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct VoltageSource {
    /// Externally visible name.
    pub name: String,
    /// RMS voltage magnitude.
    pub voltage: Voltage<Scalar>,
    /// Source frequency.
    pub frequency: Frequency<Scalar>,
}

impl VoltageSource {
    /// Creates a sinusoidal voltage source.
    #[must_use]
    pub fn new(name: impl Into<String>, voltage_v: Scalar, frequency_hz: Scalar) -> Self {
        Self {
            name: name.into(),
            voltage: Quantity::new(voltage_v),
            frequency: Quantity::new(frequency_hz),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new("R1", 100.0);
        let z = r.impedance(1.0).unwrap();
        assert_relative_eq!(z.re, 100.0);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Capacitor::new("C1", 1e-6);
        let omega = 1.0e3;
        let z = c.impedance(omega).unwrap();
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.im, -1_000.0, max_relative = 1.0e-12);
    }

    #[test]
    fn capacitor_rejects_dc_and_zero_capacitance() {
        let c = Capacitor::new("C1", 1e-6);
        assert_eq!(c.reactance(0.0), Err(DomainError::ZeroFrequency));
        let open = Capacitor::new("C0", 0.0);
        assert_eq!(open.impedance(1.0), Err(DomainError::ZeroCapacitance));
    }

    #[test]
    fn capacitor_rejects_underflowing_product() {
        // ωC underflows to zero here, and a subnormal ωC inverts to infinity.
        let tiny = Capacitor::new("C1", 1.0e-320);
        assert_eq!(
            tiny.reactance(1.0e-10),
            Err(DomainError::Overflow("capacitive reactance"))
        );
        assert_eq!(
            tiny.reactance(1.0e10),
            Err(DomainError::Overflow("capacitive reactance"))
        );
    }

    #[test]
    fn component_names_are_kept() {
        assert_eq!(Resistor::new("R1", 1.0).name(), "R1");
        assert_eq!(Capacitor::new("C1", 1.0).name(), "C1");
        assert_eq!(Inductor::new("L1", 1.0).name(), "L1");
    }

    #[test]
    fn inductor_reactance_is_linear_in_omega() {
        let l = Inductor::new("L1", 0.016);
        assert_relative_eq!(l.reactance(100.0), 1.6, max_relative = 1.0e-12);
        assert_relative_eq!(l.impedance(200.0).unwrap().im, 3.2, max_relative = 1.0e-12);
    }
}
