use num_complex::Complex;

use crate::config::CircuitParameters;
use crate::constants::angular_frequency;
use crate::math::Scalar;

use super::analysis::DomainError;
use super::component::{Capacitor, Component, Inductor, Resistor, VoltageSource};

/// Inductive and capacitive reactance magnitudes at the source frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reactances {
    /// `XL = 2πfL` in ohms.
    pub inductive: Scalar,
    /// `XC = 1 / (2πfC)` in ohms.
    pub capacitive: Scalar,
}

impl Reactances {
    /// Net reactance `X = XL - XC`; negative when the circuit is capacitive.
    #[must_use]
    pub fn net(&self) -> Scalar {
        self.inductive - self.capacitive
    }
}

/// Series R-L-C loop driven by a single sinusoidal source.
///
/// This is the only topology the crate models.
#[derive(Debug, Clone)]
pub struct SeriesRlc {
    /// Series resistor.
    pub resistor: Resistor,
    /// Series inductor.
    pub inductor: Inductor,
    /// Series capacitor.
    pub capacitor: Capacitor,
    /// Driving source.
    pub source: VoltageSource,
}

impl SeriesRlc {
    /// Builds the loop from a parameter record.
    #[must_use]
    pub fn from_parameters(params: &CircuitParameters) -> Self {
        Self {
            resistor: Resistor::new("R", params.resistance),
            inductor: Inductor::new("L", params.inductance),
            capacitor: Capacitor::new("C", params.capacitance),
            source: VoltageSource::new("V", params.source_voltage, params.frequency),
        }
    }

    /// Angular frequency of the source in rad/s.
    #[must_use]
    pub fn omega(&self) -> Scalar {
        angular_frequency(self.source.frequency.value())
    }

    /// Reactances of the inductor and capacitor at the source frequency.
    pub fn reactances(&self) -> Result<Reactances, DomainError> {
        let omega = self.omega();
        Ok(Reactances {
            inductive: self.inductor.reactance(omega),
            capacitive: self.capacitor.reactance(omega)?,
        })
    }

    /// Complex input impedance `R + jX` seen by the source.
    pub fn impedance(&self) -> Result<Complex<Scalar>, DomainError> {
        let omega = self.omega();
        let members: [&dyn Component; 3] = [&self.resistor, &self.inductor, &self.capacitor];
        let mut total = Complex::<Scalar>::default();
        for component in members {
            let z = component.impedance(omega)?;
            tracing::trace!(component = component.name(), re = z.re, im = z.im, "member impedance");
            total += z;
        }
        Ok(total)
    }
}
