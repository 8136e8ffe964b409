//! Lightweight typed quantities.
//!
//! A [`Quantity`] is a value tagged with a zero-sized unit marker so a
//! capacitance cannot be passed where an inductance is expected.

use std::fmt;
use std::marker::PhantomData;

/// Marker trait for physical units.
pub trait Unit {
    /// Unit symbol used when formatting.
    const SYMBOL: &'static str;
}

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Unit for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit!(
    /// Ohms (Ω).
    Ohm,
    "Ω"
);
unit!(
    /// Henries (H).
    Henry,
    "H"
);
unit!(
    /// Farads (F).
    Farad,
    "F"
);
unit!(
    /// Volts (V).
    Volt,
    "V"
);
unit!(
    /// Amperes (A).
    Ampere,
    "A"
);
unit!(
    /// Hertz (Hz).
    Hertz,
    "Hz"
);
unit!(
    /// Watts (W), for active power.
    Watt,
    "W"
);
unit!(
    /// Volt-amperes reactive (VAR).
    VoltAmpereReactive,
    "VAR"
);
unit!(
    /// Volt-amperes (VA), for apparent power.
    VoltAmpere,
    "VA"
);

/// A scalar value carrying a unit marker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quantity<T, U> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

// Manual impls so the marker type does not need to implement these traits.
impl<T: Copy, U> Clone for Quantity<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, U> Copy for Quantity<T, U> {}

impl<T: PartialEq, U> PartialEq for Quantity<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug, U: Unit> fmt::Debug for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value, U::SYMBOL)
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", U::SYMBOL)
    }
}

/// Resistance or impedance magnitude.
pub type Impedance<T> = Quantity<T, Ohm>;
/// Voltage magnitude.
pub type Voltage<T> = Quantity<T, Volt>;
/// Current magnitude.
pub type Current<T> = Quantity<T, Ampere>;
/// Linear frequency.
pub type Frequency<T> = Quantity<T, Hertz>;
/// Active power.
pub type ActivePower<T> = Quantity<T, Watt>;
/// Reactive power.
pub type ReactivePower<T> = Quantity<T, VoltAmpereReactive>;
/// Apparent power.
pub type ApparentPower<T> = Quantity<T, VoltAmpere>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_symbol() {
        let z: Impedance<f64> = Quantity::new(19.5);
        assert_eq!(format!("{z:.2}"), "19.50 Ω");
        let f: Frequency<f64> = Quantity::new(50.0);
        assert_eq!(f.to_string(), "50 Hz");
    }

    #[test]
    fn quantities_compare_by_value() {
        let a: Quantity<f64, Henry> = Quantity::new(0.016);
        assert_eq!(a, Quantity::new(0.016));
        assert_eq!(a.value(), 0.016);
    }
}
