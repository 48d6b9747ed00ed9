//! Fixed circuit constants.

use std::f64::consts::PI;

use serde::Serialize;

/// Component values of the RC network.
///
/// Shared by both topologies and never mutated; the engine only ever reads
/// [`RC_CIRCUIT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircuitConstants {
    /// Series resistance in ohms
    pub resistance_ohms: f64,
    /// Capacitance in farads
    pub capacitance_farads: f64,
    /// Amplitude of the input signal in volts
    pub input_voltage: f64,
}

/// R = 10 kΩ, C = 0.01 µF, Vin = 10 V
pub const RC_CIRCUIT: CircuitConstants = CircuitConstants {
    resistance_ohms: 10_000.0,
    capacitance_farads: 1e-8,
    input_voltage: 10.0,
};

impl CircuitConstants {
    /// Time constant τ = R·C in seconds
    pub fn time_constant(&self) -> f64 {
        self.resistance_ohms * self.capacitance_farads
    }

    /// Cutoff frequency fc = 1 / (2π·R·C) in Hz
    pub fn cutoff_frequency(&self) -> f64 {
        1.0 / (2.0 * PI * self.time_constant())
    }
}

/// Cutoff frequency of [`RC_CIRCUIT`] (≈ 1591.55 Hz).
///
/// Always derived from R and C so the two can never drift apart.
pub fn cutoff_frequency() -> f64 {
    RC_CIRCUIT.cutoff_frequency()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_component_values() {
        assert_eq!(RC_CIRCUIT.resistance_ohms, 10_000.0);
        assert_eq!(RC_CIRCUIT.capacitance_farads, 1e-8);
        assert_eq!(RC_CIRCUIT.input_voltage, 10.0);
    }

    #[test]
    fn test_time_constant() {
        assert_relative_eq!(RC_CIRCUIT.time_constant(), 1e-4, max_relative = 1e-12);
    }

    #[test]
    fn test_cutoff_frequency() {
        assert_relative_eq!(cutoff_frequency(), 1591.549_430_918_953, max_relative = 1e-12);
    }

    #[test]
    fn test_cutoff_tracks_components() {
        let doubled = CircuitConstants {
            resistance_ohms: 20_000.0,
            ..RC_CIRCUIT
        };
        assert_relative_eq!(
            doubled.cutoff_frequency(),
            cutoff_frequency() / 2.0,
            max_relative = 1e-12
        );
    }
}
