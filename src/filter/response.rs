//! Single-frequency response of the RC filter.

use log::debug;
use serde::Serialize;

use super::constants::{cutoff_frequency, RC_CIRCUIT};
use super::topology::Topology;
use crate::error::{RcFilterError, Result};

/// A validated input frequency.
///
/// Only finite, strictly positive frequencies can be constructed, so the
/// formulas below never see a value where division or log is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyQuery {
    frequency_hz: f64,
}

impl FrequencyQuery {
    /// Validate a frequency in Hz
    ///
    /// # Errors
    /// [`RcFilterError::InvalidFrequency`] for zero, negative, NaN or infinite input.
    pub fn new(frequency_hz: f64) -> Result<Self> {
        if frequency_hz.is_finite() && frequency_hz > 0.0 {
            Ok(Self { frequency_hz })
        } else {
            Err(RcFilterError::InvalidFrequency {
                frequency: Some(frequency_hz),
            })
        }
    }

    /// Validate an optional frequency, treating `None` as invalid
    pub fn from_option(frequency_hz: Option<f64>) -> Result<Self> {
        match frequency_hz {
            Some(f) => Self::new(f),
            None => Err(RcFilterError::InvalidFrequency { frequency: None }),
        }
    }

    /// Frequency in Hz
    pub fn hz(&self) -> f64 {
        self.frequency_hz
    }
}

impl TryFrom<f64> for FrequencyQuery {
    type Error = RcFilterError;

    fn try_from(frequency_hz: f64) -> Result<Self> {
        Self::new(frequency_hz)
    }
}

/// Response of the filter at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseResult {
    /// |H(f)|, in [0, 1]
    pub magnitude: f64,
    /// 20·log10(|H(f)|); `-inf` if the magnitude underflowed to zero
    pub gain_db: f64,
    /// Output amplitude in volts (magnitude · Vin)
    pub vout_volts: f64,
}

impl ResponseResult {
    /// Evaluate the filter at an already validated frequency
    pub fn at(topology: Topology, query: FrequencyQuery) -> Self {
        let ratio = query.hz() / cutoff_frequency();
        let magnitude = magnitude(topology, ratio);
        let result = Self {
            magnitude,
            gain_db: magnitude_to_db(magnitude),
            vout_volts: magnitude * RC_CIRCUIT.input_voltage,
        };

        debug!(
            "{} @ {} Hz: |H|={} gain={} dB vout={} V",
            topology,
            query.hz(),
            result.magnitude,
            result.gain_db,
            result.vout_volts
        );

        result
    }
}

/// Compute magnitude, gain and output voltage for one frequency.
///
/// # Errors
/// [`RcFilterError::InvalidFrequency`] if `frequency_hz` is not a finite value > 0.
///
/// # Example
/// ```
/// use rcfilter::filter::{compute, Topology};
///
/// let r = compute(Topology::LowPass, 15_915.5).unwrap();
/// assert!((r.gain_db + 20.04).abs() < 0.01);
/// ```
pub fn compute(topology: Topology, frequency_hz: f64) -> Result<ResponseResult> {
    let query = FrequencyQuery::new(frequency_hz)?;
    Ok(ResponseResult::at(topology, query))
}

/// Transfer-function magnitude for a given `f / fc` ratio.
///
/// `hypot` keeps `sqrt(1 + ratio²)` from overflowing at very large ratios.
#[inline]
pub fn magnitude(topology: Topology, ratio: f64) -> f64 {
    let denominator = ratio.hypot(1.0);
    match topology {
        Topology::LowPass => 1.0 / denominator,
        Topology::HighPass => ratio / denominator,
    }
}

/// Convert a linear magnitude to decibels.
///
/// A magnitude of exactly zero maps to negative infinity instead of an error.
#[inline]
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    if magnitude <= 0.0 {
        f64::NEG_INFINITY
    } else {
        20.0 * magnitude.log10()
    }
}
