//! Logarithmic frequency sweep.

use log::debug;
use serde::Serialize;

use super::constants::cutoff_frequency;
use super::response::{magnitude, magnitude_to_db};
use super::topology::Topology;

/// Number of points in a sweep. 100 points give a smooth Bode curve on a
/// log axis; the count is fixed and not exposed to callers.
pub const SWEEP_POINTS: usize = 100;

/// Lower edge of the sweep band (1 Hz)
pub const SWEEP_START_HZ: f64 = 1.0;

/// Upper edge of the sweep band (100 kHz)
pub const SWEEP_END_HZ: f64 = 100_000.0;

/// Gain over the sweep band, index-aligned with the frequency axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Strictly increasing, log-spaced frequencies in Hz
    pub frequencies: Vec<f64>,
    /// Gain in dB at each frequency
    pub gains_db: Vec<f64>,
}

impl SweepResult {
    /// Number of samples in the sweep
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the sweep has no samples
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over `(frequency_hz, gain_db)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.gains_db.iter().copied())
    }
}

/// `count` frequencies spaced evenly in log10 from `start` to `end` inclusive.
///
/// Both `start` and `end` must be > 0. The endpoints are returned exactly
/// rather than through `10^log10(x)`, which can be off by one ulp.
pub fn log_spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let start_exp = start.log10();
            let end_exp = end.log10();
            let last = (count - 1) as f64;

            (0..count)
                .map(|i| {
                    if i == 0 {
                        start
                    } else if i == count - 1 {
                        end
                    } else {
                        let exp = start_exp + (end_exp - start_exp) * i as f64 / last;
                        10f64.powf(exp)
                    }
                })
                .collect()
        }
    }
}

/// Gain of the filter across the fixed 1 Hz – 100 kHz band.
///
/// The frequency axis depends only on the band constants, so the sweeps of
/// both topologies can be overlaid point for point.
pub fn sweep(topology: Topology) -> SweepResult {
    let frequencies = log_spaced(SWEEP_START_HZ, SWEEP_END_HZ, SWEEP_POINTS);
    let fc = cutoff_frequency();

    let gains_db = frequencies
        .iter()
        .map(|&f| magnitude_to_db(magnitude(topology, f / fc)))
        .collect();

    debug!(
        "{} sweep: {} points over {}-{} Hz",
        topology,
        frequencies.len(),
        SWEEP_START_HZ,
        SWEEP_END_HZ
    );

    SweepResult {
        frequencies,
        gains_db,
    }
}
