//! RC Filter Response Engine
//!
//! Pure numeric core: computes the transfer-function magnitude, gain in dB
//! and output voltage of a fixed single-pole RC filter, either for a single
//! frequency or over a logarithmic sweep.
//!
//! Every function here is free of shared mutable state and I/O, so all of it
//! can be called from any number of threads concurrently.

mod constants;
mod response;
mod sweep;
mod topology;

pub use constants::{cutoff_frequency, CircuitConstants, RC_CIRCUIT};
pub use response::{compute, magnitude, magnitude_to_db, FrequencyQuery, ResponseResult};
pub use sweep::{
    log_spaced, sweep, SweepResult, SWEEP_END_HZ, SWEEP_POINTS, SWEEP_START_HZ,
};
pub use topology::Topology;
