//! rcfilter - RC Filter Frequency Response
//!
//! Explores the frequency response of a fixed single-pole RC filter
//! (R = 10 kΩ, C = 0.01 µF, Vin = 10 V) in low-pass or high-pass form.
//!
//! # Architecture
//!
//! - [`filter`]: the response engine. Pure functions computing magnitude,
//!   gain in dB and output voltage for one frequency, and a fixed
//!   logarithmic sweep over 1 Hz - 100 kHz.
//! - [`api`]: request and sweep handlers that turn JSON request bodies into
//!   engine calls and engine results into response bodies.
//! - [`cli`]: the `rcfilter-cli` command line front end.

pub mod api;
pub mod cli;
pub mod error;
pub mod filter;

pub use error::{RcFilterError, Result};
pub use filter::{compute, sweep, ResponseResult, SweepResult, Topology};
