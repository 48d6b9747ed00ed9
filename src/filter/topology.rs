//! Filter topology selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RcFilterError, Result};

/// Which side of the RC network the output is taken across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Output across the capacitor: passes frequencies below the cutoff
    #[serde(rename = "low-pass")]
    LowPass,
    /// Output across the resistor: passes frequencies above the cutoff
    #[serde(rename = "high-pass")]
    HighPass,
}

impl Topology {
    /// All supported topologies
    pub const ALL: [Topology; 2] = [Topology::LowPass, Topology::HighPass];

    /// Wire name used by requests and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::LowPass => "low-pass",
            Topology::HighPass => "high-pass",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = RcFilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low-pass" => Ok(Topology::LowPass),
            "high-pass" => Ok(Topology::HighPass),
            other => Err(RcFilterError::UnknownTopology {
                value: other.to_string(),
            }),
        }
    }
}
