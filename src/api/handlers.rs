//! Request and Sweep handlers.
//!
//! Translate request bodies into engine calls and engine results into
//! response bodies. Topology strings are parsed here so the engine only ever
//! receives a valid [`Topology`].

use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RcFilterError, Result};
use crate::filter::{self, FrequencyQuery, ResponseResult, Topology};

/// Body of both the gain and sweep requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Input frequency in Hz. Required for gain, ignored by sweeps.
    #[serde(default)]
    pub frequency: Option<f64>,
    /// `"low-pass"` or `"high-pass"`
    pub filter_type: String,
}

impl FilterRequest {
    /// Build a request for `topology` at `frequency` Hz
    pub fn new(frequency: f64, topology: Topology) -> Self {
        Self {
            frequency: Some(frequency),
            filter_type: topology.as_str().to_string(),
        }
    }

    /// Parse the filter type into a [`Topology`]
    pub fn topology(&self) -> Result<Topology> {
        self.filter_type.parse()
    }
}

/// Response for a single-frequency gain request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    pub frequency: f64,
    pub magnitude: f64,
    /// Serialised as `null` when the gain is negative infinity
    #[serde(deserialize_with = "gain_or_neg_infinity")]
    pub gain_db: f64,
    pub vout: f64,
    pub filter_type: Topology,
}

impl FilterResponse {
    fn from_result(query: FrequencyQuery, topology: Topology, result: ResponseResult) -> Self {
        Self {
            frequency: query.hz(),
            magnitude: result.magnitude,
            gain_db: result.gain_db,
            vout: result.vout_volts,
            filter_type: topology,
        }
    }
}

/// Response for a sweep request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResponse {
    pub frequencies: Vec<f64>,
    #[serde(deserialize_with = "gains_or_neg_infinity")]
    pub gains_db: Vec<f64>,
    pub filter_type: Topology,
}

/// JSON has no infinity: a `null` gain was written for -inf dB.
fn gain_or_neg_infinity<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
}

fn gains_or_neg_infinity<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let gains = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(gains
        .into_iter()
        .map(|g| g.unwrap_or(f64::NEG_INFINITY))
        .collect())
}

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Error body returned in place of a response when a request is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl From<&RcFilterError> for ErrorResponse {
    fn from(err: &RcFilterError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            suggestions: err
                .recovery_suggestions()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Compute the response at the requested frequency.
pub fn handle_gain(request: &FilterRequest) -> Result<FilterResponse> {
    info!(
        "Received gain request: frequency={:?}, filter_type={}",
        request.frequency, request.filter_type
    );

    let topology = request.topology().map_err(|e| {
        warn!("Rejected gain request: {}", e);
        e
    })?;
    let query = FrequencyQuery::from_option(request.frequency).map_err(|e| {
        warn!("Rejected gain request: {}", e);
        e
    })?;

    let result = ResponseResult::at(topology, query);
    let response = FilterResponse::from_result(query, topology, result);

    info!(
        "Gain response: magnitude={:.6}, gain_db={:.3}, vout={:.4}",
        response.magnitude, response.gain_db, response.vout
    );
    Ok(response)
}

/// Produce the fixed-band sweep for the requested topology.
///
/// Any `frequency` in the request is accepted and has no effect on the band.
pub fn handle_sweep(request: &FilterRequest) -> Result<SweepResponse> {
    info!("Sweep request received for filter_type={}", request.filter_type);

    let topology = request.topology().map_err(|e| {
        warn!("Rejected sweep request: {}", e);
        e
    })?;
    let sweep = filter::sweep(topology);

    info!("Sweep data generated: {} points", sweep.len());
    Ok(SweepResponse {
        frequencies: sweep.frequencies,
        gains_db: sweep.gains_db,
        filter_type: topology,
    })
}

/// Report that the handlers are available.
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        message: "RC filter engine is running".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gain_echoes_request() {
        let request = FilterRequest::new(1000.0, Topology::LowPass);
        let response = handle_gain(&request).unwrap();

        assert_eq!(response.frequency, 1000.0);
        assert_eq!(response.filter_type, Topology::LowPass);
        assert_relative_eq!(response.vout, response.magnitude * 10.0);
    }

    #[test]
    fn test_gain_requires_frequency() {
        let request = FilterRequest {
            frequency: None,
            filter_type: "high-pass".to_string(),
        };
        let err = handle_gain(&request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FREQUENCY");
    }

    #[test]
    fn test_gain_rejects_unknown_filter_type() {
        let request = FilterRequest {
            frequency: Some(1000.0),
            filter_type: "band-pass".to_string(),
        };
        let err = handle_gain(&request).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TOPOLOGY");
    }

    #[test]
    fn test_sweep_ignores_frequency() {
        let with = handle_sweep(&FilterRequest::new(42.0, Topology::HighPass)).unwrap();
        let without = handle_sweep(&FilterRequest {
            frequency: None,
            filter_type: "high-pass".to_string(),
        })
        .unwrap();
        let negative = handle_sweep(&FilterRequest::new(-5.0, Topology::HighPass)).unwrap();

        assert_eq!(with, without);
        assert_eq!(with, negative);
    }

    #[test]
    fn test_error_response_from_error() {
        let err = RcFilterError::InvalidFrequency {
            frequency: Some(0.0),
        };
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "INVALID_FREQUENCY");
        assert!(!body.suggestions.is_empty());
    }

    #[test]
    fn test_null_gains_read_back_as_neg_infinity() {
        let response: SweepResponse = serde_json::from_str(
            r#"{"frequencies": [1.0, 2.0], "gains_db": [null, -3.0], "filter_type": "high-pass"}"#,
        )
        .unwrap();
        assert_eq!(response.gains_db, vec![f64::NEG_INFINITY, -3.0]);
    }

    #[test]
    fn test_health() {
        assert_eq!(health().status, "ok");
    }
}
