//! Transport-agnostic request handling.
//!
//! Each endpoint takes a JSON request body and returns a JSON response body.
//! Any transport (HTTP, CLI, message queue) can sit on top of [`dispatch`].

mod handlers;

use std::fmt;
use std::str::FromStr;

use crate::error::{RcFilterError, Result};

pub use handlers::{
    handle_gain, handle_sweep, health, ErrorResponse, FilterRequest, FilterResponse,
    HealthStatus, SweepResponse,
};

/// Routes served by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Single-frequency gain (`/api/rc-gain`)
    RcGain,
    /// Frequency sweep (`/api/sweep`)
    Sweep,
    /// Liveness check (`/health`)
    Health,
}

impl Endpoint {
    /// Route name without prefix
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::RcGain => "rc-gain",
            Endpoint::Sweep => "sweep",
            Endpoint::Health => "health",
        }
    }

    /// Full route path
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::RcGain => "/api/rc-gain",
            Endpoint::Sweep => "/api/sweep",
            Endpoint::Health => "/health",
        }
    }

    /// Whether the endpoint reads a request body
    pub fn takes_body(&self) -> bool {
        !matches!(self, Endpoint::Health)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = RcFilterError;

    /// Accepts either the bare name or the full path
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rc-gain" | "/api/rc-gain" => Ok(Endpoint::RcGain),
            "sweep" | "/api/sweep" => Ok(Endpoint::Sweep),
            "health" | "/health" => Ok(Endpoint::Health),
            other => Err(RcFilterError::UnknownEndpoint {
                name: other.to_string(),
            }),
        }
    }
}

/// Decode `body`, run the endpoint's handler and encode the response.
///
/// The health endpoint ignores `body`.
pub fn dispatch(endpoint: Endpoint, body: &str) -> Result<String> {
    let json = match endpoint {
        Endpoint::RcGain => {
            let request: FilterRequest = serde_json::from_str(body)?;
            serde_json::to_string(&handle_gain(&request)?)?
        }
        Endpoint::Sweep => {
            let request: FilterRequest = serde_json::from_str(body)?;
            serde_json::to_string(&handle_sweep(&request)?)?
        }
        Endpoint::Health => serde_json::to_string(&health())?,
    };
    Ok(json)
}

/// Like [`dispatch`], but rejected requests produce an [`ErrorResponse`] body.
///
/// Returns `(ok, body)` where `ok` is false for error bodies.
pub fn dispatch_or_error(endpoint: Endpoint, body: &str) -> (bool, String) {
    match dispatch(endpoint, body) {
        Ok(json) => (true, json),
        Err(err) => {
            let error_body = ErrorResponse::from(&err);
            // ErrorResponse holds only strings
            let json = serde_json::to_string(&error_body)
                .unwrap_or_else(|_| format!("{{\"code\":\"{}\"}}", error_body.code));
            (false, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_parse() {
        assert_eq!("rc-gain".parse::<Endpoint>().unwrap(), Endpoint::RcGain);
        assert_eq!("/api/sweep".parse::<Endpoint>().unwrap(), Endpoint::Sweep);
        assert_eq!("/health".parse::<Endpoint>().unwrap(), Endpoint::Health);
        assert!("/api/phase".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_endpoint_names_round_trip() {
        for endpoint in [Endpoint::RcGain, Endpoint::Sweep, Endpoint::Health] {
            assert_eq!(endpoint.name().parse::<Endpoint>().unwrap(), endpoint);
            assert_eq!(endpoint.path().parse::<Endpoint>().unwrap(), endpoint);
        }
    }

    #[test]
    fn test_dispatch_health_ignores_body() {
        let json = dispatch(Endpoint::Health, "not json").unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!Endpoint::Health.takes_body());
    }

    #[test]
    fn test_dispatch_bad_json() {
        let err = dispatch(Endpoint::RcGain, "{").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_dispatch_or_error_body() {
        let (ok, body) =
            dispatch_or_error(Endpoint::RcGain, r#"{"frequency": 0, "filter_type": "low-pass"}"#);
        assert!(!ok);
        let parsed: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.code, "INVALID_FREQUENCY");
    }
}
