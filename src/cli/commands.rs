//! CLI Command Implementations
//!
//! Rendering for display happens here; the engine never rounds.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::info;

use super::OutputFormat;
use crate::api::{self, Endpoint, FilterRequest};
use crate::error::Result;
use crate::filter::{cutoff_frequency, Topology, RC_CIRCUIT, SWEEP_POINTS};

/// Compute and print the response at one frequency.
pub fn gain(topology: Topology, frequency: f64, format: OutputFormat) -> Result<()> {
    info!("Computing {} response at {} Hz", topology, frequency);

    let response = api::handle_gain(&FilterRequest::new(frequency, topology))?;
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
        OutputFormat::Text | OutputFormat::Csv => render_gain(&response),
    };

    println!("{}", output);
    Ok(())
}

/// Compute and print the fixed-band sweep.
pub fn sweep(topology: Topology, frequency: Option<f64>, format: OutputFormat) -> Result<()> {
    info!("Sweeping {} filter", topology);

    let request = FilterRequest {
        frequency,
        filter_type: topology.as_str().to_string(),
    };
    let response = api::handle_sweep(&request)?;
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
        OutputFormat::Csv => render_sweep_csv(&response),
        OutputFormat::Text => render_sweep_table(&response),
    };

    print!("{}", output);
    Ok(())
}

/// Print the circuit constants.
pub fn info(format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "resistance_ohms": RC_CIRCUIT.resistance_ohms,
                "capacitance_farads": RC_CIRCUIT.capacitance_farads,
                "input_voltage": RC_CIRCUIT.input_voltage,
                "time_constant_s": RC_CIRCUIT.time_constant(),
                "cutoff_hz": cutoff_frequency(),
                "sweep_points": SWEEP_POINTS,
            });
            serde_json::to_string_pretty(&value)?
        }
        OutputFormat::Text | OutputFormat::Csv => render_info(),
    };

    println!("{}", output);
    Ok(())
}

/// Run a request body through an endpoint and print the JSON reply.
///
/// Returns `false` when the handler rejected the request; the error body
/// has already been printed in that case.
pub fn request(endpoint: &str, body: Option<&Path>) -> Result<bool> {
    let (ok, json) = request_from(endpoint, body)?;
    println!("{}", json);
    Ok(ok)
}

/// Load the request body from `body` (or stdin) and dispatch it.
///
/// Returns `(ok, json)` where `json` is either the response or the error body.
pub fn request_from(endpoint: &str, body: Option<&Path>) -> Result<(bool, String)> {
    request_with_input(endpoint, body, io::stdin().lock())
}

fn request_with_input<R: Read>(
    endpoint: &str,
    body: Option<&Path>,
    stdin: R,
) -> Result<(bool, String)> {
    let endpoint: Endpoint = endpoint.parse()?;
    let body = read_body(endpoint, body, stdin)?;
    info!("Dispatching request to {}", endpoint.path());

    Ok(api::dispatch_or_error(endpoint, &body))
}

/// Endpoints without a body never touch stdin.
fn read_body<R: Read>(endpoint: Endpoint, path: Option<&Path>, mut stdin: R) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading request body from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None if endpoint.takes_body() => {
            let mut body = String::new();
            stdin.read_to_string(&mut body)?;
            Ok(body)
        }
        None => Ok(String::new()),
    }
}

pub(crate) fn render_gain(response: &api::FilterResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Filter:     {}", response.filter_type);
    let _ = writeln!(
        out,
        "Frequency:  {:.2} Hz (fc = {:.2} Hz)",
        response.frequency,
        cutoff_frequency()
    );
    let _ = writeln!(out, "Magnitude:  {:.4}", response.magnitude);
    let _ = writeln!(out, "Gain:       {:.2} dB", response.gain_db);
    let _ = write!(
        out,
        "Output:     {:.4} V (Vin = {} V)",
        response.vout, RC_CIRCUIT.input_voltage
    );
    out
}

pub(crate) fn render_sweep_table(response: &api::SweepResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} sweep, {} points", response.filter_type, response.frequencies.len());
    let _ = writeln!(out, "{:-<30}", "");
    let _ = writeln!(out, "{:>14}  {:>12}", "Frequency (Hz)", "Gain (dB)");
    for (f, g) in response.frequencies.iter().zip(&response.gains_db) {
        let _ = writeln!(out, "{:>14.2}  {:>12.2}", f, g);
    }
    out
}

pub(crate) fn render_sweep_csv(response: &api::SweepResponse) -> String {
    let mut out = String::from("frequency_hz,gain_db\n");
    for (f, g) in response.frequencies.iter().zip(&response.gains_db) {
        let _ = writeln!(out, "{},{}", f, g);
    }
    out
}

fn render_info() -> String {
    format!(
        "R:   {} ohm\nC:   {:e} F\nVin: {} V\nfc:  {:.2} Hz\nSweep: {} points, 1 Hz - 100 kHz",
        RC_CIRCUIT.resistance_ohms,
        RC_CIRCUIT.capacitance_farads,
        RC_CIRCUIT.input_voltage,
        cutoff_frequency(),
        SWEEP_POINTS
    )
}
