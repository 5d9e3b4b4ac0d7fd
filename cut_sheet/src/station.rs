//! Station notation formatting and parsing.

use crate::error::{Error, Result};

/// Half of the smallest step representable at the millifoot precision used
/// for station values throughout the crate.
const REMAINDER_EPS: f64 = 5e-4;

/// Formats a station value using engineering station notation, e.g. `125.0`
/// becomes `"1+25"`.
///
/// The remainder past the hundreds digit is zero-padded to two digits.
/// Stations are expected to be non-negative; negative values are rendered as
/// the absolute value with a leading minus sign. A remainder that is not a
/// whole foot keeps three decimals (`"0+12.500"`).
pub fn format_station(station: f64) -> String {
    if station < 0.0 {
        return format!("-{}", format_station(-station));
    }
    let hundreds = (station / 100.0).floor() as i64;
    let remainder = station - hundreds as f64 * 100.0;
    let frac = remainder - remainder.floor();
    if frac < REMAINDER_EPS || frac > 1.0 - REMAINDER_EPS {
        let whole = remainder.round() as i64;
        if whole >= 100 {
            format!("{}+00", hundreds + 1)
        } else {
            format!("{}+{:02}", hundreds, whole)
        }
    } else {
        format!("{}+{:06.3}", hundreds, remainder)
    }
}

/// Parses a comma-separated list of station values.
///
/// Tokens are trimmed and blank tokens are skipped, so trailing commas and an
/// empty field are accepted. The first token that does not parse as a finite
/// number fails the whole field with [`Error::Parse`] naming that token.
pub fn parse_stations(text: &str) -> Result<Vec<f64>> {
    let mut stations = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| Error::Parse {
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(Error::Parse {
                token: token.to_string(),
            });
        }
        stations.push(value);
    }
    Ok(stations)
}
