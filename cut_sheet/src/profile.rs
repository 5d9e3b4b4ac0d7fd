//! Slope profile generation between two survey stations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::station::format_station;

/// Parameters for a single cut sheet computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub begin_station: f64,
    pub end_station: f64,
    pub begin_elevation: f64,
    pub end_elevation: f64,
    pub increment: f64,
    /// Extra stations sampled in addition to the increment grid.
    #[serde(default)]
    pub extra_stations: Vec<f64>,
}

/// One row of the cut sheet table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationPoint {
    pub station: f64,
    pub label: String,
    pub elevation: f64,
}

/// Computed slope profile: overall grade plus the ordered station table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub slope: f64,
    pub slope_percent: f64,
    pub points: Vec<StationPoint>,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Grade between two station/elevation pairs, as rise over run.
pub fn grade(
    begin_station: f64,
    end_station: f64,
    begin_elevation: f64,
    end_elevation: f64,
) -> Result<f64> {
    let run = end_station - begin_station;
    if run.abs() < f64::EPSILON {
        return Err(Error::DivisionByZero);
    }
    Ok((end_elevation - begin_elevation) / run)
}

/// Builds the cut sheet profile for the given input.
///
/// Stations are generated on the increment grid starting from the first
/// multiple of `increment` at or after `begin_station` and ending before
/// `end_station`, then unioned with both endpoints and any extra stations.
/// Station values are rounded to three decimals before deduplication, so an
/// extra station that lands on a generated one appears once. Elevations are
/// graded linearly between the endpoint elevations.
pub fn build_profile(input: &ProfileInput) -> Result<Profile> {
    if !(input.increment > 0.0) {
        return Err(Error::InvalidIncrement(input.increment));
    }
    let slope = grade(
        input.begin_station,
        input.end_station,
        input.begin_elevation,
        input.end_elevation,
    )?;

    let mut stations = vec![round3(input.begin_station), round3(input.end_station)];

    let rem = input.begin_station.rem_euclid(input.increment);
    let start = if rem.abs() < f64::EPSILON {
        input.begin_station
    } else {
        input.begin_station + (input.increment - rem)
    };
    let mut s = start;
    while s < input.end_station {
        stations.push(round3(s));
        s += input.increment;
    }

    stations.extend(input.extra_stations.iter().map(|v| round3(*v)));

    stations.sort_by(f64::total_cmp);
    stations.dedup();

    log::debug!(
        "graded {} stations from {} to {}",
        stations.len(),
        input.begin_station,
        input.end_station
    );

    let points = stations
        .into_iter()
        .map(|station| StationPoint {
            station,
            label: format_station(station),
            elevation: round3(input.begin_elevation + slope * (station - input.begin_station)),
        })
        .collect();

    Ok(Profile {
        slope,
        slope_percent: round2(slope * 100.0),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(begin: f64, end: f64, increment: f64) -> ProfileInput {
        ProfileInput {
            begin_station: begin,
            end_station: end,
            begin_elevation: 100.0,
            end_elevation: 110.0,
            increment,
            extra_stations: Vec::new(),
        }
    }

    #[test]
    fn grade_rejects_zero_run() {
        assert_eq!(grade(50.0, 50.0, 100.0, 110.0), Err(Error::DivisionByZero));
    }

    #[test]
    fn rejects_bad_increment() {
        assert_eq!(
            build_profile(&input(0.0, 100.0, 0.0)).unwrap_err(),
            Error::InvalidIncrement(0.0)
        );
        assert_eq!(
            build_profile(&input(0.0, 100.0, -5.0)).unwrap_err(),
            Error::InvalidIncrement(-5.0)
        );
        assert!(build_profile(&input(0.0, 100.0, f64::NAN)).is_err());
    }

    #[test]
    fn aligns_start_to_next_increment_multiple() {
        let profile = build_profile(&input(110.0, 200.0, 25.0)).unwrap();
        let stations: Vec<f64> = profile.points.iter().map(|p| p.station).collect();
        assert_eq!(stations, vec![110.0, 125.0, 150.0, 175.0, 200.0]);
    }

    #[test]
    fn aligns_grid_below_zero() {
        let profile = build_profile(&input(-10.0, 60.0, 25.0)).unwrap();
        let stations: Vec<f64> = profile.points.iter().map(|p| p.station).collect();
        assert_eq!(stations, vec![-10.0, 0.0, 25.0, 50.0, 60.0]);
    }

    #[test]
    fn descending_grade() {
        let profile = build_profile(&ProfileInput {
            begin_station: 0.0,
            end_station: 50.0,
            begin_elevation: 110.0,
            end_elevation: 100.0,
            increment: 25.0,
            extra_stations: Vec::new(),
        })
        .unwrap();
        assert!((profile.slope + 0.2).abs() < 1e-9);
        assert_eq!(profile.slope_percent, -20.0);
        assert_eq!(profile.points[1].elevation, 105.0);
    }

    #[test]
    fn slope_percent_rounds_to_two_decimals() {
        let profile = build_profile(&ProfileInput {
            begin_station: 0.0,
            end_station: 30.0,
            begin_elevation: 0.0,
            end_elevation: 10.0,
            increment: 10.0,
            extra_stations: Vec::new(),
        })
        .unwrap();
        assert_eq!(profile.slope_percent, 33.33);
    }
}
