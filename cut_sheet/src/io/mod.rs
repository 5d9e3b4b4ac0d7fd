//! File input and output helpers for cut sheet data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::profile::{Profile, ProfileInput};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}

/// Writes the profile table as CSV with a `Station,Elevation (ft)` header.
///
/// One row per station in profile order, formatted station label first.
pub fn write_profile_csv(path: &str, profile: &Profile) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Station,Elevation (ft)")?;
    for point in &profile.points {
        writeln!(file, "{},{}", point.label, point.elevation)?;
    }
    Ok(())
}

/// Reads profile parameters from a JSON file.
pub fn read_profile_input_json(path: &str) -> io::Result<ProfileInput> {
    let contents = read_to_string(path)?;
    let input: ProfileInput = serde_json::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(input)
}

/// Writes a computed profile to a JSON file.
pub fn write_profile_json(path: &str, profile: &Profile) -> io::Result<()> {
    let json = serde_json::to_string_pretty(profile).map_err(io::Error::other)?;
    write_string(path, &json)
}
