//! Core library for the slope cut sheet generator.
//!
//! Computes elevations along a linear grade between two survey stations, at
//! regular station increments plus any extra stations the user asks for, and
//! formats the result as an ordered station/elevation table.

pub mod error;
pub mod io;
pub mod profile;
pub mod station;
