/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Console report of the hydrogen/deuterium isotope shift
//!
//! A [`Report`] holds every printed quantity and renders them in a fixed
//! line format:
//!
//! ```text
//! <R_H>
//! <ratio(H, D)>
//! R_h for hydrogen:  <R_H>
//! <shift(n)>  nm        (one line per level)
//! ```
//!
//! Floats use the shortest representation that round-trips.

use std::fmt;
use std::io::{self, Write};

use log::{debug, info};

use crate::spectrum::{isotope_line_shift, isotope_shift_ratio, Isotope};
use crate::utils::{meters_to_nanometers, meters_to_output_units};

/// Label preceding the hydrogen Rydberg constant
pub const RYDBERG_LABEL: &str = "R_h for hydrogen: ";

/// Unit suffix printed after each isotope shift
pub const SHIFT_UNIT: &str = " nm";

/// Upper levels of the Balmer lines whose isotope shift is reported
const REPORTED_LEVELS: [f64; 4] = [3.0, 4.0, 5.0, 6.0];

/// Isotope shift of a single line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShift {
    /// Upper level of the transition
    pub level: f64,
    /// Hydrogen minus deuterium wavelength in meters
    pub shift: f64,
}

impl LineShift {
    /// Evaluate the isotope shift of the line from `level` down to n = 2
    pub fn new(level: f64) -> Self {
        let shift = isotope_line_shift(level);
        debug!(
            "n = {}: lambda({}) = {} nm, shift = {} m",
            level,
            Isotope::Hydrogen.symbol(),
            meters_to_nanometers(Isotope::Hydrogen.line_wavelength(level)),
            shift
        );
        Self { level, shift }
    }

    /// The shift scaled to the report's output units
    pub fn output_value(&self) -> f64 {
        meters_to_output_units(self.shift)
    }
}

/// All quantities printed by the calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Rydberg constant for hydrogen (m^-1)
    pub hydrogen_rydberg: f64,
    /// Correction ratio of hydrogen relative to deuterium
    pub hydrogen_deuterium_ratio: f64,
    /// Isotope shifts of the n = 3..6 lines, lowest level first
    pub line_shifts: Vec<LineShift>,
}

impl Report {
    /// Evaluate every reported quantity
    pub fn compute() -> Self {
        info!(
            "Computing H/D isotope shifts for {} levels",
            REPORTED_LEVELS.len()
        );

        let hydrogen_rydberg = Isotope::Hydrogen.reduced_rydberg();
        let hydrogen_deuterium_ratio = isotope_shift_ratio(
            Isotope::Hydrogen.nuclear_mass(),
            Isotope::Deuterium.nuclear_mass(),
        );
        debug!(
            "R_{} = {} m^-1",
            Isotope::Hydrogen.symbol(),
            hydrogen_rydberg
        );
        debug!(
            "ratio({}, {}) = {}",
            Isotope::Hydrogen.symbol(),
            Isotope::Deuterium.symbol(),
            hydrogen_deuterium_ratio
        );

        let line_shifts = REPORTED_LEVELS.iter().map(|&level| LineShift::new(level)).collect();

        Self {
            hydrogen_rydberg,
            hydrogen_deuterium_ratio,
            line_shifts,
        }
    }

    /// Write the report lines
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

/// Labels and values are separated by a single space, so the label's
/// trailing space and the unit's leading space each show up doubled.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.hydrogen_rydberg)?;
        writeln!(f, "{}", self.hydrogen_deuterium_ratio)?;
        writeln!(f, "{} {}", RYDBERG_LABEL, self.hydrogen_rydberg)?;
        for line in &self.line_shifts {
            writeln!(f, "{} {}", line.output_value(), SHIFT_UNIT)?;
        }
        Ok(())
    }
}
