/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Validating variants of the spectral line functions
//!
//! These reject the inputs for which the plain functions in
//! [`super::rydberg`] would silently produce infinities or NaN. For valid
//! inputs they return exactly the same values.

use super::errors::{Result, SpectrumError};
use super::rydberg::{
    isotope_line_shift, isotope_shift_ratio, line_wavelength, reduced_rydberg, BALMER_LOWER_TERM,
};

fn validate_mass(mass: f64) -> Result<f64> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(SpectrumError::InvalidMass(mass))
    }
}

fn validate_level(n: f64) -> Result<f64> {
    if !n.is_finite() {
        return Err(SpectrumError::NonFiniteLevel(n));
    }
    if n == 0.0 {
        return Err(SpectrumError::ZeroLevel);
    }
    // n = ±2 cancels the lower-level term exactly
    if BALMER_LOWER_TERM - 1.0 / n.powi(2) == 0.0 {
        return Err(SpectrumError::DegenerateLevel(n));
    }
    Ok(n)
}

/// [`reduced_rydberg`] rejecting non-positive or non-finite masses
pub fn checked_reduced_rydberg(nuclear_mass: f64) -> Result<f64> {
    Ok(reduced_rydberg(validate_mass(nuclear_mass)?))
}

/// [`line_wavelength`] rejecting `n = 0`, `n = ±2` and invalid masses
///
/// Levels below 2 are still accepted and give negative wavelengths, as the
/// plain function does.
pub fn checked_line_wavelength(n: f64, nuclear_mass: f64) -> Result<f64> {
    let n = validate_level(n)?;
    let nuclear_mass = validate_mass(nuclear_mass)?;
    Ok(line_wavelength(n, nuclear_mass))
}

/// [`isotope_shift_ratio`] rejecting invalid masses
pub fn checked_isotope_shift_ratio(mass_1: f64, mass_2: f64) -> Result<f64> {
    Ok(isotope_shift_ratio(
        validate_mass(mass_1)?,
        validate_mass(mass_2)?,
    ))
}

/// [`isotope_line_shift`] rejecting degenerate levels
pub fn checked_isotope_line_shift(n: f64) -> Result<f64> {
    Ok(isotope_line_shift(validate_level(n)?))
}
