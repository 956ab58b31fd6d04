/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reduced-mass corrected Rydberg formula
//!
//! All wavelengths are in meters, masses in kilograms and wavenumbers in
//! inverse meters. The arithmetic grouping in each function is kept stable so
//! that results are reproducible to the last bit.

use crate::utils::constants::{DEUTERON_MASS, ELECTRON_MASS, PROTON_MASS, RYDBERG_CONSTANT};

/// The 1/n² term of the series lower level (n = 2)
pub const BALMER_LOWER_TERM: f64 = 0.25;

/// Calculate the Rydberg constant for a nucleus of finite mass
///
/// # Arguments
///
/// * `nuclear_mass` - Mass of the nucleus in kg
///
/// # Returns
///
/// The corrected Rydberg constant R∞·M/(mₑ + M) in m⁻¹
pub fn reduced_rydberg(nuclear_mass: f64) -> f64 {
    RYDBERG_CONSTANT * (nuclear_mass / (ELECTRON_MASS + nuclear_mass))
}

/// Calculate the wavelength of the transition from level `n` down to n = 2
///
/// # Arguments
///
/// * `n` - Principal quantum number of the upper level
/// * `nuclear_mass` - Mass of the nucleus in kg
///
/// # Returns
///
/// Wavelength in meters. `n = 2` gives infinity and `n = 0` gives (negative)
/// zero; see [`crate::spectrum::checked_line_wavelength`] for a validating variant.
pub fn line_wavelength(n: f64, nuclear_mass: f64) -> f64 {
    1.0 / (reduced_rydberg(nuclear_mass) * (BALMER_LOWER_TERM - 1.0 / n.powi(2)))
}

/// Short-wavelength limit of the series (n → ∞) in meters
pub fn series_limit(nuclear_mass: f64) -> f64 {
    1.0 / (reduced_rydberg(nuclear_mass) * BALMER_LOWER_TERM)
}

/// Calculate the ratio of reduced-mass correction factors of two nuclei
///
/// The result is (1 + mₑ/m₁) / (1 + mₑ/m₂). It is below one when `mass_1`
/// is the heavier nucleus.
pub fn isotope_shift_ratio(mass_1: f64, mass_2: f64) -> f64 {
    (1.0 + ELECTRON_MASS / mass_1) / (1.0 + ELECTRON_MASS / mass_2)
}

/// Wavelength difference between the hydrogen and deuterium lines from level `n`
///
/// # Returns
///
/// The isotope shift in meters
pub fn isotope_line_shift(n: f64) -> f64 {
    line_wavelength(n, PROTON_MASS) * (1.0 - isotope_shift_ratio(DEUTERON_MASS, PROTON_MASS))
}
