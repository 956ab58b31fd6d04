/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Spectral line calculations for hydrogen-like atoms
//!
//! This module implements the Rydberg formula corrected for finite nuclear
//! mass, and the hydrogen/deuterium isotope shift derived from it.
//!
//! The functions in [`rydberg`] perform no validation: degenerate inputs such
//! as `n = 2` or a zero mass yield IEEE-754 infinities or NaN. The [`checked`]
//! module offers fail-fast variants returning [`SpectrumError`].

pub mod checked;
pub mod errors;
pub mod isotope;
pub mod rydberg;

pub use checked::{
    checked_isotope_line_shift, checked_isotope_shift_ratio, checked_line_wavelength,
    checked_reduced_rydberg,
};
pub use errors::{Result, SpectrumError};
pub use isotope::Isotope;
pub use rydberg::{
    isotope_line_shift, isotope_shift_ratio, line_wavelength, reduced_rydberg, series_limit,
    BALMER_LOWER_TERM,
};
