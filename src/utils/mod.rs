/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility items shared by the spectrum calculations
//!
//! Physical constants and the unit conversions applied to computed wavelengths.

pub mod constants;
pub mod conversions;

pub use conversions::{meters_to_nanometers, meters_to_output_units};
