/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used in the spectral line calculations
//!
//! Masses are in kilograms, the Rydberg constant in inverse meters.

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.10938356e-31;

/// Rydberg constant for an infinitely heavy nucleus (m^-1)
pub const RYDBERG_CONSTANT: f64 = 10973731.568508;

/// Proton rest mass, the hydrogen nucleus (kg)
pub const PROTON_MASS: f64 = 1.6726219e-27;

/// Deuteron mass (kg), taken as two proton masses
pub const DEUTERON_MASS: f64 = 2.0 * PROTON_MASS;
