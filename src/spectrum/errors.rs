/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the spectrum module

use thiserror::Error;

/// Errors reported by the checked spectral line functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// The principal quantum number was zero, so 1/n² is undefined
    #[error("Principal quantum number must be non-zero")]
    ZeroLevel,

    /// The upper level coincides with the lower level of the series
    #[error("Level n = {0} coincides with the lower level of the series; the transition has no wavelength")]
    DegenerateLevel(f64),

    /// The principal quantum number was NaN or infinite
    #[error("Principal quantum number must be finite, got {0}")]
    NonFiniteLevel(f64),

    /// A nuclear mass was zero, negative or not finite
    #[error("Nuclear mass must be positive and finite, got {0} kg")]
    InvalidMass(f64),
}

/// A specialized Result type for spectrum operations
pub type Result<T> = std::result::Result<T, SpectrumError>;
