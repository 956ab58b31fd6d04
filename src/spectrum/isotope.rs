/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hydrogen isotopes considered by the calculation

use std::fmt;

use super::rydberg::{line_wavelength, reduced_rydberg};
use crate::utils::constants::{DEUTERON_MASS, PROTON_MASS};

/// A hydrogen isotope, identified by its nucleus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isotope {
    /// Protium, a single proton
    Hydrogen,
    /// Deuterium, nucleus of two nucleon masses
    Deuterium,
}

impl Isotope {
    /// Nuclear mass in kg
    pub fn nuclear_mass(self) -> f64 {
        match self {
            Isotope::Hydrogen => PROTON_MASS,
            Isotope::Deuterium => DEUTERON_MASS,
        }
    }

    /// Chemical symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Isotope::Hydrogen => "H",
            Isotope::Deuterium => "D",
        }
    }

    /// Rydberg constant corrected for this isotope's nucleus (m^-1)
    pub fn reduced_rydberg(self) -> f64 {
        reduced_rydberg(self.nuclear_mass())
    }

    /// Wavelength of the line from level `n` down to n = 2, in meters
    pub fn line_wavelength(self, n: f64) -> f64 {
        line_wavelength(n, self.nuclear_mass())
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Isotope::Hydrogen => "hydrogen",
            Isotope::Deuterium => "deuterium",
        };
        write!(f, "{}", name)
    }
}
