/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # rydberg-rs
//!
//! Hydrogen and deuterium spectral lines from the Rydberg formula, corrected
//! for the finite mass of the nucleus.
//!
//! The calculation evaluates the reduced Rydberg constant of hydrogen, the
//! ratio of the hydrogen and deuterium reduced-mass corrections, and the
//! isotope shift of the first four Balmer lines.

pub mod report;
pub mod spectrum;
pub mod utils;

use std::io::{self, Write};

use log::info;

use report::Report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// The main entry point for the isotope shift calculation
#[derive(Debug, Default)]
pub struct Calculation;

impl Calculation {
    /// Create a new calculation
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all quantities
    pub fn report(&self) -> Report {
        Report::compute()
    }

    /// Run the calculation, writing the report to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        self.report().write_to(out)?;
        out.flush()?;
        Ok(())
    }

    /// Run the calculation, printing the report to standard output
    pub fn run(&self) -> anyhow::Result<()> {
        info!("rydberg-rs v{}", VERSION);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }
}
