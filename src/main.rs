/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for rydberg-rs

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let calculation = rydberg_rs::Calculation::new();
    calculation.run()?;

    Ok(())
}
