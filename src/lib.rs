//! Common functionality for hotelsim, a discrete-time simulation of hotel bookings.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod arrivals;
pub mod cli;
pub mod diagnostics;
pub mod guest;
pub mod hotel;
pub mod input;
pub mod log;
pub mod model;
pub mod occupancy;
pub mod output;
pub mod room;
pub mod settings;
pub mod simulation;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the directory in which program configuration files are stored
pub fn get_hotelsim_config_dir() -> PathBuf {
    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("hotelsim");

    dir
}
