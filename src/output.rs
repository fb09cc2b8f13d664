//! The module responsible for writing output data to disk.
use crate::guest::RoomCategory;
use crate::hotel::RoomScope;
use crate::model::HotelModel;
use crate::units::Money;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// The root folder in which model-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "hotelsim_results";

/// The output file name for per-tick hotel statistics
const HOTEL_STATS_FILE_NAME: &str = "hotel_stats.csv";

/// The output file name for per-room occupancy
const ROOM_OCCUPANCY_FILE_NAME: &str = "room_occupancy.csv";

/// The output file name for the end-of-run summary
const SUMMARY_FILE_NAME: &str = "summary.toml";

/// Get the default output directory for the model in `model_dir`
pub fn get_output_dir(model_dir: &Path) -> Result<PathBuf> {
    let model_dir = model_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to model")?;

    let model_name = model_dir
        .file_name()
        .context("Model cannot be in root folder")?
        .to_str()
        .context("Invalid chars in model dir name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, model_name].iter().collect())
}

/// Create a new output directory at `output_dir`.
///
/// An existing empty directory is reused. A directory with contents is only replaced if
/// `allow_overwrite` is set.
///
/// # Returns
///
/// Whether an existing directory with contents was overwritten.
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    if output_dir.is_dir() {
        if fs::read_dir(output_dir)?.next().is_none() {
            // already exists and is empty
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. \
            Please delete the folder or pass the --overwrite command-line option."
        );

        fs::remove_dir_all(output_dir)?;
        fs::create_dir_all(output_dir)?;
        return Ok(true);
    }

    // Try to create the directory, with parents
    fs::create_dir_all(output_dir)?;

    Ok(false)
}

/// Represents a row in the hotel statistics CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct HotelStatsRow {
    tick: u32,
    day: u32,
    scope: String,
    weekly_occupancy_percent: u32,
    earnings: Money,
    served_guests: u32,
}

/// Represents a row in the room occupancy CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct RoomOccupancyRow {
    tick: u32,
    day: u32,
    category: RoomCategory,
    room: usize,
    occupied_today: bool,
    /// Occupied days in the coming week, e.g. `3-5, 7`
    upcoming_week: String,
}

/// An object for writing the state of a model to file after each tick
pub struct DataWriter {
    stats_writer: csv::Writer<File>,
    room_writer: Option<csv::Writer<File>>,
}

impl DataWriter {
    /// Open CSV files to write output data to
    ///
    /// # Arguments
    ///
    /// * `output_path` - Folder where files will be saved
    /// * `save_room_details` - Whether to include a CSV file with the occupancy of every room
    pub fn create(output_path: &Path, save_room_details: bool) -> Result<Self> {
        let new_writer = |file_name| {
            let file_path = output_path.join(file_name);
            csv::Writer::from_path(file_path)
        };

        let room_writer = if save_room_details {
            Some(new_writer(ROOM_OCCUPANCY_FILE_NAME)?)
        } else {
            None
        };

        Ok(Self {
            stats_writer: new_writer(HOTEL_STATS_FILE_NAME)?,
            room_writer,
        })
    }

    /// Write the statistics for every scope at the model's current tick
    pub fn write_hotel_stats(&mut self, model: &HotelModel) -> Result<()> {
        for scope in RoomScope::iter() {
            let row = HotelStatsRow {
                tick: model.current_tick(),
                day: model.current_day(),
                scope: scope.to_string(),
                weekly_occupancy_percent: model.weekly_occupancy_percent(scope),
                earnings: model.total_earnings(scope),
                served_guests: model.served_guests(scope),
            };
            self.stats_writer.serialize(row)?;
        }

        Ok(())
    }

    /// Write the occupancy of every room at the model's current tick, if enabled
    pub fn write_room_occupancy(&mut self, model: &HotelModel) -> Result<()> {
        let Some(wtr) = &mut self.room_writer else {
            return Ok(());
        };

        for category in RoomCategory::iter() {
            let scope = RoomScope::Category(category);
            let today = model.occupied_today(scope)?;
            let upcoming = model.occupancy_strings(scope);
            for (room, (occupied_today, upcoming_week)) in today.into_iter().zip(upcoming).enumerate()
            {
                wtr.serialize(RoomOccupancyRow {
                    tick: model.current_tick(),
                    day: model.current_day(),
                    category,
                    room,
                    occupied_today,
                    upcoming_week,
                })?;
            }
        }

        Ok(())
    }

    /// Flush the underlying streams
    pub fn flush(&mut self) -> Result<()> {
        self.stats_writer.flush()?;
        if let Some(wtr) = &mut self.room_writer {
            wtr.flush()?;
        }

        Ok(())
    }
}

/// End-of-run statistics for one scope
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ScopeSummary {
    /// Days booked over the whole simulated period, in percent of a week
    pub lifetime_occupancy_percent: u32,
    /// Money earned
    pub earnings: Money,
    /// Guests whose stay has ended
    pub served_guests: u32,
}

/// End-of-run statistics for a model
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Summary {
    /// The seed used to generate arrivals
    pub seed: u64,
    /// Number of ticks run
    pub total_ticks: u32,
    /// The day the hotel clock ended on
    pub final_day: u32,
    /// Guests the hotel could not accommodate
    pub total_lost_clients: u32,
    /// Share of finished requests that ended in a completed stay, in percent
    pub percent_of_served_clients: u32,
    /// Statistics for each category and for the whole hotel, keyed by scope name
    pub scopes: BTreeMap<String, ScopeSummary>,
}

impl Summary {
    /// Collect the summary for `model` in its current state
    pub fn from_model(model: &HotelModel, seed: u64) -> Self {
        let scopes = RoomScope::iter()
            .map(|scope| {
                let summary = ScopeSummary {
                    lifetime_occupancy_percent: model.lifetime_occupancy_percent(scope),
                    earnings: model.total_earnings(scope),
                    served_guests: model.served_guests(scope),
                };
                (scope.to_string(), summary)
            })
            .collect();

        Self {
            seed,
            total_ticks: model.current_tick(),
            final_day: model.current_day(),
            total_lost_clients: model.total_lost_clients(),
            percent_of_served_clients: model.percent_of_served_clients(),
            scopes,
        }
    }
}

/// Write the end-of-run summary to the specified output path in TOML format
pub fn write_summary(output_path: &Path, summary: &Summary) -> Result<()> {
    let file_path = output_path.join(SUMMARY_FILE_NAME);
    let contents = toml::to_string(summary).context("Could not convert summary to TOML")?;
    fs::write(&file_path, contents)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(())
}
