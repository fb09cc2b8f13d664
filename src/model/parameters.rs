//! Defines the `HotelParameters` struct, which represents the contents of `hotel.toml`.
use crate::guest::{HOURS_PER_DAY, MAX_ADVANCE_BOOKING_DAY, MAX_STAY_DAYS, RoomCategory};
use crate::input::{input_err_msg, read_toml};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::Path;
use strum::IntoEnumIterator;

const HOTEL_PARAMETERS_FILE_NAME: &str = "hotel.toml";

/// The longest run that can be simulated, in days
pub const MAX_MODELING_DAYS: u32 = 3650;

/// The longest tick or gap between arrivals, in hours
pub const MAX_HOURS: u32 = MAX_MODELING_DAYS * HOURS_PER_DAY;

/// The most rooms a single category can have
pub const MAX_ROOMS_PER_CATEGORY: u32 = 10_000;

/// The number of rooms in a category and what they cost.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PoolParameters {
    /// Number of rooms (may be zero)
    pub count: u32,
    /// Price of a stay
    pub price: u32,
}

/// Room pools for every category.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoomPools {
    /// Single rooms
    pub single: PoolParameters,
    /// Double rooms
    pub double: PoolParameters,
    /// Junior suites
    pub junior_suite: PoolParameters,
    /// Luxury rooms
    pub luxury: PoolParameters,
}

impl RoomPools {
    /// The pool for `category`
    pub fn get(&self, category: RoomCategory) -> &PoolParameters {
        match category {
            RoomCategory::Single => &self.single,
            RoomCategory::Double => &self.double,
            RoomCategory::JuniorSuite => &self.junior_suite,
            RoomCategory::Luxury => &self.luxury,
        }
    }

    /// Total number of rooms in the hotel
    pub fn total_rooms(&self) -> u32 {
        [&self.single, &self.double, &self.junior_suite, &self.luxury]
            .iter()
            .map(|pool| pool.count)
            .sum()
    }
}

/// Inclusive bounds on the number of hours between two arrivals.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ArrivalGap {
    /// Shortest gap, in hours
    pub min: u32,
    /// Longest gap, in hours
    pub max: u32,
}

impl ArrivalGap {
    /// The gap as a range of hours
    pub fn hours(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Represents the contents of the entire hotel file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HotelParameters {
    /// Length of the simulated period, in days
    pub modeling_days: u32,
    /// Simulated hours per tick
    pub tick_hours: u32,
    /// Discount, in percent, for guests moved up to a better category
    pub discount_percent: u32,
    /// Range of hours between arrivals
    pub arrival_gap_hours: ArrivalGap,
    /// Seed for the random number generator.
    ///
    /// A random seed is chosen if this is not given.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Room counts and prices
    pub rooms: RoomPools,
}

/// Check that the `modeling_days` parameter is valid
fn check_modeling_days(value: u32) -> Result<()> {
    ensure!(value > 0, "modeling_days cannot be zero");
    ensure!(
        value <= MAX_MODELING_DAYS,
        "modeling_days cannot be greater than {MAX_MODELING_DAYS}"
    );

    Ok(())
}

/// Check that the `tick_hours` parameter is valid
fn check_tick_hours(value: u32) -> Result<()> {
    ensure!(value > 0, "tick_hours cannot be zero");
    ensure!(value <= MAX_HOURS, "tick_hours cannot be greater than {MAX_HOURS}");

    Ok(())
}

/// Check that the `discount_percent` parameter is valid
fn check_discount_percent(value: u32) -> Result<()> {
    ensure!(value <= 100, "discount_percent must be between 0 and 100");

    Ok(())
}

/// Check that the `arrival_gap_hours` parameter is valid
fn check_arrival_gap(gap: &ArrivalGap) -> Result<()> {
    ensure!(gap.min > 0, "arrival_gap_hours.min cannot be zero");
    ensure!(
        gap.min <= gap.max,
        "arrival_gap_hours.min cannot be greater than arrival_gap_hours.max"
    );
    ensure!(
        gap.max <= MAX_HOURS,
        "arrival_gap_hours.max cannot be greater than {MAX_HOURS}"
    );

    Ok(())
}

/// Check that the `rooms` parameter is valid
fn check_rooms(rooms: &RoomPools) -> Result<()> {
    for category in RoomCategory::iter() {
        let pool = rooms.get(category);
        ensure!(
            pool.count <= MAX_ROOMS_PER_CATEGORY,
            "There cannot be more than {MAX_ROOMS_PER_CATEGORY} {category} rooms"
        );
        ensure!(pool.price > 0, "Price of {category} rooms must be greater than zero");
    }
    ensure!(rooms.total_rooms() > 0, "The hotel must have at least one room");

    Ok(())
}

impl HotelParameters {
    /// Read a hotel file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    ///
    /// # Returns
    ///
    /// The file contents as a [`HotelParameters`] struct or an error if the file is invalid
    pub fn from_path<P: AsRef<Path>>(model_dir: P) -> Result<HotelParameters> {
        let file_path = model_dir.as_ref().join(HOTEL_PARAMETERS_FILE_NAME);
        let parameters: HotelParameters = read_toml(&file_path)?;

        parameters
            .validate()
            .with_context(|| input_err_msg(file_path))?;

        Ok(parameters)
    }

    /// Validate parameters after reading in file
    pub fn validate(&self) -> Result<()> {
        check_modeling_days(self.modeling_days)?;
        check_tick_hours(self.tick_hours)?;
        check_discount_percent(self.discount_percent)?;
        check_arrival_gap(&self.arrival_gap_hours)?;
        check_rooms(&self.rooms)?;

        Ok(())
    }

    /// The number of ticks needed to cover every simulated day
    pub fn total_ticks(&self) -> u32 {
        (self.modeling_days * HOURS_PER_DAY).div_ceil(self.tick_hours)
    }

    /// The number of days each room's calendar has to cover.
    ///
    /// This is one more than the latest day a run can touch: the last day of the longest stay
    /// starting on the last simulated day or in the advance booking window, or the day the clock
    /// reaches after the final tick.
    pub fn calendar_days(&self) -> u32 {
        let last_walk_in_departure = self.modeling_days.saturating_sub(1) + MAX_STAY_DAYS;
        let last_advance_departure = MAX_ADVANCE_BOOKING_DAY + MAX_STAY_DAYS;
        let final_day = self.total_ticks() * self.tick_hours / HOURS_PER_DAY;

        last_walk_in_departure
            .max(last_advance_departure)
            .max(final_day)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, parameters};
    use rstest::rstest;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const HOTEL_TOML: &str = r#"
modeling_days = 30
tick_hours = 6
discount_percent = 20
arrival_gap_hours = { min = 1, max = 5 }

[rooms.single]
count = 4
price = 100

[rooms.double]
count = 3
price = 150

[rooms.junior_suite]
count = 2
price = 250

[rooms.luxury]
count = 0
price = 400
"#;

    #[test]
    fn test_hotel_parameters_from_path() {
        let dir = tempdir().unwrap();
        {
            let mut file = File::create(dir.path().join(HOTEL_PARAMETERS_FILE_NAME)).unwrap();
            write!(file, "{HOTEL_TOML}").unwrap();
        }

        let parameters = HotelParameters::from_path(dir.path()).unwrap();
        assert_eq!(parameters.modeling_days, 30);
        assert_eq!(parameters.arrival_gap_hours.hours(), 1..=5);
        assert_eq!(parameters.seed, None);
        assert_eq!(
            *parameters.rooms.get(RoomCategory::JuniorSuite),
            PoolParameters {
                count: 2,
                price: 250
            }
        );
        assert_eq!(parameters.rooms.total_rooms(), 9);
    }

    #[test]
    fn test_hotel_parameters_from_path_invalid() {
        let dir = tempdir().unwrap();
        {
            let mut file = File::create(dir.path().join(HOTEL_PARAMETERS_FILE_NAME)).unwrap();
            write!(file, "{}", HOTEL_TOML.replace("tick_hours = 6", "tick_hours = 0")).unwrap();
        }

        let err = HotelParameters::from_path(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Error reading"));
        assert_eq!(err.root_cause().to_string(), "tick_hours cannot be zero");
    }

    #[test]
    fn test_hotel_parameters_from_path_missing_file() {
        let dir = tempdir().unwrap();
        assert!(HotelParameters::from_path(dir.path()).is_err());
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 6, true)]
    #[case(3, 3, true)]
    #[case(0, 6, false)]
    #[case(4, 2, false)]
    #[case(1, MAX_HOURS, true)]
    #[case(1, u32::MAX, false)]
    fn test_check_arrival_gap(#[case] min: u32, #[case] max: u32, #[case] expected_valid: bool) {
        assert_eq!(
            check_arrival_gap(&ArrivalGap { min, max }).is_ok(),
            expected_valid
        );
    }

    #[rstest]
    #[case(0, true)]
    #[case(20, true)]
    #[case(100, true)]
    #[case(101, false)]
    fn test_check_discount_percent(#[case] value: u32, #[case] expected_valid: bool) {
        assert_eq!(check_discount_percent(value).is_ok(), expected_valid);
    }

    #[rstest]
    #[case(1, true)]
    #[case(MAX_MODELING_DAYS, true)]
    #[case(0, false)]
    #[case(MAX_MODELING_DAYS + 1, false)]
    #[case(200_000_000, false)]
    fn test_check_modeling_days(#[case] value: u32, #[case] expected_valid: bool) {
        assert_eq!(check_modeling_days(value).is_ok(), expected_valid);
    }

    #[rstest]
    #[case(1, true)]
    #[case(MAX_HOURS, true)]
    #[case(0, false)]
    #[case(u32::MAX, false)]
    fn test_check_tick_hours(#[case] value: u32, #[case] expected_valid: bool) {
        assert_eq!(check_tick_hours(value).is_ok(), expected_valid);
    }

    #[rstest]
    fn test_validate_rejects_overflowing_horizon(mut parameters: HotelParameters) {
        parameters.modeling_days = 200_000_000;
        assert_error!(parameters.validate(), "modeling_days cannot be greater than 3650");
    }

    #[rstest]
    fn test_largest_valid_horizon(mut parameters: HotelParameters) {
        parameters.modeling_days = MAX_MODELING_DAYS;
        parameters.tick_hours = MAX_HOURS;
        parameters.validate().unwrap();
        assert_eq!(parameters.total_ticks(), 1);
        assert_eq!(parameters.calendar_days(), MAX_MODELING_DAYS + MAX_STAY_DAYS);
    }

    #[rstest]
    fn test_check_rooms(mut parameters: HotelParameters) {
        assert!(check_rooms(&parameters.rooms).is_ok());

        parameters.rooms.double.price = 0;
        assert_error!(
            check_rooms(&parameters.rooms),
            "Price of double rooms must be greater than zero"
        );

        parameters.rooms.double.price = 150;
        parameters.rooms.luxury.count = u32::MAX;
        assert_error!(
            check_rooms(&parameters.rooms),
            "There cannot be more than 10000 luxury rooms"
        );

        parameters.rooms.single.count = 0;
        parameters.rooms.double.count = 0;
        parameters.rooms.junior_suite.count = 0;
        parameters.rooms.luxury.count = 0;
        assert_error!(
            check_rooms(&parameters.rooms),
            "The hotel must have at least one room"
        );
    }

    #[rstest]
    #[case(30, 6, 120)]
    #[case(30, 24, 30)]
    #[case(1, 5, 5)] // last tick overshoots the horizon
    #[case(2, 48, 1)]
    fn test_total_ticks(
        mut parameters: HotelParameters,
        #[case] modeling_days: u32,
        #[case] tick_hours: u32,
        #[case] expected: u32,
    ) {
        parameters.modeling_days = modeling_days;
        parameters.tick_hours = tick_hours;
        assert_eq!(parameters.total_ticks(), expected);
    }

    #[rstest]
    #[case(30, 6, 37)] // longest stay from the last day
    #[case(38, 24, 45)]
    #[case(2, 24, 14)] // advance bookings dominate
    #[case(1, 24 * 20, 21)] // a single huge tick
    fn test_calendar_days(
        mut parameters: HotelParameters,
        #[case] modeling_days: u32,
        #[case] tick_hours: u32,
        #[case] expected: u32,
    ) {
        parameters.modeling_days = modeling_days;
        parameters.tick_hours = tick_hours;
        assert_eq!(parameters.calendar_days(), expected);
    }
}
