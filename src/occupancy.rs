//! Day-by-day occupancy records for rooms.
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Occupancy for a run of days, keyed by day index
pub type OccupancyWindow = BTreeMap<u32, bool>;

/// A fixed-length, day-indexed record of whether a room is booked.
///
/// All days start out free. The length is fixed when the calendar is created and any access to a
/// day past the end is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    days: Box<[bool]>,
}

impl Calendar {
    /// Create a calendar covering days `0..len`, with every day free.
    pub fn new(len: u32) -> Self {
        Self {
            days: vec![false; len as usize].into_boxed_slice(),
        }
    }

    /// The number of days covered by the calendar
    pub fn len(&self) -> u32 {
        self.days.len() as u32
    }

    /// Whether the calendar covers no days at all
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Check that `day` is covered by the calendar
    fn check_day(&self, day: u32) -> Result<()> {
        ensure!(
            day < self.len(),
            "Day {day} is outside the booking calendar (0..{})",
            self.len()
        );

        Ok(())
    }

    /// Whether the room is booked on `day`
    pub fn is_occupied(&self, day: u32) -> Result<bool> {
        self.check_day(day)?;
        Ok(self.days[day as usize])
    }

    /// Whether every day in `days` is free.
    ///
    /// Fails if any day in the range is outside the calendar.
    pub fn is_free(&self, mut days: RangeInclusive<u32>) -> Result<bool> {
        self.check_day(*days.end())?;
        Ok(days.all(|day| !self.days[day as usize]))
    }

    /// Mark every day in `days` as occupied.
    ///
    /// The caller is responsible for checking that the days were free.
    pub fn book(&mut self, days: RangeInclusive<u32>) -> Result<()> {
        self.check_day(*days.end())?;
        for day in days {
            self.days[day as usize] = true;
        }

        Ok(())
    }

    /// The occupancy of the days in `days` which the calendar covers.
    ///
    /// Days past the end of the calendar are left out rather than reported as an error.
    pub fn window(&self, days: RangeInclusive<u32>) -> OccupancyWindow {
        days.take_while(|&day| day < self.len())
            .map(|day| (day, self.days[day as usize]))
            .collect()
    }
}

/// Render the occupied days of `occupation` as a compact list of ranges.
///
/// Runs of consecutive occupied days become `start-end`, isolated days are written on their own
/// and ranges are separated by `", "`. For example, days 3, 4, 5 and 7 give `"3-5, 7"`.
pub fn occupation_str(occupation: &OccupancyWindow) -> String {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    for (&day, _) in occupation.iter().filter(|(_, occupied)| **occupied) {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == day => *end = day,
            _ => ranges.push((day, day)),
        }
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .join(", ")
}
