//! Aggregate statistics over the rooms of a hotel.
//!
//! Every statistic is a read-only reduction over the current state of the rooms it covers, and
//! can be asked for a single category or for the whole hotel.
use super::Hotel;
use crate::guest::RoomCategory;
use crate::occupancy::{OccupancyWindow, occupation_str};
use crate::room::Room;
use crate::units::Money;
use anyhow::Result;
use itertools::Either;
use std::fmt;
use strum::IntoEnumIterator;

/// Length of the window used for weekly occupancy (`day..=day + 7`)
const WEEK_WINDOW_DAYS: u32 = 8;

/// The rooms a statistic covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomScope {
    /// Rooms of a single category
    Category(RoomCategory),
    /// Every room in the hotel
    Hotel,
}

impl RoomScope {
    /// Every category followed by the whole hotel
    pub fn iter() -> impl Iterator<Item = RoomScope> {
        RoomCategory::iter()
            .map(RoomScope::Category)
            .chain(std::iter::once(RoomScope::Hotel))
    }
}

impl From<RoomCategory> for RoomScope {
    fn from(category: RoomCategory) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for RoomScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{category}"),
            Self::Hotel => write!(f, "hotel"),
        }
    }
}

/// Number of occupied days in `window`
fn occupied_days(window: &OccupancyWindow) -> u32 {
    window.values().filter(|&&occupied| occupied).count() as u32
}

/// Mean of `fraction` over `rooms` as a whole-number percentage, or 0 if there are no rooms
fn mean_percent<'a, I, F>(rooms: I, fraction: F) -> u32
where
    I: Iterator<Item = &'a Room>,
    F: Fn(&Room) -> f64,
{
    let (count, total) = rooms.fold((0u32, 0.0), |(count, total), room| {
        (count + 1, total + fraction(room))
    });
    if count == 0 {
        return 0;
    }

    (total / f64::from(count) * 100.0) as u32
}

impl Hotel {
    /// Iterate over the rooms in `scope`
    pub fn iter_rooms(&self, scope: RoomScope) -> impl Iterator<Item = &Room> {
        match scope {
            RoomScope::Category(category) => Either::Left(self.rooms(category).iter()),
            RoomScope::Hotel => Either::Right(self.pools.iter().flatten()),
        }
    }

    /// Average occupancy over the coming week (today plus the next seven days), in percent
    pub fn weekly_occupancy_percent(&self, scope: RoomScope) -> u32 {
        let day = self.current_day();
        mean_percent(self.iter_rooms(scope), |room| {
            f64::from(occupied_days(&room.current_occupation_in_week(day)))
                / f64::from(WEEK_WINDOW_DAYS)
        })
    }

    /// Occupied days from the start of the run up to and including `day`, in percent of a week.
    ///
    /// This is the weekly reduction applied to the days `0..=day`, so it exceeds 100 once rooms
    /// have been booked for more than a week on average.
    pub fn lifetime_occupancy_percent(&self, scope: RoomScope, day: u32) -> u32 {
        mean_percent(self.iter_rooms(scope), |room| {
            f64::from(occupied_days(&room.occupation_in_model(day))) / f64::from(WEEK_WINDOW_DAYS)
        })
    }

    /// Money earned by the rooms in `scope`
    pub fn total_earnings(&self, scope: RoomScope) -> Money {
        self.iter_rooms(scope).map(Room::total_earnings).sum()
    }

    /// Guests whose stay in a room in `scope` has ended
    pub fn served_guests(&self, scope: RoomScope) -> u32 {
        self.iter_rooms(scope).map(Room::total_served_guests).sum()
    }

    /// Share of finished requests that ended in a completed stay, in percent.
    ///
    /// Returns 0 before any guest has been served or lost.
    pub fn percent_of_served_clients(&self) -> u32 {
        let served = self.served_guests(RoomScope::Hotel);
        let all = served + self.total_lost_clients;
        if all == 0 {
            return 0;
        }

        (f64::from(served) / f64::from(all) * 100.0) as u32
    }

    /// Coming week's bookings for each room in `scope`, e.g. `"3-5, 7"`
    pub fn occupancy_strings(&self, scope: RoomScope) -> Vec<String> {
        let day = self.current_day();
        self.iter_rooms(scope)
            .map(|room| occupation_str(&room.current_occupation_in_week(day)))
            .collect()
    }

    /// Whether each room in `scope` is booked today
    pub fn occupied_today(&self, scope: RoomScope) -> Result<Vec<bool>> {
        let day = self.current_day();
        self.iter_rooms(scope)
            .map(|room| room.is_occupied(day))
            .collect()
    }
}
