//! A single hotel room and its booking calendar.
use crate::guest::Guest;
use crate::occupancy::{Calendar, OccupancyWindow};
use crate::units::Money;
use anyhow::Result;
use std::collections::BTreeSet;

/// A bookable room.
///
/// The room keeps only what it needs for statistics: which days are booked, the departure days of
/// guests it has accepted and the money it has earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// The nightly rate for the room's category
    price: Money,
    occupation: Calendar,
    guest_days_out: BTreeSet<u32>,
    total_served_guests: u32,
    total_earnings: Money,
}

impl Room {
    /// Create an empty room.
    ///
    /// # Arguments
    ///
    /// * `price` - The rate charged per stay
    /// * `calendar_days` - The number of days covered by the room's calendar
    pub fn new(price: Money, calendar_days: u32) -> Self {
        Self {
            price,
            occupation: Calendar::new(calendar_days),
            guest_days_out: BTreeSet::new(),
            total_served_guests: 0,
            total_earnings: Money::default(),
        }
    }

    /// The rate charged per stay
    pub fn price(&self) -> Money {
        self.price
    }

    /// Guests whose stay has already ended
    pub fn total_served_guests(&self) -> u32 {
        self.total_served_guests
    }

    /// Money earned from every accepted guest
    pub fn total_earnings(&self) -> Money {
        self.total_earnings
    }

    /// Try to book the room for `guest`.
    ///
    /// The guest is accepted only if every day of the stay is free, in which case the whole stay
    /// is booked and the discounted price is added to the room's earnings. A rejected guest leaves
    /// the room untouched.
    ///
    /// # Returns
    ///
    /// Whether the guest was accepted, or an error if the stay runs past the end of the calendar.
    pub fn receive_guest(&mut self, guest: &Guest) -> Result<bool> {
        if !self.occupation.is_free(guest.stay())? {
            return Ok(false);
        }

        self.occupation.book(guest.stay())?;
        self.guest_days_out.insert(guest.day_out);
        self.total_earnings += self.price.discounted(guest.discount);

        Ok(true)
    }

    /// Recount served guests as of `day`.
    ///
    /// A guest counts as served once their departure day is on or before `day`.
    pub fn tick(&mut self, day: u32) {
        self.total_served_guests = self.guest_days_out.range(..=day).count() as u32;
    }

    /// Occupancy for the week starting on `day` (days `day..=day + 7`)
    pub fn current_occupation_in_week(&self, day: u32) -> OccupancyWindow {
        self.occupation.window(day..=day + 7)
    }

    /// Occupancy from the start of the run up to and including `day`
    pub fn occupation_in_model(&self, day: u32) -> OccupancyWindow {
        self.occupation.window(0..=day)
    }

    /// Whether the room is booked on `day`
    pub fn is_occupied(&self, day: u32) -> Result<bool> {
        self.occupation.is_occupied(day)
    }
}
