//! The hotel model: a hotel plus the requests that will arrive over the simulated period.
use crate::arrivals::{Arrival, generate_arrivals};
use crate::diagnostics::Diagnostics;
use crate::guest::Guest;
use crate::hotel::{Hotel, RoomScope};
use crate::units::Money;
use anyhow::Result;
use rand::Rng;
use std::collections::VecDeque;

pub mod parameters;
use parameters::HotelParameters;

/// Drives a hotel through the simulated period in fixed-size ticks.
///
/// All arrivals are generated up front. Each tick hands the hotel every request that has come in
/// by the end of the tick, in arrival order, and then advances the hotel clock.
pub struct HotelModel {
    hotel: Hotel,
    /// Requests not yet handed to the hotel, ordered by hour
    arrivals: VecDeque<Arrival>,
    modeling_days: u32,
    tick_hours: u32,
    total_ticks: u32,
    current_tick: u32,
    diagnostics: Box<dyn Diagnostics>,
}

impl HotelModel {
    /// Create a model and generate its arrivals.
    ///
    /// # Arguments
    ///
    /// * `parameters` - Validated hotel parameters
    /// * `rng` - Source of randomness for generating arrivals
    /// * `diagnostics` - Receives events as the model runs
    pub fn new<R: Rng + ?Sized>(
        parameters: &HotelParameters,
        rng: &mut R,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        let arrivals = generate_arrivals(
            parameters.modeling_days,
            parameters.arrival_gap_hours.hours(),
            rng,
        );
        let hotel = Hotel::new(
            &parameters.rooms,
            parameters.discount_percent,
            parameters.calendar_days(),
        );

        Self::with_arrivals(parameters, hotel, arrivals, diagnostics)
    }

    /// Create a model with a given hotel and set of arrivals
    fn with_arrivals(
        parameters: &HotelParameters,
        hotel: Hotel,
        arrivals: VecDeque<Arrival>,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        Self {
            hotel,
            arrivals,
            modeling_days: parameters.modeling_days,
            tick_hours: parameters.tick_hours,
            total_ticks: parameters.total_ticks(),
            current_tick: 0,
            diagnostics,
        }
    }

    /// Run one tick.
    ///
    /// Every request arriving at or before the end of the tick is passed to the hotel in a
    /// single batch, then the hotel clock moves on by `tick_hours`.
    pub fn tick(&mut self) -> Result<()> {
        let tick = self.current_tick + 1;
        let end_hour = tick * self.tick_hours;
        let due = self
            .arrivals
            .iter()
            .take_while(|arrival| arrival.hour <= end_hour)
            .count();
        let guests: Vec<Guest> = self
            .arrivals
            .drain(..due)
            .map(|arrival| arrival.guest)
            .collect();

        self.diagnostics.arrivals_released(tick, &guests);
        for assignment in self.hotel.receive_guests(guests)? {
            self.diagnostics.guest_assigned(&assignment);
        }

        self.hotel.tick(self.tick_hours);
        self.current_tick = tick;
        self.diagnostics
            .tick_completed(tick, self.hotel.current_day());

        Ok(())
    }

    /// Whether the model has run for the whole simulated period
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.total_ticks
    }

    /// Run ticks until the simulated period is over
    pub fn run_to_end(&mut self) -> Result<()> {
        while !self.is_finished() {
            self.tick()?;
        }

        Ok(())
    }

    /// The hotel being simulated
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Number of ticks run so far
    pub fn current_tick(&self) -> u32 {
        self.current_tick
    }

    /// Number of ticks in a full run
    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// The current day of the run
    pub fn current_day(&self) -> u32 {
        self.hotel.current_day()
    }

    /// Length of the simulated period, in days
    pub fn modeling_days(&self) -> u32 {
        self.modeling_days
    }

    /// Requests which have not yet reached the hotel
    pub fn pending_arrivals(&self) -> usize {
        self.arrivals.len()
    }

    /// Occupancy over the coming week, in percent
    pub fn weekly_occupancy_percent(&self, scope: RoomScope) -> u32 {
        self.hotel.weekly_occupancy_percent(scope)
    }

    /// Days booked over the whole simulated period, in percent of a week
    pub fn lifetime_occupancy_percent(&self, scope: RoomScope) -> u32 {
        self.hotel
            .lifetime_occupancy_percent(scope, self.modeling_days)
    }

    /// Money earned so far
    pub fn total_earnings(&self, scope: RoomScope) -> Money {
        self.hotel.total_earnings(scope)
    }

    /// Guests whose stay has ended
    pub fn served_guests(&self, scope: RoomScope) -> u32 {
        self.hotel.served_guests(scope)
    }

    /// Guests the hotel could not accommodate
    pub fn total_lost_clients(&self) -> u32 {
        self.hotel.total_lost_clients()
    }

    /// Share of finished requests that ended in a completed stay, in percent
    pub fn percent_of_served_clients(&self) -> u32 {
        self.hotel.percent_of_served_clients()
    }

    /// Coming week's bookings for each room in `scope`
    pub fn occupancy_strings(&self, scope: RoomScope) -> Vec<String> {
        self.hotel.occupancy_strings(scope)
    }

    /// Whether each room in `scope` is booked today
    pub fn occupied_today(&self, scope: RoomScope) -> Result<Vec<bool>> {
        self.hotel.occupied_today(scope)
    }
}
