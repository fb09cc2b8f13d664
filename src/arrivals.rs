//! Generation of the stream of booking requests.
use crate::guest::{
    Guest, HOURS_PER_DAY, MAX_ADVANCE_BOOKING_DAY, MAX_STAY_DAYS, MIN_STAY_DAYS, RoomCategory,
};
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// A booking request and the hour at which it reaches the hotel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    /// The guest making the request
    pub guest: Guest,
    /// Hours since the start of the run
    pub hour: u32,
}

impl Distribution<RoomCategory> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RoomCategory {
        match rng.gen_range(0..4) {
            0 => RoomCategory::Single,
            1 => RoomCategory::Double,
            2 => RoomCategory::JuniorSuite,
            _ => RoomCategory::Luxury,
        }
    }
}

/// Generate every arrival for the simulated period, ordered by hour.
///
/// Starting at hour zero, each request is either a walk-in for the current day or, with equal
/// probability, an advance booking starting somewhere in the first week. Stays last
/// `MIN_STAY_DAYS..=MAX_STAY_DAYS` days and the category is chosen uniformly. The next request
/// comes after a number of hours drawn from `gap_hours`.
///
/// # Arguments
///
/// * `modeling_days` - Length of the simulated period, in days
/// * `gap_hours` - Range of hours between consecutive arrivals. Must not be `0..=0`.
/// * `rng` - Source of randomness
pub fn generate_arrivals<R: Rng + ?Sized>(
    modeling_days: u32,
    gap_hours: RangeInclusive<u32>,
    rng: &mut R,
) -> VecDeque<Arrival> {
    debug_assert!(*gap_hours.end() > 0, "Arrival gap cannot always be zero");

    let end_hour = modeling_days * HOURS_PER_DAY;
    let mut arrivals = VecDeque::new();
    let mut hour = 0;
    while hour < end_hour {
        let day_in = if rng.gen_bool(0.5) {
            hour / HOURS_PER_DAY
        } else {
            rng.gen_range(0..=MAX_ADVANCE_BOOKING_DAY)
        };
        let day_out = day_in + rng.gen_range(MIN_STAY_DAYS..=MAX_STAY_DAYS);
        let guest = Guest::new(day_in, day_out, Standard.sample(rng));

        arrivals.push_back(Arrival { guest, hour });
        hour += rng.gen_range(gap_hours.clone());
    }

    arrivals
}
