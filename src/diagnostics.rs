//! Reporting of what happens during a run.
//!
//! The simulation core does not log on its own. It tells an injected [`Diagnostics`] object about
//! each event and leaves it to decide what to do with it.
use crate::guest::Guest;
use crate::hotel::Assignment;
use log::{debug, trace};

/// Receives notifications about simulation events.
///
/// Every method has an empty default implementation, so implementors only need to handle the
/// events they care about.
pub trait Diagnostics {
    /// Guests due on `tick` have been released to the hotel
    fn arrivals_released(&mut self, _tick: u32, _guests: &[Guest]) {}

    /// The hotel has dealt with a guest
    fn guest_assigned(&mut self, _assignment: &Assignment) {}

    /// `tick` has finished and the hotel clock is now on `day`
    fn tick_completed(&mut self, _tick: u32, _day: u32) {}
}

/// A one-line description of what happened to a guest
fn describe_assignment(assignment: &Assignment) -> String {
    match assignment {
        Assignment::Placed {
            guest,
            category,
            room,
        } if *category != guest.room_preference => format!(
            "Guest for days {}-{} moved from {} to {category} room {room} with a {}% discount",
            guest.day_in, guest.day_out, guest.room_preference, guest.discount
        ),
        Assignment::Placed {
            guest,
            category,
            room,
        } => format!(
            "Guest for days {}-{} checked into {category} room {room}",
            guest.day_in, guest.day_out
        ),
        Assignment::Lost { guest } => format!(
            "Lost a guest for days {}-{} wanting a {} room",
            guest.day_in, guest.day_out, guest.room_preference
        ),
    }
}

/// Forwards events to the program log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn arrivals_released(&mut self, tick: u32, guests: &[Guest]) {
        debug!("Tick {tick}: {} new booking requests", guests.len());
        for guest in guests {
            trace!("Booking request: {guest:?}");
        }
    }

    fn guest_assigned(&mut self, assignment: &Assignment) {
        debug!("{}", describe_assignment(assignment));
    }

    fn tick_completed(&mut self, tick: u32, day: u32) {
        trace!("Tick {tick} complete, now on day {day}");
    }
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}
