//! Fixtures for tests

use crate::diagnostics::Diagnostics;
use crate::guest::Guest;
use crate::hotel::{Assignment, Hotel};
use crate::model::parameters::{ArrivalGap, HotelParameters, PoolParameters, RoomPools};
use crate::room::Room;
use crate::units::Money;
use rstest::fixture;
use std::cell::RefCell;
use std::rc::Rc;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Room pools with the given number of rooms per category and fixed prices
pub fn room_pools(single: u32, double: u32, junior_suite: u32, luxury: u32) -> RoomPools {
    RoomPools {
        single: PoolParameters {
            count: single,
            price: 100,
        },
        double: PoolParameters {
            count: double,
            price: 150,
        },
        junior_suite: PoolParameters {
            count: junior_suite,
            price: 250,
        },
        luxury: PoolParameters {
            count: luxury,
            price: 400,
        },
    }
}

#[fixture]
pub fn room() -> Room {
    Room::new(Money(100.0), 45)
}

/// A hotel with one room in each category
#[fixture]
pub fn hotel() -> Hotel {
    Hotel::new(&room_pools(1, 1, 1, 1), 20, 45)
}

#[fixture]
pub fn parameters() -> HotelParameters {
    HotelParameters {
        modeling_days: 10,
        tick_hours: 6,
        discount_percent: 20,
        arrival_gap_hours: ArrivalGap { min: 1, max: 6 },
        seed: None,
        rooms: room_pools(5, 4, 3, 2),
    }
}

/// Diagnostics which write a short description of each event to a shared list
pub struct RecordingDiagnostics(pub Rc<RefCell<Vec<String>>>);

impl Diagnostics for RecordingDiagnostics {
    fn arrivals_released(&mut self, tick: u32, guests: &[Guest]) {
        self.0
            .borrow_mut()
            .push(format!("released {tick}: {}", guests.len()));
    }

    fn guest_assigned(&mut self, assignment: &Assignment) {
        let event = match assignment {
            Assignment::Placed { category, room, .. } => format!("placed {category} {room}"),
            Assignment::Lost { guest } => format!("lost {}", guest.room_preference),
        };
        self.0.borrow_mut().push(event);
    }

    fn tick_completed(&mut self, tick: u32, day: u32) {
        self.0
            .borrow_mut()
            .push(format!("completed {tick}: day {day}"));
    }
}
