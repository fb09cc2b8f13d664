//! The hotel: pools of rooms per category and the policy for placing guests in them.
use crate::guest::{Guest, HOURS_PER_DAY, RoomCategory};
use crate::model::parameters::RoomPools;
use crate::room::Room;
use anyhow::Result;
use strum::IntoEnumIterator;

pub mod statistics;
pub use statistics::RoomScope;

/// The result of trying to place a guest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Assignment {
    /// The guest was booked into a room
    Placed {
        /// The guest as booked, including any fallback discount
        guest: Guest,
        /// The category of the room
        category: RoomCategory,
        /// Index of the room within its category
        room: usize,
    },
    /// No room could take the guest
    Lost {
        /// The guest as they arrived
        guest: Guest,
    },
}

impl Assignment {
    /// Whether the guest got a room
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// A hotel with a fixed number of rooms in each category.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// Rooms, indexed by [`RoomCategory`]
    pools: Vec<Vec<Room>>,
    /// Discount given to guests moved up to a better category
    discount_percent: u32,
    /// Hours elapsed since the start of the run
    hours: u32,
    total_lost_clients: u32,
}

impl Hotel {
    /// Create a hotel with empty rooms.
    ///
    /// # Arguments
    ///
    /// * `rooms` - Number of rooms and price for each category
    /// * `discount_percent` - Discount given when a guest falls back to a better category
    /// * `calendar_days` - Length of each room's booking calendar
    pub fn new(rooms: &RoomPools, discount_percent: u32, calendar_days: u32) -> Self {
        let pools = RoomCategory::iter()
            .map(|category| {
                let pool = rooms.get(category);
                (0..pool.count)
                    .map(|_| Room::new(pool.price.into(), calendar_days))
                    .collect()
            })
            .collect();

        Self {
            pools,
            discount_percent,
            hours: 0,
            total_lost_clients: 0,
        }
    }

    /// The rooms of one category
    pub fn rooms(&self, category: RoomCategory) -> &[Room] {
        &self.pools[category.index()]
    }

    /// Hours elapsed since the start of the run
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The current day of the run
    pub fn current_day(&self) -> u32 {
        self.hours / HOURS_PER_DAY
    }

    /// Guests who could not be given any room
    pub fn total_lost_clients(&self) -> u32 {
        self.total_lost_clients
    }

    /// Place each guest in turn, in the order given.
    ///
    /// # Returns
    ///
    /// One [`Assignment`] per guest, or an error if a stay falls outside the room calendars.
    /// Processing stops at the failing guest, and guests placed before it stay booked.
    pub fn receive_guests<I>(&mut self, guests: I) -> Result<Vec<Assignment>>
    where
        I: IntoIterator<Item = Guest>,
    {
        guests.into_iter().map(|guest| self.assign(guest)).collect()
    }

    /// Place a single guest.
    ///
    /// The preferred category is tried first. If it is full, the guest is given the hotel's
    /// discount and offered each category on its fallback ladder in turn. A guest nobody can take
    /// is counted as lost.
    pub fn assign(&mut self, guest: Guest) -> Result<Assignment> {
        let category = guest.room_preference;
        if let Some(room) = self.try_pool(category, &guest)? {
            return Ok(Assignment::Placed {
                guest,
                category,
                room,
            });
        }

        let ladder = category.fallback_ladder();
        if !ladder.is_empty() {
            let discounted = guest.with_discount(self.discount_percent);
            for &category in ladder {
                if let Some(room) = self.try_pool(category, &discounted)? {
                    return Ok(Assignment::Placed {
                        guest: discounted,
                        category,
                        room,
                    });
                }
            }
        }

        self.total_lost_clients += 1;
        Ok(Assignment::Lost { guest })
    }

    /// Offer `guest` every room of `category` in order, returning the index of the first taker
    fn try_pool(&mut self, category: RoomCategory, guest: &Guest) -> Result<Option<usize>> {
        for (index, room) in self.pools[category.index()].iter_mut().enumerate() {
            if room.receive_guest(guest)? {
                return Ok(Some(index));
            }
        }

        Ok(None)
    }

    /// Advance the hotel clock and update every room's served-guest count.
    pub fn tick(&mut self, tick_hours: u32) {
        self.hours += tick_hours;
        let day = self.current_day();
        for room in self.pools.iter_mut().flatten() {
            room.tick(day);
        }
    }
}
