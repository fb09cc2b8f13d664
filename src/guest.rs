//! Guests and the room categories they can ask for.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// Number of simulated hours in a day
pub const HOURS_PER_DAY: u32 = 24;

/// The shortest stay a generated guest can request, in days
pub const MIN_STAY_DAYS: u32 = 1;

/// The longest stay a generated guest can request, in days
pub const MAX_STAY_DAYS: u32 = 7;

/// The latest day on which an advance booking can start
pub const MAX_ADVANCE_BOOKING_DAY: u32 = 6;

/// A category of hotel room.
///
/// Categories are ordered from cheapest to most expensive, which is also the order in which rooms
/// are ticked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoomCategory {
    /// A single room
    Single,
    /// A double room
    Double,
    /// A junior suite
    JuniorSuite,
    /// A luxury room
    Luxury,
}

impl RoomCategory {
    /// The categories a guest is offered, in order, when every room of this category is taken.
    ///
    /// The ladder only ever goes up. Luxury guests have nowhere to go.
    pub fn fallback_ladder(self) -> &'static [RoomCategory] {
        match self {
            Self::Single | Self::Double => &[Self::Double, Self::JuniorSuite, Self::Luxury],
            Self::JuniorSuite => &[Self::Luxury],
            Self::Luxury => &[],
        }
    }

    /// Position of this category in per-category arrays
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guest {
    /// First day of the stay (inclusive)
    pub day_in: u32,
    /// Last day of the stay (inclusive)
    pub day_out: u32,
    /// The category of room the guest asks for
    pub room_preference: RoomCategory,
    /// Discount on the room rate, in percent
    pub discount: u32,
}

impl Guest {
    /// Create a new guest without a discount.
    pub fn new(day_in: u32, day_out: u32, room_preference: RoomCategory) -> Self {
        debug_assert!(day_out >= day_in, "Guest must leave on or after arrival day");
        Self {
            day_in,
            day_out,
            room_preference,
            discount: 0,
        }
    }

    /// A copy of this guest with the given discount applied.
    pub fn with_discount(self, discount: u32) -> Self {
        Self { discount, ..self }
    }

    /// The days of the stay
    pub fn stay(&self) -> std::ops::RangeInclusive<u32> {
        self.day_in..=self.day_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_order() {
        assert_eq!(
            RoomCategory::iter().collect_vec(),
            [
                RoomCategory::Single,
                RoomCategory::Double,
                RoomCategory::JuniorSuite,
                RoomCategory::Luxury
            ]
        );
        assert_eq!(RoomCategory::COUNT, 4);
    }

    #[rstest]
    #[case(RoomCategory::Single)]
    #[case(RoomCategory::Double)]
    #[case(RoomCategory::JuniorSuite)]
    #[case(RoomCategory::Luxury)]
    fn test_fallback_ladder_never_goes_down(#[case] category: RoomCategory) {
        assert!(category.fallback_ladder().iter().all(|&c| c >= category));
    }

    #[test]
    fn test_fallback_ladder() {
        assert_eq!(
            RoomCategory::Single.fallback_ladder(),
            [
                RoomCategory::Double,
                RoomCategory::JuniorSuite,
                RoomCategory::Luxury
            ]
        );
        assert_eq!(
            RoomCategory::JuniorSuite.fallback_ladder(),
            [RoomCategory::Luxury]
        );
        assert!(RoomCategory::Luxury.fallback_ladder().is_empty());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(RoomCategory::JuniorSuite.to_string(), "junior_suite");
    }

    #[test]
    fn test_with_discount_leaves_original() {
        let guest = Guest::new(1, 3, RoomCategory::Single);
        let discounted = guest.with_discount(20);
        assert_eq!(guest.discount, 0);
        assert_eq!(discounted.discount, 20);
        assert_eq!(discounted.stay(), guest.stay());
    }
}
