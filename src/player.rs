//! Seat 座位
//!
//! See [`Seat`]. A mod-4 index used both as an absolute player id and as the
//! "seats away" relative offset the priority rules need.

use std::fmt::{Debug, Display, Formatter};

use crate::tile::Wind;

/// A player index, 0..=3, forced to mod-4 arithmetic.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat(u8);

impl Seat {
    pub const fn new(id: u8) -> Self { Self(id % 4) }
    pub const fn to_u8(self) -> u8 { self.0 }
    pub const fn to_usize(self) -> usize { self.0 as usize }

    /// The seat `offset` seats after this one, wrapping mod 4.
    pub const fn wrapping_add(self, offset: u8) -> Seat { Self::new(self.0 + offset) }

    /// This player's fixed seat wind, assigned at the table in seat-index order.
    pub const fn seat_wind(self) -> Wind { Wind::ALL[self.0 as usize] }
}

pub const P0: Seat = Seat::new(0);
pub const P1: Seat = Seat::new(1);
pub const P2: Seat = Seat::new(2);
pub const P3: Seat = Seat::new(3);

pub const ALL_SEATS: [Seat; 4] = [P0, P1, P2, P3];

/// The three other seats, in seating order starting immediately after `seat`
/// — used by contended-reaction gathering and the kong-robbery sub-protocol,
/// both of which walk the table in this order.
pub fn other_seats_after(seat: Seat) -> [Seat; 3] {
    [seat.wrapping_add(1), seat.wrapping_add(2), seat.wrapping_add(3)]
}

/// Distance (in seats, 1..=3) from `from` to `to` walking forward around the
/// table. Used to break same-kind reaction ties by "closest seat wins".
pub fn seat_distance(from: Seat, to: Seat) -> u8 {
    (to.0 + 4 - from.0) % 4
}

impl Debug for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "Seat({})", self.0) }
}
impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}
