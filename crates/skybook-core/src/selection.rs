//! The user's in-progress seat choices for one flight

use crate::price::total_price;
use crate::types::{Seat, SeatId};

/// Ordered toggle set of seat ids
///
/// Holds ids rather than seats so the seat plan stays the single source of
/// truth for prices and occupancy. Occupied seats never enter the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<SeatId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in the order they were chosen
    pub fn ids(&self) -> &[SeatId] {
        &self.ids
    }

    /// Flip `seat`'s membership; occupied seats leave the set unchanged
    #[must_use]
    pub fn toggled(mut self, seat: &Seat) -> Self {
        if seat.occupied {
            return self;
        }
        if let Some(pos) = self.ids.iter().position(|id| *id == seat.id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(seat.id);
        }
        self
    }

    /// Drop ids that are missing from `seats` or now occupied
    #[must_use]
    pub fn retained_in(mut self, seats: &[Seat]) -> Self {
        self.ids.retain(|id| {
            seats
                .iter()
                .any(|seat| seat.id == *id && !seat.occupied)
        });
        self
    }

    /// Selected seats from `seats`, in selection order
    pub fn selected_seats<'a>(&self, seats: &'a [Seat]) -> Vec<&'a Seat> {
        self.ids
            .iter()
            .filter_map(|id| seats.iter().find(|seat| seat.id == *id))
            .collect()
    }

    /// Sum of the selected seats' prices
    pub fn total(&self, seats: &[Seat]) -> f64 {
        total_price(self.selected_seats(seats))
    }
}
