// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use usher_model::{label::SeatLabel, seat::Seat};

/// The seats handed out by one successful reservation request.
///
/// Seats are stored sorted ascending by column; an allocation always sits
/// within a single row, so the first and last seat delimit the contiguous
/// span that was carved out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    seats: Vec<Seat>,
}

/// The user-facing identity of an allocation.
///
/// Parties of one are reported by their single seat label; larger parties
/// by the labels of the two ends of their contiguous span. A zero-size
/// request yields `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationLabel {
    /// Nothing was requested, nothing was handed out.
    Empty,
    /// A single seat.
    Single(SeatLabel),
    /// The inclusive ends of a contiguous span of seats.
    Range(SeatLabel, SeatLabel),
}

impl Allocation {
    /// Constructs an allocation from the carved seats, ordering them by
    /// column for reporting.
    #[inline]
    pub(crate) fn new(mut seats: Vec<Seat>) -> Self {
        seats.sort_by_key(Seat::column);
        Self { seats }
    }

    /// Returns the allocated seats, sorted ascending by column.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the number of allocated seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Checks whether this allocation handed out no seats.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Returns the report label for this allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use usher_alloc::allocator::Allocator;
    /// # use usher_model::{builder::SeatMapBuilder, venue::Venue};
    ///
    /// let venue = Venue::new(1, 4).unwrap();
    /// let mut map = SeatMapBuilder::new(venue).build();
    ///
    /// let result = Allocator::new().allocate(&mut map, 2);
    /// let allocation = result.allocation().unwrap();
    /// assert_eq!(allocation.label().to_string(), "R1C2 - R1C3");
    /// ```
    #[inline]
    pub fn label(&self) -> AllocationLabel {
        match self.seats.as_slice() {
            [] => AllocationLabel::Empty,
            [only] => AllocationLabel::Single(only.label()),
            [first, .., last] => AllocationLabel::Range(first.label(), last.label()),
        }
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for AllocationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "(no seats)"),
            Self::Single(label) => write!(f, "{}", label),
            Self::Range(first, last) => write!(f, "{} - {}", first, last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usher_model::{builder::SeatMapBuilder, venue::Venue};

    /// Carves `n` seats off the best block of a fresh `rows x columns` map.
    fn carve(rows: u32, columns: u32, n: usize) -> Allocation {
        let venue = Venue::new(rows, columns).expect("test venue dimensions are valid");
        let mut map = SeatMapBuilder::new(venue).build();
        let mut block = map.remove(usher_model::index::BlockIndex::new(0));
        Allocation::new(block.take_front(n))
    }

    #[test]
    fn test_empty_label() {
        let allocation = Allocation::new(Vec::new());
        assert!(allocation.is_empty());
        assert_eq!(allocation.label(), AllocationLabel::Empty);
        assert_eq!(allocation.to_string(), "(no seats)");
    }

    #[test]
    fn test_single_seat_label() {
        let allocation = carve(1, 1, 1);
        assert_eq!(
            allocation.label(),
            AllocationLabel::Single(SeatLabel::new(1, 1))
        );
        assert_eq!(allocation.to_string(), "R1C1");
    }

    #[test]
    fn test_range_label_is_column_ordered() {
        // The best block of a 1x4 venue hands out the center pair first;
        // the report orders them by column regardless of carve order.
        let allocation = carve(1, 4, 2);
        assert_eq!(
            allocation.label(),
            AllocationLabel::Range(SeatLabel::new(1, 2), SeatLabel::new(1, 3))
        );
        assert_eq!(allocation.to_string(), "R1C2 - R1C3");
    }

    #[test]
    fn test_seats_sorted_by_column() {
        let allocation = carve(1, 5, 3);
        let columns: Vec<u32> = allocation.seats().iter().map(Seat::column).collect();
        assert_eq!(columns, vec![2, 3, 4]);
    }
}
