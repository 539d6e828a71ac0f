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

use crate::{seat::Seat, venue::Venue};
use usher_core::math::span::Span;

/// A maximal contiguous run of unreserved seats within a single row.
///
/// The seats are stored sorted ascending by distance, so the best seat is
/// always first and carving a party off the front yields the seats closest
/// to the venue's reference columns. The sort is stable over ascending
/// column order, so equal-distance seats (the center pair of an even-width
/// row) stay in column order.
///
/// # Invariants
/// All seats share the same row; their columns form a contiguous run; a
/// block held by a `SeatMap` contains at least one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    row: u32,
    seats: Vec<Seat>,
}

impl Block {
    /// Builds the block covering `columns` of `row`, scoring every seat
    /// against the venue geometry.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `columns` is empty; empty candidate runs
    /// are dropped before block construction.
    pub(crate) fn from_span(venue: &Venue, row: u32, columns: Span<u32>) -> Self {
        debug_assert!(
            !columns.is_empty(),
            "called `Block::from_span` with an empty column run"
        );

        let mut seats: Vec<Seat> = columns.iter().map(|c| venue.seat(row, c)).collect();
        seats.sort_by_key(|seat| seat.distance());

        Self { row, seats }
    }

    /// Returns the 1-based row this block belongs to.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the number of seats in this block.
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Checks whether the block has no seats left.
    ///
    /// Only a block that has been fully carved is empty; maps never hold
    /// empty blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Returns the block's distance: the distance of its best seat.
    ///
    /// # Panics
    ///
    /// Panics if the block is empty.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.seats[0].distance()
    }

    /// Returns the seats of this block, sorted ascending by distance.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Removes and returns the `n` best seats of this block.
    ///
    /// The remaining seats keep their distance order, so the block's
    /// distance after carving is the distance of its new first seat.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of seats in the block.
    #[inline]
    pub fn take_front(&mut self, n: usize) -> Vec<Seat> {
        assert!(
            n <= self.seats.len(),
            "called `Block::take_front` with n out of bounds: the len is {} but n is {}",
            self.seats.len(),
            n
        );

        self.seats.drain(..n).collect()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let first = self.seats.iter().map(Seat::column).min();
        let last = self.seats.iter().map(Seat::column).max();
        match (first, last) {
            (Some(first), Some(last)) => write!(
                f,
                "Block(row {}, columns {}..={}, distance {})",
                self.row,
                first,
                last,
                self.distance()
            ),
            _ => write!(f, "Block(row {}, empty)", self.row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(rows: u32, columns: u32) -> Venue {
        Venue::new(rows, columns).expect("test venue dimensions are valid")
    }

    fn columns_of(block: &Block) -> Vec<u32> {
        block.seats().iter().map(Seat::column).collect()
    }

    #[test]
    fn test_seats_sorted_best_first() {
        // 1x4 row: distances C1=1, C2=0, C3=0, C4=1. Stable sort keeps the
        // center pair in column order.
        let block = Block::from_span(&venue(1, 4), 1, Span::new(1, 5));
        assert_eq!(columns_of(&block), vec![2, 3, 1, 4]);
        assert_eq!(block.distance(), 0);
    }

    #[test]
    fn test_partial_row_block() {
        // Columns 3..=5 of a 1x5 row: distances C3=0, C4=1, C5=2.
        let block = Block::from_span(&venue(1, 5), 1, Span::new(3, 6));
        assert_eq!(columns_of(&block), vec![3, 4, 5]);
        assert_eq!(block.len(), 3);
        assert_eq!(block.distance(), 0);
    }

    #[test]
    fn test_take_front_carves_best_seats() {
        let mut block = Block::from_span(&venue(1, 5), 1, Span::new(3, 6));
        let taken = block.take_front(2);

        assert_eq!(taken.iter().map(Seat::column).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(columns_of(&block), vec![5]);
        assert_eq!(block.distance(), 2);
    }

    #[test]
    fn test_take_front_can_empty_the_block() {
        let mut block = Block::from_span(&venue(1, 2), 1, Span::new(1, 3));
        let taken = block.take_front(2);
        assert_eq!(taken.len(), 2);
        assert!(block.is_empty());
    }

    #[test]
    #[should_panic(expected = "called `Block::take_front` with n out of bounds")]
    fn test_take_front_panics_on_overdraw() {
        let mut block = Block::from_span(&venue(1, 2), 1, Span::new(1, 3));
        let _ = block.take_front(3);
    }

    #[test]
    fn test_display() {
        let block = Block::from_span(&venue(1, 4), 1, Span::new(1, 5));
        assert_eq!(format!("{}", block), "Block(row 1, columns 1..=4, distance 0)");
    }
}
