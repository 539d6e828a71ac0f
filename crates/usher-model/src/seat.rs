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

use crate::label::SeatLabel;

/// A single seat with its precomputed closeness score.
///
/// Seats are created once by a `Venue` during map construction and never
/// mutated afterwards. The `distance` is the Manhattan distance from this
/// seat to the nearest front-row reference column; lower is better.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Seat {
    row: u32,
    column: u32,
    distance: u32,
}

impl Seat {
    /// Creates a new `Seat`. Only the venue constructs seats, which keeps
    /// the stored distance consistent with the venue geometry.
    #[inline]
    pub(crate) fn new(row: u32, column: u32, distance: u32) -> Self {
        debug_assert!(
            row >= 1 && column >= 1,
            "called `Seat::new` with a zero coordinate: seat coordinates are 1-based"
        );

        Self {
            row,
            column,
            distance,
        }
    }

    /// Returns the 1-based row of this seat.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the 1-based column of this seat.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the Manhattan distance from this seat to the nearest
    /// front-row reference column.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Returns this seat's stable identity label.
    #[inline]
    pub fn label(&self) -> SeatLabel {
        SeatLabel::new(self.row, self.column)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_label() {
        let seat = Seat::new(2, 5, 4);
        assert_eq!(seat.row(), 2);
        assert_eq!(seat.column(), 5);
        assert_eq!(seat.distance(), 4);
        assert_eq!(seat.label(), SeatLabel::new(2, 5));
        assert_eq!(seat.to_string(), "R2C5");
    }
}
