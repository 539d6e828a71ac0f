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

//! The immutable venue geometry.
//!
//! A `Venue` is a rectangle of `rows × columns` seats, rows counted from
//! the front. The most desirable seats sit in the front row around the
//! center: for an odd column count there is a single center column, for an
//! even count the two middle columns are equally good. Every seat is scored
//! by its Manhattan distance to the nearest of these reference columns, and
//! all ranking downstream derives from that score.

use crate::{label::SeatLabel, seat::Seat};
use usher_core::math::span::Span;

/// The error type for venue construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenueError {
    /// The venue dimensions are invalid (both must be at least 1).
    InvalidDimensions {
        /// The rejected row count.
        rows: u32,
        /// The rejected column count.
        columns: u32,
    },
}

impl std::fmt::Display for VenueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, columns } => write!(
                f,
                "Venue dimensions must be positive integers, got {} rows and {} columns",
                rows, columns
            ),
        }
    }
}

impl std::error::Error for VenueError {}

/// A validated rectangular seating venue.
///
/// Construction rejects empty dimensions eagerly; a `Venue` value always
/// describes at least one seat.
///
/// # Examples
///
/// ```rust
/// # use usher_model::venue::Venue;
///
/// let venue = Venue::new(3, 5).unwrap();
/// assert_eq!(venue.num_seats(), 15);
/// assert!(Venue::new(0, 5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Venue {
    rows: u32,
    columns: u32,
}

impl Venue {
    /// Creates a new `Venue` with the given dimensions.
    ///
    /// Returns `VenueError::InvalidDimensions` if either dimension is zero.
    #[inline]
    pub fn new(rows: u32, columns: u32) -> Result<Self, VenueError> {
        if rows == 0 || columns == 0 {
            return Err(VenueError::InvalidDimensions { rows, columns });
        }

        Ok(Self { rows, columns })
    }

    /// Returns the number of rows, counted from the front.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the total number of seats in the venue.
    #[inline]
    pub fn num_seats(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Returns the front-row reference columns as a span.
    ///
    /// A true center seat only exists for an odd column count; an even
    /// count yields the two middle columns, both equally desirable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use usher_model::venue::Venue;
    ///
    /// let odd = Venue::new(1, 5).unwrap();
    /// assert_eq!(odd.reference_columns().iter().collect::<Vec<_>>(), vec![3]);
    ///
    /// let even = Venue::new(1, 4).unwrap();
    /// assert_eq!(even.reference_columns().iter().collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    #[inline]
    pub fn reference_columns(&self) -> Span<u32> {
        // Collapses to a single column for odd widths: both bounds then
        // name the same center column.
        Span::new_unchecked((self.columns + 1) / 2, self.columns / 2 + 2)
    }

    /// Returns the Manhattan distance from the seat at `(row, column)` to
    /// the nearest front-row reference column.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the coordinates lie outside the venue.
    #[inline]
    pub fn seat_distance(&self, row: u32, column: u32) -> u32 {
        debug_assert!(
            self.contains(SeatLabel::new(row, column)),
            "called `Venue::seat_distance` with coordinates outside the venue: R{}C{} in a {}x{} venue",
            row,
            column,
            self.rows,
            self.columns
        );

        (row - 1) + self.reference_columns().distance_to(column)
    }

    /// Constructs the seat at `(row, column)` with its distance score.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the coordinates lie outside the venue.
    #[inline]
    pub fn seat(&self, row: u32, column: u32) -> Seat {
        Seat::new(row, column, self.seat_distance(row, column))
    }

    /// Checks whether `label` names a seat inside this venue.
    #[inline]
    pub fn contains(&self, label: SeatLabel) -> bool {
        label.row() <= self.rows && label.column() <= self.columns
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Venue({} rows x {} columns)", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Venue::new(0, 4),
            Err(VenueError::InvalidDimensions {
                rows: 0,
                columns: 4
            })
        );
        assert_eq!(
            Venue::new(4, 0),
            Err(VenueError::InvalidDimensions {
                rows: 4,
                columns: 0
            })
        );
        assert!(Venue::new(1, 1).is_ok());
    }

    #[test]
    fn test_reference_columns_odd_width() {
        let venue = Venue::new(2, 7).unwrap();
        let refs: Vec<_> = venue.reference_columns().iter().collect();
        assert_eq!(refs, vec![4]);
    }

    #[test]
    fn test_reference_columns_even_width() {
        let venue = Venue::new(2, 6).unwrap();
        let refs: Vec<_> = venue.reference_columns().iter().collect();
        assert_eq!(refs, vec![3, 4]);
    }

    #[test]
    fn test_reference_columns_degenerate_widths() {
        let one = Venue::new(1, 1).unwrap();
        assert_eq!(one.reference_columns().iter().collect::<Vec<_>>(), vec![1]);

        let two = Venue::new(1, 2).unwrap();
        assert_eq!(
            two.reference_columns().iter().collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_seat_distance_single_seat() {
        let venue = Venue::new(1, 1).unwrap();
        assert_eq!(venue.seat_distance(1, 1), 0);
    }

    #[test]
    fn test_seat_distance_even_width_front_row() {
        // 1x4 venue: reference columns {2, 3}.
        let venue = Venue::new(1, 4).unwrap();
        assert_eq!(venue.seat_distance(1, 1), 1);
        assert_eq!(venue.seat_distance(1, 2), 0);
        assert_eq!(venue.seat_distance(1, 3), 0);
        assert_eq!(venue.seat_distance(1, 4), 1);
    }

    #[test]
    fn test_seat_distance_adds_row_offset() {
        let venue = Venue::new(3, 3).unwrap();
        assert_eq!(venue.seat_distance(1, 2), 0);
        assert_eq!(venue.seat_distance(2, 2), 1);
        assert_eq!(venue.seat_distance(3, 1), 3);
    }

    #[test]
    fn test_seat_carries_distance() {
        let venue = Venue::new(2, 3).unwrap();
        let seat = venue.seat(2, 1);
        assert_eq!(seat.row(), 2);
        assert_eq!(seat.column(), 1);
        assert_eq!(seat.distance(), 2);
    }

    #[test]
    fn test_contains() {
        let venue = Venue::new(2, 3).unwrap();
        assert!(venue.contains(SeatLabel::new(2, 3)));
        assert!(!venue.contains(SeatLabel::new(3, 1)));
        assert!(!venue.contains(SeatLabel::new(1, 4)));
    }
}
