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

//! The `R{row}C{column}` seat label wire format.
//!
//! This format is the sole coupling contract between the core and any
//! producer of reserved-seat lists or consumer of allocation reports.
//! Labels use 1-based decimal coordinates with no padding: `R1C1`,
//! `R12C4`. Parsing is strict; anything that a venue would not generate
//! itself is rejected with a descriptive error.

use std::str::FromStr;

/// A seat's stable identity within a venue: its row and column.
///
/// `Display` renders the wire format, and `FromStr` parses it back:
///
/// ```rust
/// # use usher_model::label::SeatLabel;
///
/// let label = SeatLabel::new(12, 4);
/// assert_eq!(label.to_string(), "R12C4");
/// assert_eq!("R12C4".parse::<SeatLabel>().unwrap(), label);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeatLabel {
    row: u32,
    column: u32,
}

impl SeatLabel {
    /// Creates a new `SeatLabel`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is zero; seat coordinates are 1-based.
    #[inline]
    pub fn new(row: u32, column: u32) -> Self {
        assert!(
            row >= 1 && column >= 1,
            "called `SeatLabel::new` with a zero coordinate: seat coordinates are 1-based"
        );
        Self { row, column }
    }

    /// Returns the 1-based row of the labeled seat.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Returns the 1-based column of the labeled seat.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl std::fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}C{}", self.row, self.column)
    }
}

/// The error type for seat label parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSeatLabelError {
    /// The label does not start with the row marker `R`.
    MissingRowMarker,
    /// No column marker `C` separates the two coordinates.
    MissingColumnMarker,
    /// A coordinate is empty, padded, zero, or not a decimal number.
    InvalidCoordinate {
        /// The offending coordinate text.
        text: String,
    },
}

impl std::fmt::Display for ParseSeatLabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRowMarker => write!(f, "Seat label must start with 'R'"),
            Self::MissingColumnMarker => {
                write!(f, "Seat label must separate row and column with 'C'")
            }
            Self::InvalidCoordinate { text } => {
                write!(f, "Could not parse '{}' as a 1-based seat coordinate", text)
            }
        }
    }
}

impl std::error::Error for ParseSeatLabelError {}

/// Parses one coordinate: non-empty decimal digits with no leading zero.
///
/// Rejecting a leading zero covers both zero coordinates and padded forms
/// such as `R01C2`, which no venue generates.
fn parse_coordinate(text: &str) -> Result<u32, ParseSeatLabelError> {
    let invalid = || ParseSeatLabelError::InvalidCoordinate {
        text: text.to_owned(),
    };

    if text.is_empty() || text.starts_with('0') || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    text.parse::<u32>().map_err(|_| invalid())
}

impl FromStr for SeatLabel {
    type Err = ParseSeatLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('R')
            .ok_or(ParseSeatLabelError::MissingRowMarker)?;
        let (row_text, column_text) = rest
            .split_once('C')
            .ok_or(ParseSeatLabelError::MissingColumnMarker)?;

        let row = parse_coordinate(row_text)?;
        let column = parse_coordinate(column_text)?;

        Ok(Self { row, column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(SeatLabel::new(1, 1).to_string(), "R1C1");
        assert_eq!(SeatLabel::new(12, 4).to_string(), "R12C4");
    }

    #[test]
    fn test_parse_valid_labels() {
        assert_eq!("R1C1".parse::<SeatLabel>().unwrap(), SeatLabel::new(1, 1));
        assert_eq!(
            "R120C45".parse::<SeatLabel>().unwrap(),
            SeatLabel::new(120, 45)
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        for label in [
            SeatLabel::new(1, 1),
            SeatLabel::new(7, 10),
            SeatLabel::new(999, 3),
        ] {
            assert_eq!(label.to_string().parse::<SeatLabel>().unwrap(), label);
        }
    }

    #[test]
    fn test_parse_rejects_missing_markers() {
        assert_eq!(
            "1C1".parse::<SeatLabel>(),
            Err(ParseSeatLabelError::MissingRowMarker)
        );
        assert_eq!(
            "R11".parse::<SeatLabel>(),
            Err(ParseSeatLabelError::MissingColumnMarker)
        );
        assert_eq!(
            "".parse::<SeatLabel>(),
            Err(ParseSeatLabelError::MissingRowMarker)
        );
    }

    #[test]
    fn test_parse_rejects_bad_coordinates() {
        // Zero and padded coordinates are not generated by any venue.
        assert!("R0C1".parse::<SeatLabel>().is_err());
        assert!("R1C0".parse::<SeatLabel>().is_err());
        assert!("R01C2".parse::<SeatLabel>().is_err());
        assert!("R1C2x".parse::<SeatLabel>().is_err());
        assert!("RC2".parse::<SeatLabel>().is_err());
        assert!("R-1C2".parse::<SeatLabel>().is_err());
    }

    #[test]
    #[should_panic(expected = "seat coordinates are 1-based")]
    fn test_new_panics_on_zero_row() {
        let _ = SeatLabel::new(0, 1);
    }
}
