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

//! Derivation of the ranked seat map from a venue and its reservations.
//!
//! The `SeatMapBuilder` collects reserved seats from externally supplied
//! label strings, then splits every row into its maximal runs of free
//! seats and ranks the resulting blocks by closeness to the best seat.
//!
//! Reserved seats are located by set membership on their column position,
//! so the order in which the caller supplies labels is irrelevant.
//! External reservation lists are lenient input: labels that are
//! malformed or name a seat outside the venue are skipped, never fatal,
//! and remain inspectable through `ignored_labels`. Reserving the same
//! seat twice is idempotent.

use crate::{block::Block, label::SeatLabel, map::SeatMap, venue::Venue};
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use usher_core::math::span::Span;

/// A configurable builder deriving a ranked `SeatMap` from a venue.
///
/// # Examples
///
/// ```rust
/// # use usher_model::{builder::SeatMapBuilder, venue::Venue};
///
/// let venue = Venue::new(2, 3).unwrap();
/// let mut builder = SeatMapBuilder::new(venue);
/// builder.reserve("R1C2");
/// let map = builder.build();
///
/// // Row 1 splits around the reserved seat; row 2 stays whole.
/// assert_eq!(map.num_blocks(), 3);
/// assert_eq!(map.remaining_seats(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SeatMapBuilder {
    venue: Venue,
    // Reserved-column mask per row; rows without reservations have no entry.
    reserved_rows: FxHashMap<u32, FixedBitSet>,
    ignored: Vec<String>,
}

impl SeatMapBuilder {
    /// Creates a builder for the given venue with no seats reserved.
    #[inline]
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            reserved_rows: FxHashMap::default(),
            ignored: Vec::new(),
        }
    }

    /// Returns the venue this builder derives maps for.
    #[inline]
    pub fn venue(&self) -> Venue {
        self.venue
    }

    /// Marks the seat named by `label` as reserved.
    ///
    /// Labels that do not parse, or that name a seat outside the venue,
    /// are skipped and recorded; they never fail the build. Reserving a
    /// seat twice has no further effect.
    pub fn reserve(&mut self, label: &str) -> &mut Self {
        match label.parse::<SeatLabel>() {
            Ok(seat) if self.venue.contains(seat) => {
                let columns = self.venue.columns() as usize;
                let mask = self
                    .reserved_rows
                    .entry(seat.row())
                    .or_insert_with(|| FixedBitSet::with_capacity(columns));
                mask.insert((seat.column() - 1) as usize);
            }
            _ => self.ignored.push(label.to_owned()),
        }

        self
    }

    /// Marks every seat in `labels` as reserved.
    pub fn reserve_all<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.reserve(label.as_ref());
        }

        self
    }

    /// Returns the number of distinct seats currently reserved.
    #[inline]
    pub fn num_reserved(&self) -> usize {
        self.reserved_rows
            .values()
            .map(|mask| mask.count_ones(..))
            .sum()
    }

    /// Returns the labels that were supplied but did not name a seat of
    /// the venue, in the order they were encountered.
    #[inline]
    pub fn ignored_labels(&self) -> &[String] {
        &self.ignored
    }

    /// Derives the ranked seat map: every row is split into its maximal
    /// free runs, each run becomes a block scored by its best seat, and
    /// the blocks are ranked ascending by that score.
    ///
    /// The builder is not consumed; repeated calls yield equal maps with
    /// no shared seat data.
    pub fn build(&self) -> SeatMap {
        let mut blocks = Vec::new();

        for row in 1..=self.venue.rows() {
            match self.reserved_rows.get(&row) {
                // Untouched rows skip the run scan and come over whole.
                None => {
                    let whole = Span::new_unchecked(1, self.venue.columns() + 1);
                    blocks.push(Block::from_span(&self.venue, row, whole));
                }
                Some(mask) => {
                    for run in free_runs(mask, self.venue.columns()) {
                        blocks.push(Block::from_span(&self.venue, row, run));
                    }
                }
            }
        }

        SeatMap::from_blocks(blocks)
    }
}

/// Scans a reserved-column mask into the maximal runs of free columns,
/// in ascending column order. Zero-length runs are never emitted.
fn free_runs(mask: &FixedBitSet, columns: u32) -> SmallVec<[Span<u32>; 4]> {
    let mut runs = SmallVec::new();
    let mut run_start: Option<u32> = None;

    for column in 1..=columns {
        let reserved = mask.contains((column - 1) as usize);
        match (reserved, run_start) {
            (false, None) => run_start = Some(column),
            (true, Some(start)) => {
                runs.push(Span::new_unchecked(start, column));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        runs.push(Span::new_unchecked(start, columns + 1));
    }

    runs
}
