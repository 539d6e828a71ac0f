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

//! The greedy best-block allocator.
//!
//! Because a `SeatMap` keeps its blocks ranked ascending by distance, the
//! first block large enough to seat a party is also the closest-to-best
//! block that can; the allocator therefore scans linearly, carves off the
//! front of the winning block, and re-inserts any remainder at its new
//! rank. Every request leaves the map either correctly updated or, for
//! rejected requests, completely untouched.

use crate::{
    allocation::Allocation,
    monitor::{AllocationMonitor, Rejection},
    result::AllocationResult,
    stats::AllocatorStatistics,
};
use usher_model::{index::BlockIndex, map::SeatMap};

/// The largest party a single request may seat together.
pub const DEFAULT_MAX_PARTY_SIZE: usize = 10;

/// Serves reservation requests against a ranked `SeatMap`.
///
/// The allocator mutates the map it is handed in place and requires
/// exclusive access to it for the duration of a request.
///
/// # Examples
///
/// ```rust
/// # use usher_alloc::allocator::Allocator;
/// # use usher_model::{builder::SeatMapBuilder, venue::Venue};
///
/// let venue = Venue::new(1, 1).unwrap();
/// let mut map = SeatMapBuilder::new(venue).build();
///
/// let mut allocator = Allocator::new();
/// let result = allocator.allocate(&mut map, 1);
/// assert_eq!(result.allocation().unwrap().label().to_string(), "R1C1");
/// assert!(map.is_empty());
/// ```
pub struct Allocator {
    max_party_size: usize,
    monitors: Vec<Box<dyn AllocationMonitor>>,
    statistics: AllocatorStatistics,
}

impl Allocator {
    /// Creates a new `Allocator` with the default party-size limit and no
    /// monitors.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
            monitors: Vec::new(),
            statistics: AllocatorStatistics::new(),
        }
    }

    /// Sets the party-size limit above which requests are rejected.
    #[inline]
    pub fn with_max_party_size(mut self, limit: usize) -> Self {
        self.max_party_size = limit;
        self
    }

    /// Registers a monitor that will observe every allocation outcome.
    #[inline]
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: AllocationMonitor + 'static,
    {
        self.monitors.push(Box::new(monitor));
        self
    }

    /// Returns the configured party-size limit.
    #[inline]
    pub fn max_party_size(&self) -> usize {
        self.max_party_size
    }

    /// Returns the statistics accumulated so far.
    #[inline]
    pub fn statistics(&self) -> &AllocatorStatistics {
        &self.statistics
    }

    /// Serves one reservation request for `party_size` contiguous seats.
    ///
    /// On success the winning block is consumed entirely (exact fit) or
    /// carved from the front and re-ranked (partial fit). Rejected
    /// requests leave the map untouched.
    pub fn allocate(&mut self, map: &mut SeatMap, party_size: usize) -> AllocationResult {
        self.statistics.requests += 1;

        if party_size > self.max_party_size {
            self.statistics.rejected_party_size += 1;
            self.notify_rejected(&Rejection::PartySizeExceeded {
                requested: party_size,
                limit: self.max_party_size,
            });
            return AllocationResult::PartySizeExceeded {
                requested: party_size,
                limit: self.max_party_size,
            };
        }

        // A zero-size party must short-circuit: the capacity scan below
        // would otherwise hand back the first block untouched.
        if party_size == 0 {
            let allocation = Allocation::new(Vec::new());
            self.notify_allocated(&allocation);
            return AllocationResult::Allocated(allocation);
        }

        let Some(position) = map
            .blocks()
            .iter()
            .position(|block| block.len() >= party_size)
        else {
            self.statistics.rejected_not_available += 1;
            self.notify_rejected(&Rejection::NotAvailable {
                requested: party_size,
            });
            return AllocationResult::NotAvailable;
        };

        let mut block = map.remove(BlockIndex::new(position));
        let seats = block.take_front(party_size);
        if !block.is_empty() {
            map.insert(block);
        }

        self.statistics.seats_allocated += seats.len() as u64;
        let allocation = Allocation::new(seats);
        self.notify_allocated(&allocation);
        AllocationResult::Allocated(allocation)
    }

    #[inline]
    fn notify_allocated(&mut self, allocation: &Allocation) {
        for monitor in &mut self.monitors {
            monitor.on_allocated(allocation);
        }
    }

    #[inline]
    fn notify_rejected(&mut self, rejection: &Rejection) {
        for monitor in &mut self.monitors {
            monitor.on_rejected(rejection);
        }
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Allocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Allocator")
            .field("max_party_size", &self.max_party_size)
            .field("num_monitors", &self.monitors.len())
            .field("statistics", &self.statistics)
            .finish()
    }
}
