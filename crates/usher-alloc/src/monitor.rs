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

//! The observer seam between the allocator and presentation layers.
//!
//! The allocator itself never prints; every outcome is forwarded to the
//! registered monitors, and rendering lives entirely in monitor
//! implementations such as `LogAllocationMonitor`.

use crate::allocation::Allocation;

/// A rejected reservation request, with the context a presenter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The requested party size exceeds the allocator's policy limit.
    PartySizeExceeded {
        /// The requested party size.
        requested: usize,
        /// The configured maximum.
        limit: usize,
    },
    /// No remaining block can seat the requested party together.
    NotAvailable {
        /// The requested party size.
        requested: usize,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartySizeExceeded { requested, limit } => write!(
                f,
                "Party size {} exceeds the maximum of {}",
                requested, limit
            ),
            Self::NotAvailable { requested } => {
                write!(f, "No block of {} contiguous seats available", requested)
            }
        }
    }
}

/// An observer of allocation outcomes.
///
/// Monitors are registered on an `Allocator` and receive every outcome,
/// successful or not, in request order.
pub trait AllocationMonitor {
    fn name(&self) -> &str;
    fn on_allocated(&mut self, allocation: &Allocation);
    fn on_rejected(&mut self, rejection: &Rejection);
}

impl std::fmt::Debug for dyn AllocationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn AllocationMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationMonitor({})", self.name())
    }
}

/// A monitor rendering every outcome as a console table row.
///
/// This is the presentation collaborator for interactive front ends: the
/// allocator stays silent and this monitor owns the output format.
#[derive(Debug, Clone, Default)]
pub struct LogAllocationMonitor {
    header_printed: bool,
}

impl LogAllocationMonitor {
    pub fn new() -> Self {
        Self {
            header_printed: false,
        }
    }

    #[inline]
    fn print_header_once(&mut self) {
        if self.header_printed {
            return;
        }

        println!(
            "{:<10} | {:<6} | {:<30}",
            "Outcome", "Seats", "Detail"
        );
        println!("{}", "-".repeat(52));
        self.header_printed = true;
    }
}

impl AllocationMonitor for LogAllocationMonitor {
    fn name(&self) -> &str {
        "LogAllocationMonitor"
    }

    fn on_allocated(&mut self, allocation: &Allocation) {
        self.print_header_once();
        println!(
            "{:<10} | {:<6} | {:<30}",
            "allocated",
            allocation.len(),
            allocation.label()
        );
    }

    fn on_rejected(&mut self, rejection: &Rejection) {
        self.print_header_once();
        println!("{:<10} | {:<6} | {:<30}", "rejected", 0, rejection);
    }
}
