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

use crate::allocation::Allocation;

/// The outcome of one reservation request.
///
/// Rejections are recoverable by construction: the seat map is left
/// untouched and the caller may retry with a different party size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationResult {
    /// Seats were handed out (possibly zero, for a zero-size request).
    Allocated(Allocation),
    /// No remaining block can seat the requested party together.
    NotAvailable,
    /// The requested party size exceeds the allocator's policy limit.
    PartySizeExceeded {
        /// The requested party size.
        requested: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl AllocationResult {
    /// Checks whether seats were handed out.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        matches!(self, Self::Allocated(_))
    }

    /// Checks whether the request failed for lack of a large enough block.
    #[inline]
    pub fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable)
    }

    /// Checks whether the request was rejected by the party-size policy.
    #[inline]
    pub fn is_party_size_exceeded(&self) -> bool {
        matches!(self, Self::PartySizeExceeded { .. })
    }

    /// Returns the allocation, if seats were handed out.
    #[inline]
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            _ => None,
        }
    }
}

impl std::fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocated(allocation) => write!(f, "Allocated({})", allocation),
            Self::NotAvailable => write!(f, "Not available"),
            Self::PartySizeExceeded { requested, limit } => write!(
                f,
                "Party size {} exceeds the maximum of {}",
                requested, limit
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let allocated = AllocationResult::Allocated(Allocation::new(Vec::new()));
        assert!(allocated.is_allocated());
        assert!(allocated.allocation().is_some());

        let unavailable = AllocationResult::NotAvailable;
        assert!(unavailable.is_not_available());
        assert!(unavailable.allocation().is_none());

        let rejected = AllocationResult::PartySizeExceeded {
            requested: 12,
            limit: 10,
        };
        assert!(rejected.is_party_size_exceeded());
        assert!(!rejected.is_allocated());
    }

    #[test]
    fn test_display() {
        assert_eq!(AllocationResult::NotAvailable.to_string(), "Not available");
        assert_eq!(
            AllocationResult::PartySizeExceeded {
                requested: 12,
                limit: 10
            }
            .to_string(),
            "Party size 12 exceeds the maximum of 10"
        );
        assert_eq!(
            AllocationResult::Allocated(Allocation::new(Vec::new())).to_string(),
            "Allocated((no seats))"
        );
    }
}
