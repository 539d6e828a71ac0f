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

/// Statistics accumulated across an allocator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocatorStatistics {
    /// Number of reservation requests served, including rejected ones.
    pub requests: u64,
    /// Total number of seats handed out.
    pub seats_allocated: u64,
    /// Number of requests rejected by the party-size policy.
    pub rejected_party_size: u64,
    /// Number of requests for which no block was large enough.
    pub rejected_not_available: u64,
}

impl AllocatorStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of requests that handed out seats.
    #[inline]
    pub fn successful_requests(&self) -> u64 {
        self.requests - self.rejected_party_size - self.rejected_not_available
    }
}

impl std::fmt::Display for AllocatorStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Allocator Statistics:")?;
        writeln!(f, "  Requests Served: {}", self.requests)?;
        writeln!(f, "  Seats Allocated: {}", self.seats_allocated)?;
        writeln!(f, "  Rejected (Party Size): {}", self.rejected_party_size)?;
        writeln!(
            f,
            "  Rejected (Not Available): {}",
            self.rejected_not_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = AllocatorStatistics::new();
        assert_eq!(stats.requests, 0);
        assert_eq!(stats.seats_allocated, 0);
        assert_eq!(stats.successful_requests(), 0);
    }

    #[test]
    fn test_successful_requests() {
        let stats = AllocatorStatistics {
            requests: 10,
            seats_allocated: 17,
            rejected_party_size: 2,
            rejected_not_available: 3,
        };
        assert_eq!(stats.successful_requests(), 5);
    }

    #[test]
    fn test_display_formatting() {
        let stats = AllocatorStatistics {
            requests: 4,
            seats_allocated: 6,
            rejected_party_size: 1,
            rejected_not_available: 0,
        };

        let mut expected = String::new();
        expected.push_str("Allocator Statistics:\n");
        expected.push_str("  Requests Served: 4\n");
        expected.push_str("  Seats Allocated: 6\n");
        expected.push_str("  Rejected (Party Size): 1\n");
        expected.push_str("  Rejected (Not Available): 0\n");

        assert_eq!(format!("{}", stats), expected);
    }
}
