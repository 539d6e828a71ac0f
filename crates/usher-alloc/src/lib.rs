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

//! # Usher Alloc
//!
//! **The Allocation Engine for the Usher Seating Ecosystem.**
//!
//! Given a ranked `SeatMap` from `usher_model`, this crate answers
//! reservation requests: find the best-ranked block with enough capacity,
//! carve the requested seats off its front, and keep the map's ranking
//! intact for the next request.
//!
//! ## Modules
//!
//! - `allocator`: The `Allocator` performing the greedy best-block scan,
//!   with its party-size policy.
//! - `allocation` and `result`: Structured outcome values, from the seats
//!   handed out down to the single-label or range-label report.
//! - `monitor`: The observer seam through which presentation layers learn
//!   about outcomes, including a console table renderer.
//! - `stats`: Counters accumulated across the allocator's lifetime.
//!
//! The allocator mutates its map in place and therefore requires exclusive
//! access; callers that share a venue across threads must serialize their
//! requests around `&mut` access to its map.

pub mod allocation;
pub mod allocator;
pub mod monitor;
pub mod result;
pub mod stats;
