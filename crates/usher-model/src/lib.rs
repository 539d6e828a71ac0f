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

//! # Usher Model
//!
//! **The Core Domain Model for the Usher Seat Allocation Engine.**
//!
//! This crate defines the fundamental data structures used to represent a
//! rectangular seating venue and its availability. It serves as the data
//! interchange layer between venue definition (user input) and the
//! allocation engine (`usher_alloc`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **allocation**:
//!
//! * **`index`**: Strongly-typed wrappers (`BlockIndex`) to prevent logical indexing errors.
//! * **`label`**: The `R{row}C{column}` wire format shared with reservation lists and display layers.
//! * **`venue`**: The immutable venue geometry, including the distance metric to the best seats.
//! * **`seat`** and **`block`**: Individual seats and the contiguous runs they form.
//! * **`map`**: The `SeatMap`, a collection of blocks ranked by closeness to the best seat.
//! * **`builder`**: The `SeatMapBuilder`, which removes reserved seats and derives the ranked map.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: The venue validates its dimensions eagerly; the allocator never
//!     encounters an invalid geometry.
//! 2.  **Lenient Input**: Reserved-seat lists come from external callers; labels that do
//!     not name a real seat are skipped and surfaced, never fatal.
//! 3.  **Sorted by Construction**: Blocks keep their seats ordered best-first, and maps
//!     keep their blocks ordered best-first, so allocation is a linear scan.

pub mod block;
pub mod builder;
pub mod index;
pub mod label;
pub mod map;
pub mod seat;
pub mod venue;
