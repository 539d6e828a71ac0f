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

use crate::{block::Block, index::BlockIndex};

/// The ranked collection of available seat blocks.
///
/// Blocks are kept sorted ascending by their distance, so a linear scan
/// visits candidates best-first. The allocator owns and mutates a map in
/// place: removing a block, carving seats off it, and re-inserting the
/// remainder all preserve the sort invariant.
///
/// # Invariants
/// Every held block is non-empty; block distances are non-decreasing from
/// front to back. Ties may appear in any stable relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeatMap {
    blocks: Vec<Block>,
}

impl SeatMap {
    /// Builds a map from candidate blocks, dropping empty candidates and
    /// ranking the rest ascending by distance.
    ///
    /// The sort is stable, so candidates with equal distances keep their
    /// construction order (front rows first, left runs first).
    pub(crate) fn from_blocks(mut blocks: Vec<Block>) -> Self {
        blocks.retain(|block| !block.is_empty());
        blocks.sort_by_key(Block::distance);

        Self { blocks }
    }

    /// Returns the number of blocks in the map.
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Checks whether the map has no blocks left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the blocks of this map, ranked ascending by distance.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the block at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn block(&self, index: BlockIndex) -> &Block {
        debug_assert!(
            index.get() < self.blocks.len(),
            "called `SeatMap::block` with block index out of bounds: the len is {} but the index is {}",
            self.blocks.len(),
            index.get()
        );

        &self.blocks[index.get()]
    }

    /// Returns the total number of seats remaining across all blocks.
    #[inline]
    pub fn remaining_seats(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Removes and returns the block at the given position. The remaining
    /// blocks keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn remove(&mut self, index: BlockIndex) -> Block {
        debug_assert!(
            index.get() < self.blocks.len(),
            "called `SeatMap::remove` with block index out of bounds: the len is {} but the index is {}",
            self.blocks.len(),
            index.get()
        );

        self.blocks.remove(index.get())
    }

    /// Inserts a block at its distance rank, after any blocks of equal
    /// distance.
    ///
    /// # Panics
    ///
    /// Panics if `block` is empty; maps never hold empty blocks.
    #[inline]
    pub fn insert(&mut self, block: Block) {
        assert!(
            !block.is_empty(),
            "called `SeatMap::insert` with an empty block"
        );

        let at = self
            .blocks
            .partition_point(|held| held.distance() <= block.distance());
        self.blocks.insert(at, block);
    }
}

impl std::fmt::Display for SeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seat Map Summary")?;
        writeln!(f, "   Remaining Seats: {}", self.remaining_seats())?;
        writeln!(f)?;

        if self.blocks.is_empty() {
            writeln!(f, "   (No blocks available)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<10} | {:<10} | {:<10} | {:<10}",
            "Block", "Row", "Seats", "Distance"
        )?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<10}-+-{:-<10}", "", "", "", "")?;
        for (i, block) in self.blocks.iter().enumerate() {
            writeln!(
                f,
                "   {:<10} | {:<10} | {:<10} | {:<10}",
                i,
                block.row(),
                block.len(),
                block.distance()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::SeatMapBuilder, venue::Venue};

    fn map_for(rows: u32, columns: u32, reserved: &[&str]) -> SeatMap {
        let venue = Venue::new(rows, columns).expect("test venue dimensions are valid");
        let mut builder = SeatMapBuilder::new(venue);
        builder.reserve_all(reserved);
        builder.build()
    }

    fn assert_ranked(map: &SeatMap) {
        assert!(
            map.blocks()
                .windows(2)
                .all(|pair| pair[0].distance() <= pair[1].distance()),
            "seat map is not ranked ascending by distance"
        );
    }

    #[test]
    fn test_counts_and_ranking() {
        let map = map_for(3, 5, &[]);
        assert_eq!(map.num_blocks(), 3);
        assert_eq!(map.remaining_seats(), 15);
        assert_ranked(&map);
    }

    #[test]
    fn test_block_accessor() {
        let map = map_for(2, 3, &[]);
        // The front row ranks ahead of the second row.
        assert_eq!(map.block(BlockIndex::new(0)).row(), 1);
        assert_eq!(map.block(BlockIndex::new(1)).row(), 2);
    }

    #[test]
    fn test_remove_and_insert_keep_ranking() {
        let mut map = map_for(4, 4, &[]);
        let block = map.remove(BlockIndex::new(2));
        assert_eq!(map.num_blocks(), 3);
        assert_ranked(&map);

        map.insert(block);
        assert_eq!(map.num_blocks(), 4);
        assert_ranked(&map);
    }

    #[test]
    fn test_insert_places_ties_last() {
        let mut map = map_for(1, 7, &["R1C4"]);
        // Two blocks, both distance 1: columns 1..=3 and 5..=7.
        assert_eq!(map.num_blocks(), 2);
        let left_best_column = map.block(BlockIndex::new(0)).seats()[0].column();
        assert_eq!(left_best_column, 3);

        let moved = map.remove(BlockIndex::new(0));
        map.insert(moved);
        assert_ranked(&map);
        // The re-inserted block lands after its equal-distance peer.
        assert_eq!(map.block(BlockIndex::new(0)).seats()[0].column(), 5);
        assert_eq!(map.block(BlockIndex::new(1)).seats()[0].column(), 3);
    }

    #[test]
    fn test_display_lists_blocks() {
        let map = map_for(1, 3, &[]);
        let rendered = format!("{}", map);
        assert!(rendered.contains("Remaining Seats: 3"));
        assert!(rendered.contains("Block"));
        assert!(rendered.contains("Distance"));
    }

    #[test]
    fn test_display_empty_map() {
        let map = map_for(1, 1, &["R1C1"]);
        assert!(map.is_empty());
        assert!(format!("{}", map).contains("(No blocks available)"));
    }
}
