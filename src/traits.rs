use super::*;

use crate::combinators::bin_ops::*;

/// Read-only access to a bitset stored as a sequence of contiguous chunks.
/// `get_chunk` returns `None` past the last chunk; all further chunks are then treated as zero.
pub trait ChunkRead {
    fn get_chunk(&self, idx_of_chunk: usize) -> Option<Chunk>;
    ///////
    fn is_empty(&self) -> bool {
        self.iter_chunks().all(|chunk| chunk == 0)
    }
    fn iter_indexes(&self) -> IndexIter<&Self> {
        IndexIter::new(self)
    }
    fn iter_chunks(&self) -> ChunkIter<&Self> {
        ChunkIter::new(self)
    }
    fn count_indexes(&self) -> usize {
        self.iter_chunks().map(|chunk: Chunk| chunk.count_ones() as usize).sum()
    }
    fn contains_index(&self, bit_idx: Index) -> bool {
        let cba = ChunkBitAddr::from_bit_idx(bit_idx);
        match self.get_chunk(cba.idx_of_chunk) {
            None => false,
            Some(chunk) => chunk & cba.chunk_mask() != 0,
        }
    }
    /// Smallest set index `>= from`, if any.
    fn next_index_from(&self, from: Index) -> Option<Index> {
        let cba = ChunkBitAddr::from_bit_idx(from);
        // mask off everything below `from` in its own chunk
        let mut chunk = self.get_chunk(cba.idx_of_chunk)? & (Chunk::MAX << cba.idx_in_chunk);
        let mut idx_of_chunk = cba.idx_of_chunk;
        while chunk == 0 {
            idx_of_chunk += 1;
            chunk = self.get_chunk(idx_of_chunk)?;
        }
        let cba = ChunkBitAddr { idx_of_chunk, idx_in_chunk: chunk.trailing_zeros() };
        Some(cba.to_bit_idx())
    }
    fn combine_chunks<'a, B: ChunkRead + ?Sized, O: BinChunkOp>(
        &'a self,
        b: &'a B,
        op: O,
    ) -> CombinedChunks<'a, Self, B, O> {
        op.combine_readers(self, b)
    }
    fn or<'a, B: ChunkRead + ?Sized>(&'a self, b: &'a B) -> CombinedChunks<'a, Self, B, Or> {
        self.combine_chunks(b, Or)
    }
    fn xor<'a, B: ChunkRead + ?Sized>(&'a self, b: &'a B) -> CombinedChunks<'a, Self, B, Xor> {
        self.combine_chunks(b, Xor)
    }
    fn and<'a, B: ChunkRead + ?Sized>(&'a self, b: &'a B) -> CombinedChunks<'a, Self, B, And> {
        self.combine_chunks(b, And)
    }
    fn diff<'a, B: ChunkRead + ?Sized>(&'a self, b: &'a B) -> CombinedChunks<'a, Self, B, Diff> {
        self.combine_chunks(b, Diff)
    }
}

impl<A: ChunkRead + ?Sized> ChunkRead for &A {
    fn get_chunk(&self, idx_of_chunk: usize) -> Option<Chunk> {
        A::get_chunk(*self, idx_of_chunk)
    }
}

impl ChunkRead for [Chunk] {
    fn get_chunk(&self, idx_of_chunk: usize) -> Option<Chunk> {
        self.get(idx_of_chunk).copied()
    }
}
