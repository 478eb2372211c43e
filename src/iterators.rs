use super::*;

#[derive(Debug, Copy, Clone)]
pub struct ChunkIter<A: ChunkRead> {
    a: A,
    idx_of_next_chunk: usize,
}

/// Yields the set indexes of a [`ChunkRead`] in ascending order.
#[derive(Debug, Copy, Clone)]
pub struct IndexIter<A: ChunkRead> {
    pub(crate) wi: ChunkIter<A>,
    pub(crate) cached: usize,
}

/// Yields the universe elements of a [`Vector`]'s members in ascending index order.
#[derive(Debug, Clone)]
pub struct Members<'v, 'u, T, const N: usize> {
    pub(crate) universe: &'u Universe<T, N>,
    pub(crate) indexes: IndexIter<&'v Vector<'u, T, N>>,
}

impl<A: ChunkRead> ChunkIter<A> {
    pub fn new(a: A) -> Self {
        Self { a, idx_of_next_chunk: 0 }
    }
}

impl<A: ChunkRead> Iterator for ChunkIter<A> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        let next = self.a.get_chunk(self.idx_of_next_chunk)?;
        self.idx_of_next_chunk += 1;
        Some(next)
    }
}

impl<A: ChunkRead> IndexIter<A> {
    pub fn new(a: A) -> Self {
        Self { wi: ChunkIter::new(a), cached: 0 }
    }
}
impl<A: ChunkRead> Iterator for IndexIter<A> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        while self.cached == 0 {
            self.cached = self.wi.next()?;
        }
        // self.cached is NONZERO
        let idx_in_chunk = self.cached.trailing_zeros();
        self.cached &= self.cached - 1; // clears the lowest set bit
        let cba = ChunkBitAddr { idx_in_chunk, idx_of_chunk: self.wi.idx_of_next_chunk - 1 };
        Some(cba.to_bit_idx())
    }
}

impl<'u, T, const N: usize> Iterator for Members<'_, 'u, T, N> {
    type Item = &'u T;
    fn next(&mut self) -> Option<&'u T> {
        let universe: &'u Universe<T, N> = self.universe;
        self.indexes.by_ref().find_map(|index| universe.element_at(index).ok())
    }
}
