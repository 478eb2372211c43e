use crate::combinators::bin_ops::{And, Diff, Or, Xor};
use crate::iterators::Members;
use crate::log::{debug, trace, warn};
use crate::{index_count_to_chunk_count, BinChunkOp, ChunkBitAddr};
use crate::{Chunk, ChunkRead, Cursor, Error, Index, IndexIter, Universe};
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

/// A subset of a [`Universe`], stored as one bit per universe index packed into Chunks.
///
/// Bits at positions `>= N` are always zero.
pub struct Vector<'u, T, const N: usize> {
    universe: &'u Universe<T, N>,
    // invariant: exactly index_count_to_chunk_count(N) chunks
    chunks: Box<[Chunk]>,
}

impl<'u, T, const N: usize> Vector<'u, T, N> {
    pub(crate) fn new(universe: &'u Universe<T, N>) -> Self {
        debug!("Created empty vector over universe {:?}", universe.id());
        Self { universe, chunks: vec![0; index_count_to_chunk_count(N)].into_boxed_slice() }
    }
    pub fn universe(&self) -> &'u Universe<T, N> {
        self.universe
    }
    /// True iff both vectors were spawned from the very same universe instance.
    pub fn same_universe(&self, other: &Self) -> bool {
        self.universe.id() == other.universe.id()
    }

    /// Adds `index` to the set. Returns its position and whether it was absent before,
    /// or [`Error::IndexOutOfBounds`] if `index >= N`.
    pub fn insert(&mut self, index: Index) -> Result<(Index, bool), Error> {
        if index >= N {
            warn!("Refusing to insert index {index} into a vector of size {N}");
            return Err(Error::IndexOutOfBounds { index, size: N });
        }
        let cba = ChunkBitAddr::from_bit_idx(index);
        let chunk = &mut self.chunks[cba.idx_of_chunk];
        let was_unset = *chunk & cba.chunk_mask() == 0;
        *chunk |= cba.chunk_mask();
        trace!("Inserted index {index} (changed: {was_unset})");
        Ok((index, was_unset))
    }
    /// Removes `index` from the set. Returns whether it was present before i.e. the set has changed.
    /// Out-of-range indexes are never present.
    pub fn remove(&mut self, index: Index) -> bool {
        if index >= N {
            return false;
        }
        let cba = ChunkBitAddr::from_bit_idx(index);
        let chunk = &mut self.chunks[cba.idx_of_chunk];
        let was_set = *chunk & cba.chunk_mask() != 0;
        *chunk &= !cba.chunk_mask();
        trace!("Removed index {index} (changed: {was_set})");
        was_set
    }
    pub fn is_member(&self, index: Index) -> bool {
        index < N && self.contains_index(index)
    }
    pub fn count(&self) -> usize {
        self.count_indexes()
    }
    pub fn is_empty(&self) -> bool {
        ChunkRead::is_empty(self)
    }
    /// Leaves the universe unchanged. Afterwards, contains no indexes
    pub fn clear(&mut self) {
        for chunk in self.chunks.iter_mut() {
            *chunk = 0;
        }
    }

    /// Cursor at the lowest member, or terminal if the set is empty.
    pub fn begin(&self) -> Cursor<'_, 'u, T, N> {
        Cursor::new(self, self.first_member_from(0))
    }
    /// The terminal cursor.
    pub fn end(&self) -> Cursor<'_, 'u, T, N> {
        Cursor::new(self, N)
    }
    /// Cursor at `index` if it is a member, otherwise terminal.
    pub fn elem_iterator(&self, index: Index) -> Cursor<'_, 'u, T, N> {
        let index = if self.is_member(index) { index } else { N };
        Cursor::new(self, index)
    }
    /// Smallest member `>= from`, or `N` if there is none.
    pub(crate) fn first_member_from(&self, from: Index) -> Index {
        if from >= N {
            return N;
        }
        self.next_index_from(from).unwrap_or(N)
    }

    pub fn iter(&self) -> Members<'_, 'u, T, N> {
        Members { universe: self.universe, indexes: IndexIter::new(self) }
    }

    /// Members of `self` or `other`.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        self.combined(Or, other)
    }
    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Result<Self, Error> {
        self.combined(Diff, other)
    }
    /// Members of both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Result<Self, Error> {
        self.combined(And, other)
    }
    /// Members of exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self, Error> {
        self.combined(Xor, other)
    }
    /// New vector over `self`'s universe holding `op` applied chunk-wise. Neither operand changes.
    fn combined<O: BinChunkOp + Debug>(&self, op: O, other: &Self) -> Result<Self, Error> {
        if !self.same_universe(other) {
            warn!(
                "Cannot apply {op:?} to vectors of universes {:?} and {:?}",
                self.universe.id(),
                other.universe.id()
            );
            return Err(Error::MismatchedUniverse);
        }
        let combined = op.combine_readers(self, other);
        let chunks = (0..self.chunks.len()).map(|i| combined.get_chunk(i).unwrap_or(0)).collect();
        debug!("Applied {op:?} over universe {:?}", self.universe.id());
        Ok(Self { universe: self.universe, chunks })
    }
}

impl<T, const N: usize> ChunkRead for Vector<'_, T, N> {
    fn get_chunk(&self, idx_of_chunk: usize) -> Option<Chunk> {
        self.chunks.get(idx_of_chunk).copied()
    }
}

/// Copies the membership bits; the copy shares the universe.
impl<T, const N: usize> Clone for Vector<'_, T, N> {
    fn clone(&self) -> Self {
        Self { universe: self.universe, chunks: self.chunks.clone() }
    }
}

/// Equal iff the universes hold equal elements and the memberships match.
impl<T: PartialEq, const N: usize> PartialEq for Vector<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        (self.same_universe(other) || self.universe.elements() == other.universe.elements())
            && self.chunks == other.chunks
    }
}
impl<T: Eq, const N: usize> Eq for Vector<'_, T, N> {}

impl<T: Debug, const N: usize> Debug for Vector<'_, T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'v, 'u, T, const N: usize> IntoIterator for &'v Vector<'u, T, N> {
    type Item = &'u T;
    type IntoIter = Members<'v, 'u, T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Operator sugar in the manner of std's set types. These panic where the methods return Err.
macro_rules! impl_set_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl<'u, T, const N: usize> $trait<&Vector<'u, T, N>> for &Vector<'u, T, N> {
            type Output = Vector<'u, T, N>;
            /// # Panics
            /// If the vectors belong to different universes.
            fn $fn(self, rhs: &Vector<'u, T, N>) -> Vector<'u, T, N> {
                match self.$method(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}
impl_set_op!(BitOr, bitor, union);
impl_set_op!(Sub, sub, difference);
impl_set_op!(BitAnd, bitand, intersection);
impl_set_op!(BitXor, bitxor, symmetric_difference);
