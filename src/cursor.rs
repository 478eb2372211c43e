use crate::log::warn;
use crate::{ChunkRead, Error, Index, Vector};

/// Read-only position over the members of a [`Vector`], moving in ascending index order.
///
/// A cursor is either _positioned_ at a member (`index < N`) or _terminal_ (`index == N`).
/// It never mutates its vector.
pub struct Cursor<'v, 'u, T, const N: usize> {
    vector: &'v Vector<'u, T, N>,
    // invariant: index == N or vector.is_member(index)
    index: Index,
}

impl<'v, 'u, T, const N: usize> Cursor<'v, 'u, T, N> {
    pub(crate) fn new(vector: &'v Vector<'u, T, N>, index: Index) -> Self {
        Self { vector, index }
    }
    pub fn vector(&self) -> &'v Vector<'u, T, N> {
        self.vector
    }
    /// The current position. Equals `N` when terminal.
    pub fn index(&self) -> Index {
        self.index
    }
    pub fn is_positioned(&self) -> bool {
        self.index != N
    }
    pub fn is_terminal(&self) -> bool {
        self.index == N
    }
    /// The universe element under the cursor.
    pub fn element(&self) -> Result<&'u T, Error> {
        if self.is_terminal() {
            warn!("Dereferenced a terminal cursor");
            return Err(Error::TerminalCursor);
        }
        self.vector.universe().element_at(self.index)
    }
    /// Moves to the next member, or to the terminal position if there is none.
    pub fn advance(&mut self) -> Result<(), Error> {
        if self.is_terminal() {
            warn!("Advanced a terminal cursor");
            return Err(Error::TerminalCursor);
        }
        self.index = self.vector.first_member_from(self.index + 1);
        Ok(())
    }
    /// Like [`Cursor::advance`], but returns the cursor as it was before moving.
    pub fn post_advance(&mut self) -> Result<Self, Error> {
        let before = *self;
        self.advance()?;
        Ok(before)
    }
}

impl<T, const N: usize> Clone for Cursor<'_, '_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, '_, T, N> {}

/// Cursors are equal when their vectors hold the same members and they sit at the same index.
/// The vectors themselves may be distinct.
impl<T, const N: usize> PartialEq for Cursor<'_, '_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.vector.iter_chunks().eq(other.vector.iter_chunks())
    }
}
impl<T, const N: usize> Eq for Cursor<'_, '_, T, N> {}

impl<T, const N: usize> core::fmt::Debug for Cursor<'_, '_, T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_terminal() {
            write!(f, "Cursor(end)")
        } else {
            write!(f, "Cursor({})", self.index)
        }
    }
}
