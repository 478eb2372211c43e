use crate::log::debug;
use crate::{Error, Index, Vector};
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_UNIVERSE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one [`Universe`] instance. Two universes never share an id, not even clones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniverseId(u64);

/// A closed, ordered collection of exactly `N` elements, indexed `0..N`.
///
/// Elements cannot be changed once the universe exists, so the meaning of every
/// [`Vector`] spawned from it stays fixed. Vectors borrow their universe, which
/// therefore outlives all of them.
#[derive(Debug)]
pub struct Universe<T, const N: usize> {
    elements: [T; N],
    id: UniverseId,
}

impl UniverseId {
    fn fresh() -> Self {
        Self(NEXT_UNIVERSE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl<T, const N: usize> Universe<T, N> {
    pub const SIZE: usize = N;

    pub fn new(elements: [T; N]) -> Self {
        let id = UniverseId::fresh();
        debug!("Created universe {id:?} of size {N}");
        Self { elements, id }
    }
    pub const fn size(&self) -> usize {
        N
    }
    pub fn id(&self) -> UniverseId {
        self.id
    }
    pub fn elements(&self) -> &[T; N] {
        &self.elements
    }
    /// Returns the element at `index`, or [`Error::IndexOutOfBounds`] if `index >= N`.
    pub fn element_at(&self, index: Index) -> Result<&T, Error> {
        self.elements.get(index).ok_or(Error::IndexOutOfBounds { index, size: N })
    }
    /// Returns an empty vector over this universe.
    pub fn new_vector(&self) -> Vector<'_, T, N> {
        Vector::new(self)
    }
}

impl<T: Default, const N: usize> Default for Universe<T, N> {
    fn default() -> Self {
        Self::new(core::array::from_fn(|_| T::default()))
    }
}

/// A clone is a distinct universe: vectors of the original and the clone cannot be combined.
impl<T: Clone, const N: usize> Clone for Universe<T, N> {
    fn clone(&self) -> Self {
        Self::new(self.elements.clone())
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for Universe<T, N> {
    type Error = Error;
    fn try_from(elements: Vec<T>) -> Result<Self, Error> {
        let got = elements.len();
        let elements = <[T; N]>::try_from(elements)
            .map_err(|_| Error::InvalidArgument { expected: N, got })?;
        Ok(Self::new(elements))
    }
}

impl<T, const N: usize> From<[T; N]> for Universe<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

/// # Panics
/// If `index >= N`. Use [`Universe::element_at`] for a fallible lookup.
impl<T, const N: usize> core::ops::Index<Index> for Universe<T, N> {
    type Output = T;
    fn index(&self, index: Index) -> &T {
        match self.element_at(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}
