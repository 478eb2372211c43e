pub use traits::ChunkRead;

mod log;
mod traits;

mod error;
pub use error::Error;

mod universe;
pub use universe::{Universe, UniverseId};

mod vector;
pub use vector::Vector;

mod cursor;
pub use cursor::Cursor;

pub mod combinators;
use combinators::{BinChunkOp, CombinedChunks};

pub mod iterators;
use iterators::{ChunkIter, IndexIter};


/////////////////////////////////////////////
pub type Chunk = usize; // stores up to usize::BITS Indexes
pub type Index = usize; // BIT index

#[derive(Debug, Copy, Clone)]
struct ChunkBitAddr {
    idx_of_chunk: usize, // CHUNK index not BIT index
    idx_in_chunk: u32,   // invariant: in 0..usize::BITs
}
///////////////////////////////////////////////////////////////////////

/// Number of chunks needed to hold `index_count` contiguous indexes.
pub const fn index_count_to_chunk_count(index_count: usize) -> usize {
    index_count.div_ceil(usize::BITS as usize)
}

impl ChunkBitAddr {
    fn from_bit_idx(bit_idx: usize) -> Self {
        Self {
            idx_of_chunk: bit_idx / usize::BITS as usize,
            idx_in_chunk: (bit_idx % usize::BITS as usize) as u32,
        }
    }
    const fn chunk_mask(&self) -> usize {
        1 << self.idx_in_chunk
    }
    fn to_bit_idx(self) -> usize {
        self.idx_of_chunk * usize::BITS as usize + self.idx_in_chunk as usize
    }
}
