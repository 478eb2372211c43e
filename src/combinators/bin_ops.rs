use crate::{BinChunkOp, Chunk};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Or;
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Xor;
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct And;
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Diff;

//////////

#[inline]
fn z(chunk: Option<Chunk>) -> Chunk {
    chunk.unwrap_or(0)
}

/// union
impl BinChunkOp for Or {
    fn combine_chunks(self, a: Option<Chunk>, b: Option<Chunk>) -> Option<Chunk> {
        if a.is_none() && b.is_none() {
            None
        } else {
            Some(z(a) | z(b))
        }
    }
}
/// symmetric difference
impl BinChunkOp for Xor {
    fn combine_chunks(self, a: Option<Chunk>, b: Option<Chunk>) -> Option<Chunk> {
        if a.is_none() && b.is_none() {
            None
        } else {
            Some(z(a) ^ z(b))
        }
    }
}
/// intersection
impl BinChunkOp for And {
    fn combine_chunks(self, a: Option<Chunk>, b: Option<Chunk>) -> Option<Chunk> {
        if let [Some(a), Some(b)] = [a, b] {
            Some(a & b)
        } else {
            None
        }
    }
}
/// difference: in the first but not in the second
impl BinChunkOp for Diff {
    fn combine_chunks(self, a: Option<Chunk>, b: Option<Chunk>) -> Option<Chunk> {
        a.map(|a| a & !z(b))
    }
}
