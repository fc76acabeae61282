// Read-only opening book keyed directly by the engine's own Zobrist hash
// (not a separately-computed book-specific hash). Entries are grouped by
// ply behind a small header so lookup only has to scan the slice for the
// current ply rather than the whole table.

use crate::board::Board;
use crate::book::entry::BookEntry;
use crate::moves::packed::PackedMove;
use rand::Rng;

/// Packed move value that can never occur for a real move (piece id 0,
/// from == to == a1) and signals a book miss.
pub const BOOK_MISS: PackedMove = 0;

pub struct OpeningBook {
    /// `ply_offsets[p]` is the index into `entries` where ply `p`'s slice
    /// starts; `ply_offsets[p + 1]` (or `entries.len()`) is where it ends.
    ply_offsets: Vec<u32>,
    entries: Vec<BookEntry>,
}

impl OpeningBook {
    pub fn new(ply_offsets: Vec<u32>, entries: Vec<BookEntry>) -> Self {
        OpeningBook {
            ply_offsets,
            entries,
        }
    }

    pub fn empty() -> Self {
        OpeningBook {
            ply_offsets: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ply_slice(&self, ply: usize) -> &[BookEntry] {
        let Some(&start) = self.ply_offsets.get(ply) else {
            return &[];
        };
        let end = self
            .ply_offsets
            .get(ply + 1)
            .copied()
            .unwrap_or(self.entries.len() as u32);
        &self.entries[start as usize..end as usize]
    }

    /// Looks up `board` at the given ply, linearly scanning that ply's
    /// entries and comparing both 32-bit hash halves. On a match, selects
    /// uniformly at random among the candidates sharing the hash. Past the
    /// book horizon or on a miss, returns `BOOK_MISS`.
    pub fn probe(&self, board: &Board, ply: usize) -> PackedMove {
        let slice = self.ply_slice(ply);
        if slice.is_empty() {
            return BOOK_MISS;
        }

        let hash = board.zobrist;
        let mut candidates: Vec<PackedMove> = Vec::new();
        for entry in slice {
            if entry.matches(hash) {
                candidates.push(entry.mv);
            }
        }

        match candidates.len() {
            0 => BOOK_MISS,
            1 => candidates[0],
            n => {
                let mut rng = rand::rng();
                candidates[rng.random_range(0..n)]
            }
        }
    }
}
