// src/moves/king.rs
use crate::bitboard::king_attacks;
use once_cell::sync::Lazy;

pub static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| *king_attacks());
