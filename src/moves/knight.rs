// src/moves/knight.rs
use crate::bitboard::knight_attacks;
use once_cell::sync::Lazy;

pub static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| *knight_attacks());
