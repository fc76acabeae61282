// src/board/fen.rs
// Six-field FEN parsing and serialization: piece placement, side to move,
// castling rights, en passant target, halfmove clock, fullmove number.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

use super::Board;

impl Board {
    /// Parse a FEN string and overwrite `self` with the described position.
    /// On error `self` is left unspecified; callers should discard it.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(format!(
                "FEN needs at least 4 fields (placement, side, castling, ep), got {}",
                fields.len()
            ));
        }

        let mut piece_bb = [[0u64; 6]; 2];

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("FEN placement has {} ranks, expected 8", ranks.len()));
        }

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(format!("rank '{}' overruns the board", rank_str));
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(format!("rank '{}' overruns the board", rank_str));
                }
                let (piece, color) = CHAR_TO_PC[c as usize]
                    .ok_or_else(|| format!("unrecognized piece glyph '{}'", c))?;
                let sq = rank * 8 + file;
                piece_bb[color as usize][piece as usize] |= 1u64 << sq;
                file += 1;
            }
            if file != 8 {
                return Err(format!("rank '{}' does not cover all 8 files", rank_str));
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side-to-move field '{}'", other)),
        };

        let mut castling_rights = 0u8;
        if fields[2] != "-" {
            for c in fields[2].chars() {
                castling_rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling glyph '{}'", other)),
                };
            }
        }

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3])
                    .ok_or_else(|| format!("invalid en passant square '{}'", fields[3]))?,
            )
        };

        let halfmove_clock = fields
            .get(4)
            .map(|s| s.parse::<u32>())
            .transpose()
            .map_err(|e| format!("invalid halfmove clock: {}", e))?
            .unwrap_or(0);
        let fullmove_number = fields
            .get(5)
            .map(|s| s.parse::<u32>())
            .transpose()
            .map_err(|e| format!("invalid fullmove number: {}", e))?
            .unwrap_or(1);

        *self = Board::new_empty();
        for &color in &[Color::White, Color::Black] {
            for &piece in &[
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                let bb = piece_bb[color as usize][piece as usize];
                if bb != 0 {
                    self.set_bb(color, piece, bb);
                }
            }
        }

        self.side_to_move = side_to_move;
        self.castling_rights = castling_rights;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.history.clear();
        self.refresh_zobrist();

        self.validate()?;
        Ok(())
    }

    /// Serialize the current position to its six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8u8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_index(rank * 8 + file);
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        placement.push(PC_TO_CHAR[idx]);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push((b'0' + empty_run) as char);
            }
            if rank != 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.has_castling(CASTLE_WK) {
            castling.push('K');
        }
        if self.has_castling(CASTLE_WQ) {
            castling.push('Q');
        }
        if self.has_castling(CASTLE_BK) {
            castling.push('k');
        }
        if self.has_castling(CASTLE_BQ) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.en_passant {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement, side, castling, ep, self.halfmove_clock, self.fullmove_number
        )
    }
}
