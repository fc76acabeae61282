use super::*;
use crate::moves::attacks::AttackTables;
use crate::moves::execute::{generate_legal, make_move_basic, undo_move_basic};
use std::str::FromStr;

#[test]
fn new_board_matches_new_empty_plus_placement() {
    let board = Board::new();
    assert_eq!(board.occupied().count_ones(), 32);
    assert_eq!(board.occ_white.count_ones(), 16);
    assert_eq!(board.occ_black.count_ones(), 16);
}

#[test]
fn piece_on_sq_agrees_with_piece_bitboards() {
    let board = Board::new();
    for idx in 0u8..64 {
        let sq = Square::from_index(idx);
        let from_mailbox = board.piece_at(sq);
        let from_bb = [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ]
        .into_iter()
        .find_map(|piece| {
            for color in [Color::White, Color::Black] {
                if board.pieces(piece, color) & sq.bb() != 0 {
                    return Some((color, piece));
                }
            }
            None
        });
        assert_eq!(from_mailbox, from_bb, "square {} disagrees", sq);
    }
}

#[test]
fn zobrist_matches_from_scratch_recompute() {
    let board = Board::new();
    assert_eq!(board.zobrist, board.compute_zobrist_full());
}

#[test]
fn score_matches_from_scratch_recompute() {
    let board = Board::new();
    let (mg, eg) = board.compute_score_full();
    assert_eq!(board.score, mg);
    assert_eq!(board.eg_score, eg);
    // Symmetric starting position: white and black psqt/material cancel out.
    assert_eq!(mg, 0);
    assert_eq!(eg, 0);
}

#[test]
fn apply_undo_round_trip_restores_every_field() {
    let tables = AttackTables::new();
    let mut board = Board::new();
    let original = board.clone();

    let mut moves = Vec::new();
    let mut scratch = Vec::new();
    generate_legal(&mut board, &tables, &mut moves, &mut scratch);
    assert!(!moves.is_empty());

    for mv in moves {
        let before = board.clone();
        let undo = make_move_basic(&mut board, mv);
        assert_ne!(board.zobrist, before.zobrist, "move {} is a zobrist no-op", mv);
        undo_move_basic(&mut board, undo);
        assert_eq!(board, before, "undo did not restore board state after {}", mv);
    }

    assert_eq!(board, original);
}

#[test]
fn endgame_flag_set_for_sparse_material() {
    let board = Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(board.endgame);

    let board = Board::new();
    assert!(!board.endgame);
}

#[test]
fn repetition_count_tracks_history_matches() {
    let mut board = Board::new();
    assert_eq!(board.repetition_count(), 1);
    board.history.push(board.zobrist);
    assert_eq!(board.repetition_count(), 2);
    assert!(board.is_repetition());
}
