//! Board descriptions
//!
//! [`BoardDescriber`] is the seam for anything that turns a board into prose
//! or pictures. The engine ships [`TextBoardDescriber`], a plain ASCII
//! diagram; richer describers (for example one backed by a language model)
//! live outside this crate and plug in through the same trait.

use std::fmt::Write;

use crate::game::resources::CapturedPieces;
use crate::game::rules::Board;
use crate::game::types::{PieceKind, Position};

pub trait BoardDescriber {
    fn describe_board(&self, board: &Board) -> String;
}

/// ASCII diagram with rank 8 at the top
///
/// ```text
/// 8 r n b q k b n r
/// 7 p p p p p p p p
/// 6 . . . . . . . .
/// ...
/// 1 R N B Q K B N R
///   a b c d e f g h
/// ```
///
/// White pieces are uppercase, Black lowercase, empty squares `.`. Captured
/// pieces and the material balance follow the diagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBoardDescriber;

impl BoardDescriber for TextBoardDescriber {
    fn describe_board(&self, board: &Board) -> String {
        let mut out = String::new();

        for row in (0..8).rev() {
            out.push(char::from(b'1' + row as u8));
            for column in 0..8 {
                let symbol = board
                    .piece_at(Position::new(row, column))
                    .map_or('.', |p| p.symbol());
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");

        let captured = CapturedPieces::from_board(board);
        if !captured.is_empty() {
            let _ = writeln!(out, "White captured: {}", list_kinds(&captured.white_captured));
            let _ = writeln!(out, "Black captured: {}", list_kinds(&captured.black_captured));
            let _ = writeln!(out, "Material: {:+}", captured.material_advantage());
        }

        out
    }
}

fn list_kinds(kinds: &[PieceKind]) -> String {
    if kinds.is_empty() {
        return String::from("-");
    }
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
