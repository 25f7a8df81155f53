//! Piece data
//!
//! A [`Piece`] is a plain record: identity, kind, color, where it stands and,
//! once captured, who took it and where. Movement behaviour lives in
//! [`crate::game::rules::piece_moves`] behind the `MoveRules` trait.

use serde::{Deserialize, Serialize};

use crate::game::types::{Color, PieceKind, Position};

/// A chess piece on (or removed from) the board
///
/// Serialized with an explicit `"type"` discriminator followed by the common
/// fields, e.g.
///
/// ```json
/// {"type":"Pawn","id":5,"color":"white","position":{"row":1,"column":4},
///  "isRemoved":false,"removedBy":null,"removedAt":null}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub id: u32,
    pub color: Color,
    pub position: Position,
    #[serde(default)]
    pub is_removed: bool,
    /// Color and kind of the capturer, e.g. `"white Queen"`
    #[serde(default)]
    pub removed_by: Option<String>,
    /// Square the piece was captured on
    #[serde(default)]
    pub removed_at: Option<Position>,
}

impl Piece {
    pub fn new(id: u32, kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            id,
            color,
            position,
            is_removed: false,
            removed_by: None,
            removed_at: None,
        }
    }

    /// Whether this piece is still in play
    pub fn is_active(&self) -> bool {
        !self.is_removed
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Provenance label used for `removed_by`
    pub fn label(&self) -> String {
        format!("{} {}", self.color, self.kind)
    }

    /// Single-character symbol, uppercase for White and lowercase for Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Take this piece out of play
    ///
    /// Parks it on [`Position::REMOVED`] and records provenance. Provenance is
    /// written only on the first capture and never overwritten afterwards.
    pub fn mark_removed(&mut self, captured_by: &Piece) {
        let square = self.position;
        self.is_removed = true;
        self.position = Position::REMOVED;
        if self.removed_at.is_none() {
            self.removed_at = Some(square);
            self.removed_by = Some(captured_by.label());
        }
    }

    /// Whether a pawn of this piece's color stands on its promotion row
    pub fn is_on_promotion_row(&self) -> bool {
        self.kind == PieceKind::Pawn && self.position.row == self.color.promotion_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_removed_records_provenance() {
        //! Captured pieces move to the sentinel and remember the capturer
        let mut pawn = Piece::new(20, PieceKind::Pawn, Color::Black, Position::new(6, 5));
        let queen = Piece::new(4, PieceKind::Queen, Color::White, Position::new(6, 5));

        pawn.mark_removed(&queen);

        assert!(pawn.is_removed);
        assert_eq!(pawn.position, Position::REMOVED);
        assert_eq!(pawn.removed_at, Some(Position::new(6, 5)));
        assert_eq!(pawn.removed_by.as_deref(), Some("white Queen"));
    }

    #[test]
    fn test_provenance_is_written_once() {
        let mut knight = Piece::new(2, PieceKind::Knight, Color::White, Position::new(2, 2));
        let bishop = Piece::new(19, PieceKind::Bishop, Color::Black, Position::new(2, 2));
        let rook = Piece::new(17, PieceKind::Rook, Color::Black, Position::new(0, 0));

        knight.mark_removed(&bishop);
        knight.mark_removed(&rook);

        assert_eq!(knight.removed_at, Some(Position::new(2, 2)));
        assert_eq!(knight.removed_by.as_deref(), Some("black Bishop"));
    }

    #[test]
    fn test_symbol_case_follows_color() {
        let white = Piece::new(1, PieceKind::Knight, Color::White, Position::new(0, 1));
        let black = Piece::new(17, PieceKind::Knight, Color::Black, Position::new(7, 1));
        assert_eq!(white.symbol(), 'N');
        assert_eq!(black.symbol(), 'n');
    }
}
