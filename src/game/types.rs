//! Type definitions for chess game logic
//!
//! Provides the small value types every other module builds on: board
//! coordinates ([`Position`]), piece colors ([`Color`]) and piece kinds
//! ([`PieceKind`]).
//!
//! # Coordinates
//!
//! Rows run from 0 (rank 1, White's back rank) to 7 (rank 8, Black's back rank).
//! Columns run from 0 (file A) to 7 (file H). Coordinates are signed so that
//! off-board lookups such as `(-1, 3)` can be represented; [`Position::REMOVED`]
//! is the reserved sentinel for captured pieces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::game::error::GameError;

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Capitalized name for messages
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Row a pawn of this color starts on (and may double-step from)
    pub fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which a pawn of this color promotes
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a forward pawn step
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six chess piece variants
///
/// Serialized by name (`"Pawn"`, `"Knight"`, ...). Parsing is
/// case-insensitive so `"queen"` and `"QUEEN"` are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may be promoted to
    pub const PROMOTION_TARGETS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Single-letter symbol, uppercase (`N` for knight, `P` for pawn)
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTION_TARGETS.contains(&self)
    }

    /// Standard material value in pawns
    ///
    /// The king has value 0 as it can never be captured.
    pub fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownPieceType(wanted.to_string()))
    }
}

impl Serialize for PieceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PieceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Board square position (row, column)
///
/// No validation is performed at construction; callers decide whether an
/// off-board value is meaningful (see [`Position::is_on_board`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    /// Where captured pieces are parked
    pub const REMOVED: Position = Position { row: -1, column: -1 };

    pub const fn new(row: i8, column: i8) -> Self {
        Position { row, column }
    }

    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.column)
    }

    pub fn is_removed_sentinel(self) -> bool {
        self == Self::REMOVED
    }

    /// Position shifted by the given deltas (may land off the board)
    pub fn offset(self, row_delta: i8, column_delta: i8) -> Self {
        Position::new(self.row + row_delta, self.column + column_delta)
    }

    /// All 64 squares, row-major from A1
    pub fn all_squares() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |column| Position::new(row, column)))
    }

    /// Square name such as `"E2"`
    ///
    /// Returns `"--"` for positions that are not on the board.
    pub fn to_notation(self) -> String {
        if !self.is_on_board() {
            return String::from("--");
        }
        let file = (b'A' + self.column as u8) as char;
        format!("{}{}", file, self.row + 1)
    }

    /// Parse a square name such as `"E2"` or `"e2"`
    pub fn from_notation(s: &str) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidNotation {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let file = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !('A'..='H').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Position::new(
            (rank as u8 - b'1') as i8,
            (file as u8 - b'A') as i8,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_notation() {
        //! Row/column map onto rank/file: (1, 4) is E2, (7, 7) is H8
        assert_eq!(Position::new(1, 4).to_notation(), "E2");
        assert_eq!(Position::new(0, 0).to_notation(), "A1");
        assert_eq!(Position::new(7, 7).to_string(), "H8");
        assert_eq!(Position::REMOVED.to_string(), "--");
    }

    #[test]
    fn test_position_from_notation() {
        assert_eq!(Position::from_notation("e2").unwrap(), Position::new(1, 4));
        assert_eq!("H8".parse::<Position>().unwrap(), Position::new(7, 7));
        assert!(Position::from_notation("i1").is_err());
        assert!(Position::from_notation("a9").is_err());
        assert!(Position::from_notation("a").is_err());
        assert!(Position::from_notation("a10").is_err());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 7).is_on_board());
        assert!(!Position::new(8, 0).is_on_board());
        assert!(!Position::REMOVED.is_on_board());
        assert_eq!(Position::new(3, 3).offset(-1, 2), Position::new(2, 5));
        assert_eq!(Position::all_squares().count(), 64);
    }

    #[test]
    fn test_piece_kind_parse_is_case_insensitive() {
        assert_eq!("queen".parse::<PieceKind>().unwrap(), PieceKind::Queen);
        assert_eq!("KNIGHT".parse::<PieceKind>().unwrap(), PieceKind::Knight);
        assert!(matches!(
            "Archbishop".parse::<PieceKind>(),
            Err(GameError::UnknownPieceType(name)) if name == "Archbishop"
        ));
    }

    #[test]
    fn test_color_directions() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.promotion_row(), 7);
        assert_eq!(Color::Black.pawn_home_row(), 6);
    }
}
