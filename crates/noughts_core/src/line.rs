//! The eight winning alignments.

use serde::{Deserialize, Serialize};

use crate::Position;

/// A row, column or diagonal. Declaration order is the order in which
/// lines are checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// All lines in priority order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices making up this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Whether the line passes through a position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}
