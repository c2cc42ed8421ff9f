use serde::{Deserialize, Serialize};

/// What an opened cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFace {
    Winner,
    Loser,
}

/// Single selectable box; the winner flag is fixed for the cell's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_winner: bool,
    is_open: bool,
}

impl Cell {
    pub const fn new(is_winner: bool) -> Self {
        Self {
            is_winner,
            is_open: false,
        }
    }

    pub const fn is_winner(&self) -> bool {
        self.is_winner
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the cell, opening twice is harmless.
    pub fn open(&mut self) -> CellFace {
        self.is_open = true;
        self.hidden_face()
    }

    pub const fn face(&self) -> Option<CellFace> {
        if self.is_open {
            Some(self.hidden_face())
        } else {
            None
        }
    }

    const fn hidden_face(&self) -> CellFace {
        if self.is_winner {
            CellFace::Winner
        } else {
            CellFace::Loser
        }
    }
}
