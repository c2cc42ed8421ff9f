use serde::{Deserialize, Serialize};

/// Snapshot of the running tally handed to the render layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

/// Passive win/loss counters, the board computes and pushes the values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: u32,
    losses: u32,
}

impl Scoreboard {
    pub const fn new() -> Self {
        Self { wins: 0, losses: 0 }
    }

    pub fn set_wins(&mut self, wins: u32) {
        self.wins = wins;
    }

    pub fn set_losses(&mut self, losses: u32) {
        self.losses = losses;
    }

    pub const fn wins(&self) -> u32 {
        self.wins
    }

    pub const fn losses(&self) -> u32 {
        self.losses
    }

    pub const fn score(&self) -> Score {
        Score {
            wins: self.wins,
            losses: self.losses,
        }
    }
}
