#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use random::*;
pub use render::*;
pub use scoreboard::*;

mod board;
mod cell;
mod error;
mod random;
mod render;
mod scoreboard;

/// Smallest board that can be played, anything below is raised to this.
pub const MIN_BOX_COUNT: usize = 5;

/// Wrong guesses that end a round.
pub const MAX_WRONG_GUESSES: u8 = 3;

/// Number of boxes on the board, always at least [`MIN_BOX_COUNT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct BoxCount(usize);

impl BoxCount {
    pub const fn new(count: usize) -> Self {
        if count < MIN_BOX_COUNT {
            Self(MIN_BOX_COUNT)
        } else {
            Self(count)
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for BoxCount {
    fn default() -> Self {
        Self(MIN_BOX_COUNT)
    }
}

impl From<usize> for BoxCount {
    fn from(count: usize) -> Self {
        Self::new(count)
    }
}

impl From<BoxCount> for usize {
    fn from(count: BoxCount) -> Self {
        count.0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub box_count: BoxCount,
}

impl BoardConfig {
    pub const fn new(box_count: usize) -> Self {
        Self {
            box_count: BoxCount::new(box_count),
        }
    }

    pub const fn box_count(&self) -> usize {
        self.box_count.get()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// A finished round is waiting for its resolution to be delivered.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn resolution(self) -> Option<Resolution> {
        match self {
            Self::Playing => None,
            Self::Won => Some(Resolution::Won),
            Self::Lost => Some(Resolution::Lost),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Won,
    Lost,
}

impl Resolution {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You win!!",
            Self::Lost => "Game over",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Missed,
    Won,
    Lost,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Missed => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn resolution(self) -> Option<Resolution> {
        match self {
            Self::Won => Some(Resolution::Won),
            Self::Lost => Some(Resolution::Lost),
            Self::NoChange | Self::Missed => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReconfigureOutcome {
    Restarted,
    /// Held until the finished round is concluded.
    Deferred,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn box_count_below_minimum_is_raised() {
        for count in 0..MIN_BOX_COUNT {
            assert_eq!(BoardConfig::new(count).box_count(), MIN_BOX_COUNT);
        }
        assert_eq!(BoardConfig::new(12).box_count(), 12);
        assert_eq!(BoardConfig::default().box_count(), MIN_BOX_COUNT);
    }

    #[test]
    fn decoded_config_is_clamped() {
        let config: BoardConfig = serde_json::from_str(r#"{"box_count":2}"#).unwrap();
        assert_eq!(config.box_count(), MIN_BOX_COUNT);

        let config: BoardConfig = serde_json::from_str(r#"{"box_count":8}"#).unwrap();
        assert_eq!(config, BoardConfig::new(8));
    }

    #[test]
    fn resolution_messages() {
        assert_eq!(Resolution::Won.message(), "You win!!");
        assert_eq!(Resolution::Lost.message(), "Game over");
        assert_eq!(RoundState::Playing.resolution(), None);
        assert_eq!(RoundState::Lost.resolution(), Some(Resolution::Lost));
    }
}
