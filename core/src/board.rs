use alloc::vec::Vec;
use core::fmt;

use crate::*;

/// Round state machine: owns the cells of the current round and the scoreboard that outlives every round.
pub struct Board<R, S> {
    config: BoardConfig,
    next_config: Option<BoardConfig>,
    renderer: R,
    source: S,
    cells: Vec<Cell>,
    winner_index: usize,
    guess_count: u8,
    state: RoundState,
    scoreboard: Scoreboard,
    rounds: u32,
}

impl<R, S> Board<R, S>
where
    R: Renderer,
    S: IndexSource,
{
    pub fn new(config: BoardConfig, renderer: R, source: S) -> Self {
        let mut board = Self {
            config,
            next_config: None,
            renderer,
            source,
            cells: Vec::new(),
            winner_index: 0,
            guess_count: 0,
            state: RoundState::Playing,
            scoreboard: Scoreboard::new(),
            rounds: 0,
        };
        board.start_round();
        board
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn box_count(&self) -> usize {
        self.config.box_count()
    }

    pub fn winner_index(&self) -> usize {
        self.winner_index
    }

    pub fn guess_count(&self) -> u8 {
        self.guess_count
    }

    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.guess_count)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn pending_resolution(&self) -> Option<Resolution> {
        self.state.resolution()
    }

    /// Box count waiting to be applied when the finished round is concluded.
    pub fn pending_box_count(&self) -> Option<usize> {
        self.next_config.map(|config| config.box_count())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(GameError::InvalidIndex)
    }

    pub fn score(&self) -> Score {
        self.scoreboard.score()
    }

    /// Rounds started so far, including the current one.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Handles a click on the cell at `index`.
    ///
    /// Clicks on an already opened cell, or any click once the round is finished and waiting for
    /// [`Board::conclude`], change nothing and are not counted as guesses.
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome> {
        let cell = self.cells.get_mut(index).ok_or(GameError::InvalidIndex)?;

        if self.state.is_finished() {
            log::debug!("late selection of cell {} ignored, round is concluding", index);
            return Ok(SelectOutcome::NoChange);
        }

        if cell.is_open() {
            return Ok(SelectOutcome::NoChange);
        }

        let face = cell.open();
        log::trace!("render cell {}: {:?}", index, face);
        self.renderer.render_cell(index, face);

        if index == self.winner_index {
            self.end_round(Resolution::Won);
            return Ok(SelectOutcome::Won);
        }

        self.guess_count = self.guess_count.saturating_add(1);
        if self.guess_count >= MAX_WRONG_GUESSES {
            self.end_round(Resolution::Lost);
            Ok(SelectOutcome::Lost)
        } else {
            log::debug!(
                "cell {} missed, {} guesses left",
                index,
                self.remaining_guesses()
            );
            Ok(SelectOutcome::Missed)
        }
    }

    /// Delivers the pending resolution once and starts the next round, applying any box count
    /// that arrived while the round was finishing.
    pub fn conclude<N: Notifier>(&mut self, notifier: &mut N) -> Result<Resolution> {
        let resolution = self
            .state
            .resolution()
            .ok_or(GameError::NothingToConclude)?;

        notifier.notify(resolution);
        if let Some(config) = self.next_config.take() {
            self.apply_config(config);
        }
        self.start_round();
        Ok(resolution)
    }

    /// Applies a new box count, clamped to [`MIN_BOX_COUNT`], and restarts the round.
    ///
    /// While a finished round waits for [`Board::conclude`] the restart belongs to that call, so
    /// the new count is held until then.
    pub fn reconfigure(&mut self, box_count: usize) -> ReconfigureOutcome {
        let config = BoardConfig::new(box_count);
        if let Some(resolution) = self.state.resolution() {
            log::debug!(
                "{} boxes deferred until {:?} is concluded",
                config.box_count(),
                resolution
            );
            self.next_config = Some(config);
            return ReconfigureOutcome::Deferred;
        }

        self.apply_config(config);
        self.start_round();
        ReconfigureOutcome::Restarted
    }

    fn apply_config(&mut self, config: BoardConfig) {
        log::debug!(
            "reconfigure: {} -> {} boxes",
            self.config.box_count(),
            config.box_count()
        );
        self.config = config;
    }

    fn start_round(&mut self) {
        let box_count = self.config.box_count();
        let mut winner_index = self.source.next_index(box_count);
        if winner_index >= box_count {
            log::warn!(
                "index source returned {} for {} boxes, wrapping into range",
                winner_index,
                box_count
            );
            winner_index %= box_count;
        }

        self.winner_index = winner_index;
        self.guess_count = 0;
        self.state = RoundState::Playing;
        self.cells = (0..box_count).map(|i| Cell::new(i == winner_index)).collect();
        self.rounds = self.rounds.saturating_add(1);
        log::debug!("round {} started with {} boxes", self.rounds, box_count);

        self.renderer.render_board(box_count);
        self.renderer.render_scoreboard(self.scoreboard.score());
    }

    fn end_round(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Won => {
                self.state = RoundState::Won;
                let wins = self.scoreboard.wins().saturating_add(1);
                self.scoreboard.set_wins(wins);
            }
            Resolution::Lost => {
                self.state = RoundState::Lost;
                let losses = self.scoreboard.losses().saturating_add(1);
                self.scoreboard.set_losses(losses);
            }
        }

        let score = self.scoreboard.score();
        log::info!(
            "round {} {:?}, wins: {}, losses: {}",
            self.rounds,
            resolution,
            score.wins,
            score.losses
        );
        self.renderer.render_scoreboard(score);
    }
}

impl<R, S> fmt::Debug for Board<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("cells", &self.cells)
            .field("winner_index", &self.winner_index)
            .field("guess_count", &self.guess_count)
            .field("state", &self.state)
            .field("scoreboard", &self.scoreboard)
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}
