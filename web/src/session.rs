use crate::render::ViewModel;
use crate::utils::parse_box_count;
use boxhunt_core as game;

/// Board plus the shell's round bookkeeping, `T` is the handle of the scheduled conclusion timer.
pub(crate) struct GameSession<T> {
    board: game::Board<ViewModel, game::SeededIndexSource>,
    pending_conclusion: Option<T>,
    input_epoch: u32,
}

impl<T> GameSession<T> {
    pub(crate) fn new(box_count: usize, seed: u64) -> Self {
        Self {
            board: game::Board::new(
                game::BoardConfig::new(box_count),
                ViewModel::default(),
                game::SeededIndexSource::new(seed),
            ),
            pending_conclusion: None,
            input_epoch: 0,
        }
    }

    pub(crate) fn board(&self) -> &game::Board<ViewModel, game::SeededIndexSource> {
        &self.board
    }

    pub(crate) fn is_concluding(&self) -> bool {
        self.pending_conclusion.is_some()
    }

    /// Bumped on every box count edit so the input is rebuilt with the value actually in use.
    pub(crate) fn input_epoch(&self) -> u32 {
        self.input_epoch
    }

    /// Forwards a click; `schedule` is called once when the click finishes the round.
    pub(crate) fn select(&mut self, index: usize, schedule: impl FnOnce() -> T) -> bool {
        match self.board.select(index) {
            Ok(outcome) => {
                if let Some(resolution) = outcome.resolution() {
                    log::debug!("round resolved: {:?}", resolution);
                    self.pending_conclusion = Some(schedule());
                }
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("select box {}: {}", index, err);
                false
            }
        }
    }

    pub(crate) fn conclude<N: game::Notifier>(&mut self, notifier: &mut N) -> bool {
        self.pending_conclusion.take();
        match self.board.conclude(notifier) {
            Ok(resolution) => {
                log::debug!("concluded {:?}, round {}", resolution, self.board.rounds());
                true
            }
            Err(err) => {
                log::debug!("conclude: {}", err);
                false
            }
        }
    }

    pub(crate) fn reconfigure(&mut self, raw: &str) -> bool {
        self.input_epoch = self.input_epoch.wrapping_add(1);
        if let Some(box_count) = parse_box_count(raw) {
            if self.board.reconfigure(box_count) == game::ReconfigureOutcome::Deferred {
                log::debug!("{} boxes apply after the current round", box_count);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewCellState;
    use boxhunt_core::Resolution;

    #[derive(Debug, PartialEq)]
    struct Ticket(u32);

    fn session() -> GameSession<Ticket> {
        GameSession::new(5, 3)
    }

    #[test]
    fn finishing_click_schedules_exactly_one_conclusion() {
        let mut session = session();
        let winner = session.board().winner_index();
        let loser = (winner + 1) % 5;
        let mut scheduled = 0;

        assert!(session.select(loser, || {
            scheduled += 1;
            Ticket(scheduled)
        }));
        assert!(!session.is_concluding());

        assert!(session.select(winner, || {
            scheduled += 1;
            Ticket(scheduled)
        }));
        assert!(session.is_concluding());

        assert!(!session.select((winner + 2) % 5, || {
            scheduled += 1;
            Ticket(scheduled)
        }));
        assert_eq!(scheduled, 1);
        assert_eq!(session.pending_conclusion, Some(Ticket(1)));
    }

    #[test]
    fn conclusion_alerts_once_and_clears_the_timer() {
        let mut session = session();
        let winner = session.board().winner_index();
        let mut seen = Vec::new();

        session.select(winner, || Ticket(0));
        assert!(session.conclude(&mut |resolution: Resolution| seen.push(resolution.message())));

        assert!(!session.is_concluding());
        assert_eq!(seen, vec!["You win!!"]);
        assert_eq!(session.board().renderer().cells(), &[ViewCellState::Closed; 5]);

        assert!(!session.conclude(&mut |resolution: Resolution| seen.push(resolution.message())));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn box_count_edit_during_reveal_still_alerts() {
        let mut session = session();
        let winner = session.board().winner_index();
        let mut seen = Vec::new();

        session.select(winner, || Ticket(0));
        session.reconfigure("7");
        assert!(session.is_concluding());
        assert_eq!(session.board().renderer().cells()[winner], ViewCellState::Winner);

        session.conclude(&mut |resolution: Resolution| seen.push(resolution));

        assert_eq!(seen, vec![Resolution::Won]);
        assert_eq!(session.board().box_count(), 7);
        assert_eq!(session.board().renderer().cells().len(), 7);
    }

    #[test]
    fn clamped_or_rejected_edits_refresh_the_input() {
        let mut session = session();

        session.reconfigure("3");
        assert_eq!(session.board().box_count(), 5);
        assert_eq!(session.input_epoch(), 1);

        session.reconfigure("1000000000");
        assert_eq!(session.board().box_count(), 5);
        assert_eq!(session.input_epoch(), 2);

        session.reconfigure("9");
        assert_eq!(session.board().box_count(), 9);
    }
}
