use boxhunt_core::{CellFace, Renderer, Score};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewCellState {
    Closed,
    Winner,
    Loser,
}

impl From<CellFace> for ViewCellState {
    fn from(face: CellFace) -> Self {
        match face {
            CellFace::Winner => Self::Winner,
            CellFace::Loser => Self::Loser,
        }
    }
}

/// What the page shows, kept up to date from the board's render requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ViewModel {
    cells: Vec<ViewCellState>,
    score: Score,
}

impl ViewModel {
    pub(crate) fn cells(&self) -> &[ViewCellState] {
        &self.cells
    }

    pub(crate) fn score(&self) -> Score {
        self.score
    }
}

impl Renderer for ViewModel {
    fn render_board(&mut self, box_count: usize) {
        self.cells.clear();
        self.cells.resize(box_count, ViewCellState::Closed);
    }

    fn render_cell(&mut self, index: usize, face: CellFace) {
        match self.cells.get_mut(index) {
            Some(cell) => *cell = face.into(),
            None => log::warn!("render request for missing cell {}", index),
        }
    }

    fn render_scoreboard(&mut self, score: Score) {
        self.score = score;
    }
}
