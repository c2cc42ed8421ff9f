use crate::*;

/// Presentation side of the board, receives render requests and never feeds state back.
pub trait Renderer {
    /// A fresh round with `box_count` closed cells.
    fn render_board(&mut self, box_count: usize);

    fn render_cell(&mut self, index: usize, face: CellFace);

    fn render_scoreboard(&mut self, score: Score);
}

/// Delivers the end-of-round message, may block until acknowledged.
pub trait Notifier {
    fn notify(&mut self, resolution: Resolution);
}

impl<F> Notifier for F
where
    F: FnMut(Resolution),
{
    fn notify(&mut self, resolution: Resolution) {
        self(resolution)
    }
}
