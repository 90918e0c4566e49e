/// Snapshot of how far the player is, for headers and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizProgress {
    /// 1-based number of the question on screen; 0 when no session runs.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
}
