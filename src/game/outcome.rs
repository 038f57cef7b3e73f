/// Result of one round, always relative to the first-named player.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}
