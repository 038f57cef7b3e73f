/// The built-in opponent. Chooses uniformly at random with no memory of
/// past rounds.
pub struct Robot;

impl Player for Robot {
    fn name(&self) -> &str {
        "Computer"
    }
    fn choose(&mut self, _: bool) -> Choice {
        Choice::random()
    }
    fn is_computer(&self) -> bool {
        true
    }
}

use super::Player;
use crate::game::choice::Choice;
