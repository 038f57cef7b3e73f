/// One exchange of choices between two players.
pub struct Round<'a> {
    one: &'a mut dyn Player,
    two: &'a mut dyn Player,
    concealed: bool,
}

impl<'a> Round<'a> {
    pub fn new(one: &'a mut dyn Player, two: &'a mut dyn Player, concealed: bool) -> Self {
        Self {
            one,
            two,
            concealed,
        }
    }

    /// Gather both choices, reveal them, narrate the matchup, and score it
    /// from the first player's side.
    pub fn play(&mut self) -> Outcome {
        let hidden = self.hidden();
        let one = self.one.choose(hidden);
        let two = self.two.choose(hidden);
        println!("{} chose: {}", self.one.name(), one);
        println!("{} chose: {}", self.two.name(), two);
        let duel = Duel::from((one, two));
        println!("{}", duel.report(self.one.name()));
        duel.outcome()
    }

    /// Two humans at one keyboard always enter concealed, whatever the
    /// caller asked for; neither may see the other's entry echoed.
    fn hidden(&self) -> bool {
        self.concealed || !(self.one.is_computer() || self.two.is_computer())
    }
}

use super::duel::Duel;
use super::outcome::Outcome;
use crate::players::Player;
