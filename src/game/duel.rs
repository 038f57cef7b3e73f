/// A pair of revealed choices. Ephemeral; resolves one exchange into an
/// [`Outcome`] and narrates it from the first player's side.
pub struct Duel {
    one: Choice,
    two: Choice,
}

impl From<(Choice, Choice)> for Duel {
    fn from((one, two): (Choice, Choice)) -> Self {
        Self { one, two }
    }
}

impl Duel {
    pub fn outcome(&self) -> Outcome {
        if self.one == self.two {
            Outcome::Tie
        } else {
            match self.one.beats() == self.two {
                true => Outcome::Win,
                false => Outcome::Lose,
            }
        }
    }

    /// The matchup line. Derived from the same [`Self::outcome`] call that
    /// scores the round, so narration can never disagree with the score.
    pub fn report(&self, name: &str) -> String {
        match self.outcome() {
            Outcome::Tie => format!("It's a tie! Both chose {}", self.one)
                .yellow()
                .to_string(),
            Outcome::Win => format!("{} wins! {} beats {}", name, self.one, self.two)
                .green()
                .to_string(),
            Outcome::Lose => format!("{} loses! {} beats {}", name, self.two, self.one)
                .red()
                .to_string(),
        }
    }
}

use super::choice::Choice;
use super::outcome::Outcome;
use colored::Colorize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_choices_tie() {
        for choice in Choice::ALL {
            assert!(Duel::from((choice, choice)).outcome() == Outcome::Tie);
        }
    }

    #[test]
    fn each_choice_wins_once_and_loses_once() {
        for choice in Choice::ALL {
            let others = Choice::ALL.iter().copied().filter(|c| *c != choice);
            let outcomes = others
                .map(|other| Duel::from((choice, other)).outcome())
                .collect::<Vec<Outcome>>();
            assert!(outcomes.contains(&Outcome::Win));
            assert!(outcomes.contains(&Outcome::Lose));
            assert!(outcomes.len() == 2);
        }
    }

    #[test]
    fn resolution_table() {
        assert!(Duel::from((Choice::Rock, Choice::Scissors)).outcome() == Outcome::Win);
        assert!(Duel::from((Choice::Paper, Choice::Rock)).outcome() == Outcome::Win);
        assert!(Duel::from((Choice::Scissors, Choice::Paper)).outcome() == Outcome::Win);
        assert!(Duel::from((Choice::Scissors, Choice::Rock)).outcome() == Outcome::Lose);
        assert!(Duel::from((Choice::Rock, Choice::Paper)).outcome() == Outcome::Lose);
        assert!(Duel::from((Choice::Paper, Choice::Scissors)).outcome() == Outcome::Lose);
    }

    #[test]
    fn report_agrees_with_outcome() {
        for one in Choice::ALL {
            for two in Choice::ALL {
                let duel = Duel::from((one, two));
                let report = duel.report("Ann");
                match duel.outcome() {
                    Outcome::Win => assert!(report.contains("Ann wins!")),
                    Outcome::Lose => assert!(report.contains("Ann loses!")),
                    Outcome::Tie => assert!(report.contains("tie")),
                }
            }
        }
    }
}
