/// What ends a game: a fixed round count or a wall-clock deadline.
/// Exactly one applies per session.
#[derive(Debug, Clone, Copy)]
pub enum Bound {
    Rounds(Count),
    Seconds(Seconds),
}

/// Running score from the first player's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: Count,
    pub losses: Count,
    pub draws: Count,
    pub rounds: Count,
}

impl Tally {
    fn absorb(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.draws += 1,
        }
    }

    /// Overall winner by strict inequality on win counts. Draws never
    /// factor in; equal wins means nobody.
    pub fn winner<'a>(&self, one: &'a str, two: &'a str) -> Option<&'a str> {
        match self.wins.cmp(&self.losses) {
            Ordering::Greater => Some(one),
            Ordering::Less => Some(two),
            Ordering::Equal => None,
        }
    }

    /// The winning side's count, for the announcement line.
    pub fn best(&self) -> Count {
        self.wins.max(self.losses)
    }
}

pub struct Session {
    bound: Bound,
    concealed: bool,
}

impl Session {
    pub fn rounds(rounds: Count) -> Self {
        Self {
            bound: Bound::Rounds(rounds),
            concealed: false,
        }
    }

    pub fn seconds(limit: Seconds) -> Self {
        Self {
            bound: Bound::Seconds(limit),
            concealed: false,
        }
    }

    pub fn concealed(mut self) -> Self {
        self.concealed = true;
        self
    }

    /// Run rounds until the bound is reached and return the final tally.
    /// The deadline is polled between rounds only; a round that is already
    /// waiting on input is allowed to finish past it.
    pub fn play(&self, one: &mut dyn Player, two: &mut dyn Player) -> Tally {
        let mut tally = Tally::default();
        let clock = Instant::now();
        loop {
            match self.bound {
                Bound::Rounds(rounds) => {
                    if tally.rounds == rounds {
                        break;
                    }
                }
                Bound::Seconds(limit) => {
                    let elapsed = clock.elapsed().as_secs_f64();
                    if elapsed >= limit as f64 {
                        println!("\nTime's up!");
                        break;
                    }
                    println!("\nTime remaining: {:.2} seconds", limit as f64 - elapsed);
                }
            }
            println!("\nRound {}:", tally.rounds + 1);
            let outcome = Round::new(&mut *one, &mut *two, self.concealed).play();
            tally.absorb(outcome);
        }
        tally
    }
}

use super::outcome::Outcome;
use super::round::Round;
use crate::players::Player;
use crate::Count;
use crate::Seconds;
use std::cmp::Ordering;
use std::time::Instant;
