/// Record of one finished game. Built once when the game ends, immutable
/// after, and serialized with the legacy key names the statistics file
/// has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Mode")]
    pub(crate) mode: String,
    #[serde(rename = "Player 1")]
    pub(crate) one: String,
    #[serde(rename = "Player 2")]
    pub(crate) two: String,
    #[serde(rename = "Player 1 Wins")]
    pub(crate) one_wins: Count,
    #[serde(rename = "Player 2 Wins")]
    pub(crate) two_wins: Count,
    #[serde(rename = "Draws")]
    pub(crate) draws: Count,
    #[serde(rename = "Total Rounds")]
    pub(crate) rounds: Count,
    #[serde(rename = "Time Limit")]
    pub(crate) limit: Option<Seconds>,
    #[serde(rename = "Date")]
    pub(crate) date: String,
}

impl Summary {
    /// Stamp a finished game with today's date.
    pub fn new(mode: &str, one: &str, two: &str, tally: &Tally, limit: Option<Seconds>) -> Self {
        Self {
            mode: mode.to_string(),
            one: one.to_string(),
            two: two.to_string(),
            one_wins: tally.wins,
            two_wins: tally.losses,
            draws: tally.draws,
            rounds: tally.rounds,
            limit,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "Player 1: {}", self.one)?;
        writeln!(f, "Player 2: {}", self.two)?;
        writeln!(f, "Player 1 Wins: {}", self.one_wins)?;
        writeln!(f, "Player 2 Wins: {}", self.two_wins)?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(f, "Total Rounds: {}", self.rounds)?;
        match self.limit {
            Some(limit) => writeln!(f, "Time Limit: {}", limit)?,
            None => writeln!(f, "Time Limit: None")?,
        }
        writeln!(f, "Date: {}", self.date)
    }
}

use crate::game::session::Tally;
use crate::Count;
use crate::Seconds;
use serde::Deserialize;
use serde::Serialize;
