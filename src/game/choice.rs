#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The choice this one defeats. Fixed 3-cycle.
    pub fn beats(&self) -> Self {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Choice::Rock => "🪨",
            Choice::Paper => "📄",
            Choice::Scissors => "✂️",
        }
    }

    /// Uniform draw for the computer opponent.
    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::rng())
            .expect("non empty choice set")
    }

    /// All three options as shown by the choice prompt.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|c| format!("{} {}", c.glyph(), c.label()))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl TryFrom<&str> for Choice {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err("Invalid choice. Please try again."),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.glyph())
    }
}

use rand::seq::IndexedRandom;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_no_fixed_points() {
        for choice in Choice::ALL {
            assert!(choice.beats() != choice);
        }
    }

    #[test]
    fn cycle_covers_all_choices() {
        let mut beaten = Choice::ALL.map(|c| c.beats());
        beaten.sort();
        assert!(beaten == Choice::ALL);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert!(Choice::try_from("ROCK") == Ok(Choice::Rock));
        assert!(Choice::try_from("  Paper ") == Ok(Choice::Paper));
        assert!(Choice::try_from("scissors") == Ok(Choice::Scissors));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert!(Choice::try_from("").is_err());
        assert!(Choice::try_from("rocks").is_err());
        assert!(Choice::try_from("lizard").is_err());
    }
}
