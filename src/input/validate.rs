//! Per-attempt validation. Each function judges a single raw line and
//! either yields the validated value or the message to show before the
//! caller asks again. No terminal I/O happens here, which is what makes
//! the retry loops in [`super`] testable without one.

pub fn number(raw: &str, min: Option<i64>, max: Option<i64>) -> Result<i64, String> {
    let n = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| String::from("Invalid input. Please enter a valid number."))?;
    if let Some(min) = min {
        if n < min {
            return Err(format!(
                "Please enter a value greater than or equal to {}.",
                min
            ));
        }
    }
    if let Some(max) = max {
        if n > max {
            return Err(format!("Please enter a value less than or equal to {}.", max));
        }
    }
    Ok(n)
}

pub fn name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        Err(String::from("Name cannot be empty. Please try again."))
    } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        Err(String::from(
            "Name can only contain letters and spaces. Please try again.",
        ))
    } else if name.chars().count() > crate::NAME_LIMIT {
        Err(format!(
            "Name cannot exceed {} characters. Please try again.",
            crate::NAME_LIMIT
        ))
    } else {
        Ok(name.to_string())
    }
}

pub fn choice(raw: &str) -> Result<Choice, String> {
    Choice::try_from(raw).map_err(String::from)
}

use crate::game::choice::Choice;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_parses_within_bounds() {
        assert!(number("3", Some(1), Some(5)) == Ok(3));
        assert!(number(" 42 ", None, None) == Ok(42));
    }

    #[test]
    fn number_rejects_garbage_and_bounds() {
        assert!(number("abc", Some(1), Some(5)).is_err());
        assert!(number("0", Some(1), Some(5)).is_err());
        assert!(number("6", Some(1), Some(5)).is_err());
        assert!(number("", None, None).is_err());
    }

    #[test]
    fn number_bound_messages_are_specific() {
        let low = number("0", Some(1), None).unwrap_err();
        let high = number("121", None, Some(120)).unwrap_err();
        assert!(low.contains("greater than or equal to 1"));
        assert!(high.contains("less than or equal to 120"));
    }

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert!(name("Ann Lee") == Ok(String::from("Ann Lee")));
        assert!(name("  Bob  ") == Ok(String::from("Bob")));
    }

    #[test]
    fn name_rejects_empty_digits_and_overlong() {
        assert!(name("").is_err());
        assert!(name("   ").is_err());
        assert!(name("Bob3").is_err());
        assert!(name(&"a".repeat(21)).is_err());
        assert!(name(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn choice_normalizes_case() {
        assert!(choice("Rock") == Ok(Choice::Rock));
        assert!(choice("PAPER") == Ok(Choice::Paper));
        assert!(choice("nuke").is_err());
    }
}
