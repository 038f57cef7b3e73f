/// On-disk history of finished games: a single pretty-printed JSON array,
/// capped to the most recent `cap` entries. The file is read fresh and
/// rewritten wholesale on every save; nothing is cached between
/// operations.
pub struct Store {
    path: PathBuf,
    cap: usize,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, cap: usize) -> Self {
        Self {
            path: path.into(),
            cap,
        }
    }

    /// Append one summary, evicting from the front once over the cap.
    /// Write failures are reported and propagated; the write itself is
    /// atomic, so a failed save leaves the previous log untouched.
    pub fn save(&self, summary: &Summary) -> Result<()> {
        let mut history = self.load()?;
        history.push(summary.clone());
        let excess = history.len().saturating_sub(self.cap);
        history.drain(..excess);
        self.write(&history)?;
        println!("Statistics successfully saved.");
        Ok(())
    }

    /// Print every stored record in insertion order, one delimited block
    /// each. An absent or unreadable store is not an error here.
    pub fn view(&self) {
        let history = std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Vec<Summary>>(&raw).ok());
        let Some(history) = history else {
            println!("\nNo game statistics available. Play some games to generate statistics!");
            return;
        };
        println!("\nGame Statistics:");
        println!("{}", RULE);
        if history.is_empty() {
            println!("No statistics found.");
        } else {
            for summary in &history {
                print!("{}", summary);
                println!("{}", RULE);
            }
        }
    }

    /// A missing file or an undecodable one yields an empty history; any
    /// other read failure is fatal for the operation.
    fn load(&self) -> Result<Vec<Summary>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("statistics file not found, starting a fresh log");
                return Ok(Vec::new());
            }
            Err(e) => {
                log::error!("unexpected error reading statistics: {}", e);
                return Err(e.into());
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Err(e) => {
                log::debug!("error decoding statistics, resetting to an empty log: {}", e);
                Ok(Vec::new())
            }
            Ok(value) if !value.is_array() => {
                log::warn!("statistics file is not a list, resetting to an empty log");
                Ok(Vec::new())
            }
            Ok(value) => match serde_json::from_value(value) {
                Ok(history) => Ok(history),
                Err(e) => {
                    log::debug!("undecodable statistics entries, resetting to an empty log: {}", e);
                    Ok(Vec::new())
                }
            },
        }
    }

    fn write(&self, history: &[Summary]) -> Result<()> {
        let json = serde_json::to_string_pretty(history)?;
        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, json)
            .and_then(|_| std::fs::rename(&temp, &self.path))
            .map_err(|e| {
                log::error!("failed to save statistics: {}", e);
                anyhow::Error::from(e)
            })
    }
}

use super::summary::Summary;
use super::RULE;
use anyhow::Result;
use std::path::PathBuf;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::Tally;

    fn scratch(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roshambo-{}-{}.json", tag, std::process::id()))
    }

    fn summary(one: &str) -> Summary {
        let tally = Tally {
            wins: 1,
            losses: 0,
            draws: 0,
            rounds: 1,
        };
        Summary::new("Single Player", one, "Computer", &tally, None)
    }

    #[test]
    fn cap_keeps_the_most_recent_in_order() {
        let path = scratch("cap");
        let _ = std::fs::remove_file(&path);
        let store = Store::new(&path, 3);
        for name in ["Ada", "Bea", "Cal", "Dee"] {
            store.save(&summary(name)).unwrap();
        }
        let history = store.load().unwrap();
        let names = history.iter().map(|s| s.one.as_str()).collect::<Vec<&str>>();
        assert!(names == vec!["Bea", "Cal", "Dee"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_empty_history() {
        let store = Store::new(scratch("missing"), 10);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_empty_history() {
        let path = scratch("malformed");
        std::fs::write(&path, "this is not json").unwrap();
        let store = Store::new(&path, 10);
        assert!(store.load().unwrap().is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn wrong_top_level_shape_is_an_empty_history() {
        let path = scratch("shape");
        std::fs::write(&path, "{\"Mode\": \"Single Player\"}").unwrap();
        let store = Store::new(&path, 10);
        assert!(store.load().unwrap().is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_rewrites_the_whole_file_pretty_printed() {
        let path = scratch("pretty");
        let _ = std::fs::remove_file(&path);
        let store = Store::new(&path, 10);
        store.save(&summary("Ada")).unwrap();
        store.save(&summary("Bea")).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains('\n'));
        let history = serde_json::from_str::<Vec<Summary>>(&raw).unwrap();
        assert!(history.len() == 2);
        let _ = std::fs::remove_file(&path);
    }
}
