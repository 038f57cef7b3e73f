//! Interactive rock-paper-scissors for the terminal.
//!
//! Play against the computer, against another human at the same keyboard,
//! or against the clock. Finished games land in a persisted, capped
//! history that can be reviewed from the menu.

pub mod game;
pub mod input;
pub mod lobby;
pub mod players;
pub mod stats;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round, win, and draw counters.
pub type Count = u32;
/// Wall-clock limits for timed games.
pub type Seconds = u64;

// ============================================================================
// STATISTICS
// ============================================================================
/// Default on-disk location of the statistics log.
pub const GAME_STATISTICS: &str = "game_statistics.json";
/// Most recent games retained by the statistics log; oldest evicted first.
pub const MAX_ENTRIES: usize = 10;

// ============================================================================
// INPUT LIMITS
// ============================================================================
/// Longest accepted player name.
pub const NAME_LIMIT: usize = 20;
/// Bounds on the timed-mode limit prompt, in seconds.
pub const TIME_BOUNDS: (i64, i64) = (0, 120);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging with a timestamped log file.
/// Creates `logs/` and writes DEBUG level to file, WARN and up to the
/// terminal. The terminal otherwise belongs to the game.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
