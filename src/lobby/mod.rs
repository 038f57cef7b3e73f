#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Menu {
    Single,
    Multi,
    Timed,
    Stats,
    Exit,
}

impl Menu {
    pub const ALL: [Self; 5] = [
        Self::Single,
        Self::Multi,
        Self::Timed,
        Self::Stats,
        Self::Exit,
    ];

    /// Mode label recorded in game summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Menu::Single => "Single Player",
            Menu::Multi => "Multiplayer",
            Menu::Timed => "Timed",
            Menu::Stats => "View Statistics",
            Menu::Exit => "Exit",
        }
    }
}

/// The menu prompt is bounded to [1, 5], so anything else is a bug here.
impl From<i64> for Menu {
    fn from(n: i64) -> Self {
        match n {
            1 => Menu::Single,
            2 => Menu::Multi,
            3 => Menu::Timed,
            4 => Menu::Stats,
            5 => Menu::Exit,
            _ => panic!("Invalid menu option: {}", n),
        }
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Menu::Single => "Single Player Mode",
                Menu::Multi => "Multiplayer Mode",
                Menu::Timed => "Timed Mode",
                Menu::Stats => "View Statistics",
                Menu::Exit => "Exit",
            }
        )
    }
}

/// Top-level REPL. Owns the statistics store and loops over the menu
/// until the player exits. Only fatal persistence failures escape.
pub struct Lobby {
    store: Store,
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            store: Store::new(crate::GAME_STATISTICS, crate::MAX_ENTRIES),
        }
    }

    pub fn run(&self) -> Result<()> {
        loop {
            self.welcome();
            match Menu::from(input::number("Choose an option (1-5)", Some(1), Some(5))) {
                Menu::Single => self.single()?,
                Menu::Multi => self.multi()?,
                Menu::Timed => self.timed()?,
                Menu::Stats => self.store.view(),
                Menu::Exit => {
                    self.farewell();
                    break;
                }
            }
        }
        Ok(())
    }

    fn welcome(&self) {
        println!(
            "{}",
            "\nWelcome to Rock 🪨, Paper 📄 and Scissors ✂️!".cyan()
        );
        for (n, entry) in Menu::ALL.iter().enumerate() {
            println!("{}. {}", n + 1, entry);
        }
    }

    fn single(&self) -> Result<()> {
        let rounds = input::number("Enter number of rounds to play", Some(1), None) as Count;
        let mut one = Human::from(input::name("Enter your name"));
        let mut two = Robot;
        let tally = Session::rounds(rounds).play(&mut one, &mut two);
        self.conclude(Menu::Single, one.name(), two.name(), &tally, None)
    }

    fn multi(&self) -> Result<()> {
        let rounds = input::number("Enter number of rounds to play", Some(1), None) as Count;
        let mut one = Human::from(input::name("Enter name of Player 1"));
        let mut two = Human::from(input::name("Enter name of Player 2"));
        println!("\nInput will be hidden for multiplayer mode.");
        let tally = Session::rounds(rounds).concealed().play(&mut one, &mut two);
        self.conclude(Menu::Multi, one.name(), two.name(), &tally, None)
    }

    fn timed(&self) -> Result<()> {
        let mut one = Human::from(input::name("Enter your name"));
        let (floor, ceil) = crate::TIME_BOUNDS;
        let limit = input::number(
            "Enter the time limit in seconds (e.g., 15, 30, 60)",
            Some(floor),
            Some(ceil),
        ) as Seconds;
        println!(
            "\n{}, your time starts now! You have {} seconds to play.",
            one.name(),
            limit
        );
        let mut two = Robot;
        let tally = Session::seconds(limit).play(&mut one, &mut two);
        println!(
            "\nGame Over! You played {} rounds in {} seconds.",
            tally.rounds, limit
        );
        self.conclude(Menu::Timed, one.name(), two.name(), &tally, Some(limit))
    }

    /// Winner announcement, summary block, then persistence. The first
    /// two always run; only the save can fail.
    fn conclude(
        &self,
        mode: Menu,
        one: &str,
        two: &str,
        tally: &Tally,
        limit: Option<Seconds>,
    ) -> Result<()> {
        match tally.winner(one, two) {
            Some(name) => println!(
                "\n{} is the overall winner with {} wins out of {} rounds!",
                name,
                tally.best(),
                tally.rounds
            ),
            None => println!("\nIt's a tie! Both {} and {} have equal wins.", one, two),
        }
        let summary = Summary::new(mode.label(), one, two, tally, limit);
        stats::display(&summary);
        self.store.save(&summary)
    }

    fn farewell(&self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = std::io::stdout().flush();
        println!("Thanks for playing. Goodbye!");
    }
}

use crate::game::session::Session;
use crate::game::session::Tally;
use crate::input;
use crate::players::human::Human;
use crate::players::robot::Robot;
use crate::players::Player;
use crate::stats;
use crate::stats::store::Store;
use crate::stats::summary::Summary;
use crate::Count;
use crate::Seconds;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
