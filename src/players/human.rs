pub struct Human {
    name: String,
}

impl From<String> for Human {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn choose(&mut self, concealed: bool) -> Choice {
        input::choice(&self.name, concealed)
    }
}

use super::Player;
use crate::game::choice::Choice;
use crate::input;
