//! Interactive prompt layer. Every prompt loops until [`validate`]
//! accepts the line; invalid entries print their message and ask again,
//! they never escape as errors. Concealed prompts go through
//! [`dialoguer::Password`] so the terminal never echoes the entry.

pub mod validate;

pub fn number(prompt: &str, min: Option<i64>, max: Option<i64>) -> i64 {
    loop {
        match validate::number(&line(prompt, false), min, max) {
            Ok(n) => break n,
            Err(msg) => println!("{}", msg),
        }
    }
}

pub fn name(prompt: &str) -> String {
    loop {
        match validate::name(&line(prompt, false)) {
            Ok(name) => break name,
            Err(msg) => println!("{}", msg),
        }
    }
}

pub fn choice(who: &str, concealed: bool) -> Choice {
    let prompt = match concealed {
        true => format!("(Hidden): {}, choose {}", who, Choice::listing()),
        false => format!("{}, choose {}", who, Choice::listing()),
    };
    loop {
        match validate::choice(&line(&prompt, concealed)) {
            Ok(choice) => break choice,
            Err(msg) => println!("{}", msg),
        }
    }
}

fn line(prompt: &str, concealed: bool) -> String {
    match concealed {
        true => Password::new().with_prompt(prompt).interact(),
        false => Input::<String>::new().with_prompt(prompt).interact(),
    }
    .expect("interactive terminal")
}

use crate::game::choice::Choice;
use dialoguer::{Input, Password};
