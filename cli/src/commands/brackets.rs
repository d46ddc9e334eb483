use colored::*;
use kata_common::config::Config;
use kata_core::brackets::{self, BracketError};

use crate::terminal::{colors, print};

pub fn brackets(text: &str, cfg: &Config) {
    let outcome: Result<(), BracketError> = brackets::check(text);

    match &outcome {
        Ok(()) => print::result("valid"),
        Err(err) => print::result(format!("invalid: {err}")),
    }

    if cfg.quiet > 0 {
        return;
    }
    let verdict: ColoredString = match outcome {
        Ok(()) => "balanced".color(colors::VALID).bold(),
        Err(_) => "unbalanced".color(colors::INVALID).bold(),
    };
    print::aligned_line("Length", text.chars().count().to_string());
    print::aligned_line("Verdict", verdict);
}
