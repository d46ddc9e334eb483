use colored::*;
use kata_common::config::Config;
use kata_core::substring::{self, Window};

use crate::terminal::{colors, print};

pub fn longest(text: &str, cfg: &Config) {
    let window: Window = substring::longest_unique_window(text);
    print::result(window.len);

    if cfg.verbose > 0 {
        print::result(window.slice(text));
    }

    if cfg.quiet > 0 {
        return;
    }
    let run: ColoredString = format!("'{}'", window.slice(text)).color(colors::ACCENT);
    print::aligned_line("Substring", run);
    print::aligned_line("Starts at", window.start.to_string());
}
