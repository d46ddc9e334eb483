use kata_common::config::Config;
use kata_core::abc::{AbcCounts, Case, EXAMPLES};
use tracing::debug;

use crate::terminal::print;

pub fn abc(phrases: &[String], ignore_case: bool, cfg: &Config) {
    let case: Case = if ignore_case { Case::Insensitive } else { Case::Sensitive };

    let phrases: Vec<&str> = if phrases.is_empty() {
        EXAMPLES.to_vec()
    } else {
        phrases.iter().map(String::as_str).collect()
    };

    let mut balanced: usize = 0;
    for phrase in &phrases {
        let counts: AbcCounts = AbcCounts::count(phrase, case);
        debug!(phrase, a = counts.a, b = counts.b, c = counts.c, "counted letters");
        if counts.is_balanced() {
            balanced += 1;
        }
        print::result(verdict_line(phrase, counts.is_balanced()));
    }

    print::summary(
        &format!("{balanced} of {} strings are ABC strings", phrases.len()),
        cfg.quiet,
    );
}

fn verdict_line(phrase: &str, is_abc: bool) -> String {
    if is_abc {
        format!("'{phrase}' is an ABC string.")
    } else {
        format!("'{phrase}' is NOT an ABC string.")
    }
}
