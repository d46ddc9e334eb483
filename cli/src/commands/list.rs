use kata_common::config::Config;
use kata_core::catalog::Exercise;

use crate::kprint;
use crate::terminal::print;

pub fn list(cfg: &Config) {
    for exercise in Exercise::ALL.iter() {
        print::result(format!("{:<10} {}", exercise.command, exercise));
    }

    if cfg.verbose > 0 {
        kprint!();
        for exercise in Exercise::ALL.iter() {
            print::aligned_line(exercise.command, exercise.title);
        }
    }
}
