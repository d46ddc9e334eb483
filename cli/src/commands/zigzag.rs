use std::num::NonZeroUsize;

use kata_common::config::Config;
use kata_core::zigzag;
use tracing::debug;

use crate::terminal::print;

pub fn zigzag(text: &str, rows: NonZeroUsize, grid: bool, cfg: &Config) {
    let converted: String = zigzag::convert(text, rows);
    print::result(&converted);

    if grid {
        for line in zigzag::grid(text, rows) {
            print::result(line);
        }
    }

    if cfg.verbose > 0 {
        for (idx, row) in zigzag::rows(text, rows).iter().enumerate() {
            debug!("row {idx}: {row}");
        }
    }
}
