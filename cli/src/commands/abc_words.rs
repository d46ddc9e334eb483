use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::*;
use kata_common::config::Config;
use kata_core::abc;
use tracing::{info_span, warn};

use crate::terminal::{colors, print};

pub fn abc_words(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("abc_words", file = %file.display());
    let _guard = span.enter();

    let text: String = fs::read_to_string(file)
        .with_context(|| format!("failed to read word list '{}'", file.display()))?;

    let mut count: usize = 0;
    for (idx, word) in abc::abc_words(&text).enumerate() {
        print::result(format!("{:2}: {}", idx + 1, word));
        count = idx + 1;
    }

    if count == 0 {
        warn!("no ABC words found in '{}'", file.display());
        return Ok(());
    }

    let total: ColoredString = count.to_string().color(colors::ACCENT).bold();
    let scanned: usize = text.split_whitespace().count();
    print::summary(&format!("{total} ABC words out of {scanned}"), cfg.quiet);
    Ok(())
}
