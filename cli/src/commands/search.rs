use kata_common::config::Config;
use kata_core::rotated;
use tracing::warn;

use crate::terminal::print;

pub fn search(nums: &[i32], target: i32, cfg: &Config) {
    if !rotated::is_rotated_ascending(nums) {
        warn!("input is not a rotated ascending array of distinct values; the result may be wrong");
    }

    print::result(rotated::search_index(nums, target));

    if cfg.quiet > 0 {
        return;
    }
    print::aligned_line("Elements", nums.len().to_string());
    print::aligned_line("Pivot", rotated::pivot(nums).to_string());
}
