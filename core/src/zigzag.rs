//! # Zigzag Conversion
//!
//! Writes a string down and diagonally up across a fixed number of rows, then reads
//! the rows top to bottom. With three rows, `"PAYPALISHIRING"` is laid out as:
//!
//! ```text
//! P   A   H   N
//! A P L S I I G
//! Y   I   R
//! ```
//!
//! and reads back as `"PAHNAPLSIIGYIR"`.

use std::num::NonZeroUsize;

/// Re-reads `s` row by row after laying it out in a zigzag over `rows` rows.
pub fn convert(s: &str, rows: NonZeroUsize) -> String {
    if rows.get() == 1 {
        return s.to_string();
    }
    rows_of(s, rows).concat()
}

/// Row buffers of the zigzag layout, top row first.
pub fn rows(s: &str, rows: NonZeroUsize) -> Vec<String> {
    if rows.get() == 1 {
        return vec![s.to_string()];
    }
    rows_of(s, rows)
}

fn rows_of(s: &str, rows: NonZeroUsize) -> Vec<String> {
    let last: usize = rows.get() - 1;
    let mut buffers: Vec<String> = vec![String::new(); rows.get()];
    let mut row: usize = 0;
    let mut down: bool = false;

    for c in s.chars() {
        buffers[row].push(c);
        if row == 0 || row == last {
            down = !down;
        }
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }
    buffers
}

/// Drawn in place of whitespace from the input, which would otherwise look like an
/// empty cell.
pub const VISIBLE_SPACE: char = '␣';

/// Renders the zigzag as text, one line per row.
///
/// Columns are separated by a single space and trailing empty cells are trimmed.
/// Whitespace characters of `s` are drawn as [`VISIBLE_SPACE`], so every input
/// character keeps a visible cell.
pub fn grid(s: &str, rows: NonZeroUsize) -> Vec<String> {
    let height: usize = rows.get();
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return vec![String::new(); height];
    }

    let cells: Vec<(usize, usize)> = (0..chars.len()).map(|idx| cell(idx, height)).collect();
    let width: usize = cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
    let mut canvas: Vec<Vec<char>> = vec![vec![' '; width]; height];

    for (&c, &(row, col)) in chars.iter().zip(cells.iter()) {
        canvas[row][col] = if c.is_whitespace() { VISIBLE_SPACE } else { c };
    }

    canvas
        .into_iter()
        .map(|line| {
            let joined: Vec<String> = line.iter().map(char::to_string).collect();
            joined.join(" ").trim_end().to_string()
        })
        .collect()
}

/// Row and column of the character at `idx` in a zigzag of `height` rows.
fn cell(idx: usize, height: usize) -> (usize, usize) {
    if height == 1 {
        return (0, idx);
    }
    let cycle: usize = 2 * (height - 1);
    let block: usize = idx / cycle;
    let pos: usize = idx % cycle;
    let base_col: usize = block * (height - 1);

    if pos < height {
        (pos, base_col)
    } else {
        (cycle - pos, base_col + pos - (height - 1))
    }
}
