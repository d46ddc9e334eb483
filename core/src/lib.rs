//! # Kata Core
//!
//! `kata-core` holds small, self-contained algorithm units. Each one is a pure function
//! over borrowed input; none of them shares state with another.
//!
//! ## Units
//! * **[`substring`]**: Longest run of unique characters (sliding window).
//! * **[`zigzag`]**: Zigzag re-reading of a string across a fixed number of rows.
//! * **[`brackets`]**: Balanced bracket validation (stack machine).
//! * **[`rotated`]**: Binary search over a rotated ascending array.
//! * **[`abc`]**: ABC-count checker and ABC-word filter.
//!
//! ## Helper Modules
//! * **[`catalog`]**: Metadata describing every unit above.

pub mod abc;
pub mod brackets;
pub mod catalog;
pub mod rotated;
pub mod substring;
pub mod zigzag;
