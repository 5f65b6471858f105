//! # Bitwise
//!
//! A tiny statement language over unbounded bit-vectors.
//!
//! A program is a list of assignments and print statements. Values are
//! written in binary and combined with `and`, `xor` and `or`, which bind in
//! that order from tightest to loosest.
//! ```text
//! x = 101
//! y = 011
//! print x and y
//! ```
//! prints `1`.
//!
//! Run a file with `bitwise program.txt`, check it without running it with
//! `bitwise --check program.txt`, or start an interactive session with no
//! arguments.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
