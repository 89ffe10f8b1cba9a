//! Grammar productions, split by kind.
//!
//! - `expr`: expressions, binary operators and call suffixes
//! - `atom`: literals, variables, grouping, blocks, `if`, `while`, `lambda`

mod atom;
mod expr;
