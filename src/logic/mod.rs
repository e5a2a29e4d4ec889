//! Two-level logic minimization over truth-table strings.

pub mod cube;
pub mod minimize;
pub mod truth_table;

pub use cube::{Cover, Cube};
pub use minimize::{verify_cover, Espresso, Minimizer};
pub use truth_table::{Output, TruthTable};

/// The two 6-variable tables minimized when no table is given.
pub const BUILTIN_TABLES: [&str; 2] = [
    "10010000111111110---------------11-111--00-0--------------------",
    "-00-0000--------1-----------------------00-0--------------------",
];

/// Default variable prefix used when rendering expressions.
pub const DEFAULT_VAR: &str = "x";
