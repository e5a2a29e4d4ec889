//! memkit: memory initialization and logic minimization toolkit
//!
//! This crate backs the `memkit` binary used around hardware test benches.
//! It generates random memory images with alternating low/high range words,
//! converts compiled program images into `.coe` / `.mif` initialization
//! files, and minimizes don't-care-annotated truth tables into
//! sum-of-products expressions.
//!
//! The command line frontend and logger setup live in hidden modules to keep
//! implementation details out of the generated documentation.

#[doc(hidden)]
pub mod boot;
#[doc(hidden)]
pub mod cli;
pub mod core;
pub mod logic;

pub use crate::core::{gen_random_data, ImageFormat, ImageWriter, MemParams, PadAlign};
pub use logic::{Cover, Espresso, Minimizer, TruthTable};
