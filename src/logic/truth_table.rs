use anyhow::{bail, Result};
use std::str::FromStr;

/// Largest variable count a truth-table string may describe.
pub const MAX_VARS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    Zero,
    One,
    DontCare,
}

impl Output {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Output::Zero),
            '1' => Some(Output::One),
            '-' | 'x' | 'X' => Some(Output::DontCare),
            _ => None,
        }
    }
}

/// A single-output boolean function over `num_vars` inputs.
///
/// Output `i` belongs to the input point whose bits spell `i`, with variable
/// 0 as the least significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    num_vars: u32,
    outputs: Vec<Output>,
}

impl TruthTable {
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn output(&self, point: u32) -> Output {
        self.outputs[point as usize]
    }

    fn points_where(&self, wanted: Output) -> impl Iterator<Item = u32> + '_ {
        self.outputs
            .iter()
            .enumerate()
            .filter(move |(_, out)| **out == wanted)
            .map(|(point, _)| point as u32)
    }

    /// Points whose output must be 1.
    pub fn on_set(&self) -> impl Iterator<Item = u32> + '_ {
        self.points_where(Output::One)
    }

    /// Points the minimizer is free to assign.
    pub fn dc_set(&self) -> impl Iterator<Item = u32> + '_ {
        self.points_where(Output::DontCare)
    }
}

impl FromStr for TruthTable {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len < 2 || !len.is_power_of_two() {
            bail!("Truth table length must be a power of two of at least 2, got {len}");
        }
        let num_vars = len.trailing_zeros();
        if num_vars > MAX_VARS {
            bail!("Truth table describes {num_vars} variables, at most {MAX_VARS} are supported");
        }

        let outputs = s
            .chars()
            .enumerate()
            .map(|(i, ch)| match Output::from_char(ch) {
                Some(out) => Ok(out),
                None => bail!("Invalid truth table character {ch:?} at position {i}"),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { num_vars, outputs })
    }
}
