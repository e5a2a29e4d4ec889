use anyhow::{bail, Context, Result};
use espresso_logic::{Cover as EspressoCover, CoverType};

use super::{
    cube::{Cover, Cube},
    truth_table::{Output, TruthTable},
};

/// A two-level (sum of products) logic minimizer.
pub trait Minimizer {
    /// Return a cover that is 1 on every ON point and 0 on every OFF point.
    fn minimize(&self, table: &TruthTable) -> Result<Cover>;
}

/// Minimization through the Espresso heuristic from `espresso-logic`.
///
/// ON points are fed as `1` outputs and don't-care points as `-` outputs of
/// an `FD` cover; the minimized cubes are mapped back into a [`Cover`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Espresso;

fn point_inputs(point: u32, num_vars: u32) -> Vec<Option<bool>> {
    (0..num_vars).map(|i| Some(point & (1u32 << i) != 0)).collect()
}

fn cube_from_inputs(inputs: &[Option<bool>]) -> Cube {
    let mut cube = Cube { mask: 0, value: 0 };
    for (i, literal) in inputs.iter().enumerate() {
        if let Some(positive) = literal {
            cube.mask |= 1u32 << i;
            if *positive {
                cube.value |= 1u32 << i;
            }
        }
    }
    cube
}

impl Minimizer for Espresso {
    fn minimize(&self, table: &TruthTable) -> Result<Cover> {
        let num_vars = table.num_vars();
        let on: Vec<u32> = table.on_set().collect();
        if on.is_empty() {
            return Ok(Cover::new(num_vars, Vec::new()));
        }

        let mut cover = EspressoCover::new(CoverType::FD);
        for point in &on {
            cover.add_cube(&point_inputs(*point, num_vars), &[Some(true)]);
        }
        for point in table.dc_set() {
            cover.add_cube(&point_inputs(point, num_vars), &[None]);
        }

        cover.minimize().context("Espresso minimization failed")?;
        log::debug!(
            "Espresso reduced {} ON points over {num_vars} variables to {} cubes",
            on.len(),
            cover.num_cubes()
        );

        let cubes = cover
            .cubes_iter()
            .filter(|(_, outputs)| outputs.iter().any(|out| *out == Some(true)))
            .map(|(inputs, _)| cube_from_inputs(&inputs))
            .collect();
        Ok(Cover::new(num_vars, cubes))
    }
}

/// Check `cover` against every cared-for point of `table`.
pub fn verify_cover(table: &TruthTable, cover: &Cover) -> Result<()> {
    for point in 0..(1u32 << table.num_vars()) {
        match (table.output(point), cover.eval(point)) {
            (Output::One, false) => bail!("Minimized cover misses ON point {point}"),
            (Output::Zero, true) => bail!("Minimized cover includes OFF point {point}"),
            _ => {}
        }
    }
    Ok(())
}
