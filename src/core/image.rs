//! Memory image serialization.
//!
//! Three line-oriented layouts are supported:
//! - `hex`: one lowercase hex word per line, at least 8 characters wide.
//!   The default left alignment appends `0` fill after the digits, so
//!   `0xab` is written as `ab000000`.
//! - `coe`: Xilinx coefficient file with a radix/vector header and fixed
//!   width hex words.
//! - `mif`: one fixed width binary word per line, MSB first.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use strum::{Display, EnumString};

/// Default image path when the caller does not pick one.
pub const DEFAULT_OUTPUT: &str = "data.txt";

/// Minimum width of a `hex` line.
pub const HEX_MIN_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImageFormat {
    #[default]
    Hex,
    Coe,
    Mif,
}

/// Where the `0` fill goes on a short `hex` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PadAlign {
    /// Digits first, fill after (`ab000000`)
    #[default]
    Left,
    /// Fill first, digits after (`000000ab`)
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageWriter {
    pub format: ImageFormat,
    /// Word width in bits; sizes `coe` and `mif` words
    pub word_bits: u32,
    /// Only consulted by the `hex` layout
    pub align: PadAlign,
}

impl ImageWriter {
    pub fn new(format: ImageFormat, word_bits: u32) -> Self {
        Self {
            format,
            word_bits,
            align: PadAlign::default(),
        }
    }

    pub fn with_align(mut self, align: PadAlign) -> Self {
        self.align = align;
        self
    }

    /// Render a single word without the trailing newline.
    pub fn format_word(&self, word: u128) -> String {
        match self.format {
            ImageFormat::Hex => {
                let width = HEX_MIN_WIDTH;
                match self.align {
                    PadAlign::Left => format!("{word:0<width$x}"),
                    PadAlign::Right => format!("{word:0>width$x}"),
                }
            }
            ImageFormat::Coe => {
                let digits = self.word_bits.div_ceil(4) as usize;
                format!("{word:0>digits$x}")
            }
            ImageFormat::Mif => {
                let bits = self.word_bits as usize;
                format!("{word:0>bits$b}")
            }
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, words: &[u128]) -> std::io::Result<()> {
        if self.format == ImageFormat::Coe {
            writeln!(out, "memory_initialization_radix = 16;")?;
            writeln!(out, "memory_initialization_vector =")?;
        }
        for word in words {
            writeln!(out, "{}", self.format_word(*word))?;
        }
        out.flush()
    }

    /// Truncate or create `path` and write the whole image into it.
    pub fn dump(&self, path: impl AsRef<Path>, words: &[u128]) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out, words)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!(
            "Wrote {} {} words to {}",
            words.len(),
            self.format,
            path.display()
        );
        Ok(())
    }
}
