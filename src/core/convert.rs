//! Conversion of compiled program images into memory initialization files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::image::{ImageFormat, ImageWriter};

/// Width of an instruction/data word in a program image.
pub const WORD_BITS: u32 = 32;

/// Split raw bytes into little-endian 32-bit words.
///
/// A trailing partial word is zero-filled; an empty input yields no words.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u128> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word) as u128
        })
        .collect()
}

pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<u128>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if bytes.len() % 4 != 0 {
        log::warn!(
            "{} is {} bytes long, zero-filling the last word",
            path.display(),
            bytes.len()
        );
    }
    Ok(bytes_to_words(&bytes))
}

/// Input and output paths of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertPaths {
    pub code_bin: PathBuf,
    pub code_data: PathBuf,
    pub inst_coe: PathBuf,
    pub data_coe: PathBuf,
    pub inst_mif: PathBuf,
    pub data_mif: PathBuf,
}

/// Write `inst.coe`, `data.coe`, `data.mif` and `inst.mif`, in that order.
pub fn convert(paths: &ConvertPaths) -> Result<()> {
    let coe = ImageWriter::new(ImageFormat::Coe, WORD_BITS);
    let mif = ImageWriter::new(ImageFormat::Mif, WORD_BITS);

    let inst = read_words(&paths.code_bin)?;
    let data = read_words(&paths.code_data)?;
    log::debug!(
        "Loaded {} instruction words and {} data words",
        inst.len(),
        data.len()
    );

    coe.dump(&paths.inst_coe, &inst)?;
    coe.dump(&paths.data_coe, &data)?;
    mif.dump(&paths.data_mif, &data)?;
    mif.dump(&paths.inst_mif, &inst)?;
    Ok(())
}
