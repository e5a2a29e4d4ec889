use anyhow::{bail, Result};

/// Widest memory word a generated value can occupy.
pub const MAX_DATA_WIDTH: u32 = 128;

/// Largest accepted entry-count exponent; the whole image is built in memory.
pub const MAX_ENTRY_EXPONENT: u32 = 24;

/// Validated memory geometry used to size and bound a random image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemParams {
    /// Address bus width in bits
    pub address_width: u32,
    /// Memory word width in bits
    pub data_width: u32,
    /// Byte-enable width, always a power of two
    pub strobe_width: u32,
}

impl MemParams {
    /// Validate raw operator input and build the parameter set.
    ///
    /// Rejects non-positive widths, a strobe width that is not a power of
    /// two, data widths above [`MAX_DATA_WIDTH`] and any geometry whose
    /// entry-count exponent falls outside `0..=MAX_ENTRY_EXPONENT`.
    pub fn new(address_width: i64, data_width: i64, strobe_width: i64) -> Result<Self> {
        if address_width <= 0 {
            bail!("Address width must be positive, got {address_width}");
        }
        if data_width <= 0 {
            bail!("Data width must be positive, got {data_width}");
        }
        if strobe_width <= 0 {
            bail!("Strobe width must be positive, got {strobe_width}");
        }
        if data_width > MAX_DATA_WIDTH as i64 {
            bail!("Data width {data_width} exceeds the supported maximum of {MAX_DATA_WIDTH} bits");
        }
        if address_width > u32::MAX as i64 || strobe_width > u32::MAX as i64 {
            bail!("Address width {address_width} or strobe width {strobe_width} is out of range");
        }

        let strobe_width = strobe_width as u32;
        if !strobe_width.is_power_of_two() {
            bail!("Strobe width must be a power of two, got {strobe_width}");
        }

        let exponent = address_width - 1 - strobe_width.trailing_zeros() as i64;
        if exponent < 0 {
            bail!(
                "Address width {address_width} is too small for strobe width {strobe_width} \
                 (entry count exponent {exponent})"
            );
        }
        if exponent > MAX_ENTRY_EXPONENT as i64 {
            bail!(
                "Entry count 2^{exponent} is too large, \
                 the exponent may be at most {MAX_ENTRY_EXPONENT}"
            );
        }

        Ok(Self {
            address_width: address_width as u32,
            data_width: data_width as u32,
            strobe_width,
        })
    }

    /// `address_width - 1 - log2(strobe_width)`; never negative once validated.
    pub fn entry_exponent(&self) -> u32 {
        self.address_width - 1 - self.strobe_width.trailing_zeros()
    }

    /// Number of low/high value pairs in the image.
    pub fn entry_count(&self) -> u64 {
        1u64 << self.entry_exponent()
    }

    /// Total number of generated words (two per entry).
    pub fn word_count(&self) -> u64 {
        self.entry_count() * 2
    }

    /// `2^data_width - 1`
    pub fn high_bound(&self) -> u128 {
        if self.data_width >= MAX_DATA_WIDTH {
            u128::MAX
        } else {
            (1u128 << self.data_width) - 1
        }
    }

    /// Split point shared by both ranges, `high_bound / 2` truncated.
    pub fn midpoint(&self) -> u128 {
        self.high_bound() / 2
    }
}
