use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

pub const ADDR_PROMPT: &str = "Please input the address width: ";
pub const DATA_PROMPT: &str = "Please input the data width: ";
pub const STRB_PROMPT: &str = "Please input the strb width: ";

/// Print `prompt`, read one line and parse it as a base-10 integer.
///
/// Surrounding whitespace is ignored. A malformed answer or end of input
/// is an error; there is no retry.
pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i64> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Unexpected end of input while waiting for: {}", prompt.trim());
    }

    let answer = line.trim();
    answer
        .parse::<i64>()
        .with_context(|| format!("Invalid integer {answer:?} for: {}", prompt.trim()))
}

/// Raw widths, each filled from flags, config or a prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawWidths {
    pub address_width: Option<i64>,
    pub data_width: Option<i64>,
    pub strobe_width: Option<i64>,
}

impl RawWidths {
    /// Prompt for every width still missing, in address, data, strobe order.
    pub fn complete<R: BufRead, W: Write>(
        self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(i64, i64, i64)> {
        let address_width = match self.address_width {
            Some(v) => v,
            None => prompt_int(input, output, ADDR_PROMPT)?,
        };
        let data_width = match self.data_width {
            Some(v) => v,
            None => prompt_int(input, output, DATA_PROMPT)?,
        };
        let strobe_width = match self.strobe_width {
            Some(v) => v,
            None => prompt_int(input, output, STRB_PROMPT)?,
        };
        Ok((address_width, data_width, strobe_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompts_in_order() {
        let mut input = Cursor::new("4\n 8 \n2\n");
        let mut output = Vec::new();
        let widths = RawWidths::default()
            .complete(&mut input, &mut output)
            .unwrap();

        assert_eq!(widths, (4, 8, 2));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{ADDR_PROMPT}{DATA_PROMPT}{STRB_PROMPT}")
        );
    }

    #[test]
    fn test_only_missing_widths_are_prompted() {
        let mut input = Cursor::new("16\n");
        let mut output = Vec::new();
        let widths = RawWidths {
            address_width: Some(10),
            data_width: None,
            strobe_width: Some(4),
        }
        .complete(&mut input, &mut output)
        .unwrap();

        assert_eq!(widths, (10, 16, 4));
        assert_eq!(String::from_utf8(output).unwrap(), DATA_PROMPT);
    }

    #[test]
    fn test_non_integer_aborts() {
        let mut input = Cursor::new("4\nabc\n2\n");
        let mut output = Vec::new();
        let err = RawWidths::default()
            .complete(&mut input, &mut output)
            .unwrap_err();
        assert!(err.to_string().contains("abc"));
        // The strobe prompt is never shown
        assert!(!String::from_utf8(output).unwrap().contains(STRB_PROMPT));
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_int(&mut input, &mut output, ADDR_PROMPT).is_err());
    }
}
