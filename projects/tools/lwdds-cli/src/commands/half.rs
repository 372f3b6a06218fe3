use crate::error::CliError;
use argh::FromArgs;
use lwdds_half::{int_to_half_as_float, to_f32, to_half_bits};

#[derive(FromArgs, Debug)]
/// Print the half float encoding of each value and the float it decodes back to
#[argh(subcommand, name = "half")]
pub struct HalfCmd {
    /// treat values as integers packed into a half channel
    #[argh(switch)]
    pub int: bool,

    /// values to convert; put negative values after `--`
    #[argh(positional)]
    pub values: Vec<String>,
}

/// One converted value, ready for printing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfRow {
    pub bits: u16,
    pub decoded: f32,
}

/// Converts a float through the clamping half encoder and back.
pub fn convert_float(value: f32) -> HalfRow {
    let bits = to_half_bits(value);
    HalfRow {
        bits,
        decoded: to_f32(bits),
    }
}

/// Packs an integer into a half channel, then re-encodes the float it decodes to.
pub fn convert_int(value: i32) -> HalfRow {
    let decoded = int_to_half_as_float(value);
    HalfRow {
        bits: to_half_bits(decoded),
        decoded,
    }
}

pub fn handle_half_command(cmd: HalfCmd) -> Result<(), CliError> {
    if cmd.values.is_empty() {
        return Err(CliError::InvalidInput("No values given to convert".to_string()));
    }

    for value in &cmd.values {
        let row = if cmd.int {
            let parsed = value
                .parse::<i32>()
                .map_err(|e| CliError::InvalidInput(format!("Invalid integer {value}: {e}")))?;
            convert_int(parsed)
        } else {
            let parsed = value
                .parse::<f32>()
                .map_err(|e| CliError::InvalidInput(format!("Invalid float {value}: {e}")))?;
            convert_float(parsed)
        };

        println!("{value:>14} -> 0x{:04X} -> {}", row.bits, row.decoded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 0x3C00, 1.0)]
    #[case(0.5, 0x3800, 0.5)]
    #[case(70000.0, 0x7BFF, 65504.0)]
    #[case(1.0e-9, 0x0000, 0.0)]
    fn float_rows(#[case] input: f32, #[case] bits: u16, #[case] decoded: f32) {
        let row = convert_float(input);

        assert_eq!(row.bits, bits);
        assert_eq!(row.decoded, decoded);
    }

    #[rstest]
    #[case(0, 0x0400)]
    #[case(5, 0x0405)]
    #[case(30719, 0x7BFF)]
    fn int_rows_keep_the_packed_pattern(#[case] input: i32, #[case] bits: u16) {
        let row = convert_int(input);

        assert_eq!(row.bits, bits);
        assert_eq!(row.decoded, to_f32(bits));
    }

    #[test]
    fn rejects_unparseable_values() {
        let error = handle_half_command(HalfCmd {
            int: true,
            values: vec!["1.5".to_string()],
        })
        .unwrap_err();

        assert!(matches!(error, CliError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_value_list() {
        let error = handle_half_command(HalfCmd {
            int: false,
            values: Vec::new(),
        })
        .unwrap_err();

        assert!(matches!(error, CliError::InvalidInput(_)));
    }
}
