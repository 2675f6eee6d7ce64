pub mod args;
pub mod bits;
pub mod config;
pub mod errors;
pub mod format;
pub mod traits;


use std::error::Error;

pub use crate::args::Output;
pub use crate::bits::{Bits, BIT, BYTE, EB, GB, KB, MB, PB, TB};
pub use crate::config::Config;
pub use crate::errors::BitsError;
pub use crate::format::Unit;

/*
Formats every configured value and prints one line per value.
Stops at the first value that cannot be parsed.
 */
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    for value in &config.values {
        let bits = parse_value(value, config.scale)?;
        if config.verbose {
            log::debug!("{} -> {} bits ({:?})", value, bits.get(), bits.unit());
        }
        println!("{}", render(bits, config.output));
    }

    Ok(())
}

/*
Parses a signed integer count (underscores allowed as digit separators) and
multiplies it by scale. Overflowing the 64-bit range is an error.
 */
pub fn parse_value(input: &str, scale: Bits) -> Result<Bits, BitsError> {
    let digits: String = input.trim().chars().filter(|c| *c != '_').collect();
    let count: i64 = digits
        .parse()
        .map_err(|_| BitsError::ParseError(input.to_string()))?;

    count
        .checked_mul(scale.get())
        .map(Bits)
        .ok_or_else(|| BitsError::OverflowError(input.to_string()))
}

/*
Renders bits either as the size string or as a plain number in the requested unit.
 */
pub fn render(bits: Bits, output: Output) -> String {
    match output {
        Output::Text => bits.to_string(),
        Output::Bytes => bits.bytes().to_string(),
        Output::Kb => bits.kilobytes().to_string(),
        Output::Mb => bits.megabytes().to_string(),
        Output::Gb => bits.gigabytes().to_string(),
    }
}
