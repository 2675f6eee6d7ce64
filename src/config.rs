use crate::args::{Args, Output, Scale};
use crate::bits::{Bits, BIT, BYTE, EB, GB, KB, MB, PB, TB};
use crate::errors::BitsError;
use std::error::Error;
use std::io::{self, BufRead};

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `values` - Raw inputs, each expected to be a signed integer count
/// * `scale` - Unit every input is multiplied by before formatting
/// * `output` - Whether to print the size string or a numeric magnitude
/// * `verbose` - Bool to determine if per-value details are logged
///
#[derive(Clone, Debug)]
pub struct Config {
    pub values: Vec<String>,
    pub scale: Bits,
    pub output: Output,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Details
    ///
    /// Positional values are taken as given. When there are none, values are
    /// read from standard input, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if standard input cannot be read.
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        let values = if args.values.is_empty() {
            log::debug!("No values provided as arguments, reading from stdin");
            read_values(io::stdin().lock())?
        } else {
            args.values.clone()
        };

        Ok(Config {
            values,
            scale: scale_unit(args.scale),
            output: args.output,
            verbose: args.verbose,
        })
    }
}

/// Collects one value per line, skipping blank lines.
pub fn read_values<R: BufRead>(reader: R) -> Result<Vec<String>, BitsError> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            values.push(trimmed.to_string());
        }
    }
    Ok(values)
}

pub fn scale_unit(scale: Scale) -> Bits {
    match scale {
        Scale::Bit => BIT,
        Scale::Byte => BYTE,
        Scale::Kb => KB,
        Scale::Mb => MB,
        Scale::Gb => GB,
        Scale::Tb => TB,
        Scale::Pb => PB,
        Scale::Eb => EB,
    }
}
