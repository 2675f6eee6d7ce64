use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bit counts to format; read from stdin (one per line) when omitted
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// (optional) Unit every input value is counted in
    #[arg(short = 's', long = "scale", value_enum, default_value_t = Scale::Bit)]
    pub scale: Scale,

    /// (optional) Print a numeric magnitude instead of the size string
    #[arg(short = 'a', long = "as", value_enum, default_value_t = Output::Text)]
    pub output: Output,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Bit,
    Byte,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
    Eb,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    Text,
    Bytes,
    Kb,
    Mb,
    Gb,
}
