/// Error type representing failures of the `bitfmt` command line driver.
///
/// Formatting and converting a [`Bits`](crate::Bits) value never fails; these
/// errors only arise while reading and interpreting user input.
#[derive(Debug)]
pub enum BitsError {
    /// Represents underlying I/O errors from the standard library.
    ///
    /// This variant wraps [`std::io::Error`] and is produced when values
    /// cannot be read from standard input.
    IoError(std::io::Error),

    /// An input value is not a signed 64-bit integer.
    ///
    /// Contains the offending input.
    ParseError(String),

    /// An input value multiplied by the selected scale does not fit in 64 bits.
    ///
    /// Contains the offending input.
    OverflowError(String),
}

impl From<std::io::Error> for BitsError {
    /// Converts a [`std::io::Error`] into a [`BitsError`].
    ///
    /// # Examples
    /// ```
    /// use std::io::Read;
    /// use bitfmt::errors::BitsError;
    ///
    /// fn read_stdin() -> Result<String, BitsError> {
    ///     let mut text = String::new();
    ///     std::io::stdin().read_to_string(&mut text)?;
    ///     Ok(text)
    /// }
    /// # let _ = read_stdin;
    /// ```
    fn from(err: std::io::Error) -> Self {
        BitsError::IoError(err)
    }
}

impl std::fmt::Display for BitsError {
    /// # Examples
    /// ```
    /// use bitfmt::errors::BitsError;
    /// let err = BitsError::ParseError("12kB".to_string());
    /// assert_eq!(format!("{}", err), "Parse error: '12kB' is not a bit count");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitsError::IoError(e) => write!(f, "IO error: {}", e),
            BitsError::ParseError(v) => write!(f, "Parse error: '{}' is not a bit count", v),
            BitsError::OverflowError(v) => write!(f, "Overflow error: '{}' is out of range", v),
        }
    }
}

impl std::error::Error for BitsError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`BitsError::IoError`] wraps another error.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BitsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
