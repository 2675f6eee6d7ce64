use crate::bits::Bits;

/// Provides functionality to format a raw count of bits into a human-readable string.
///
/// This is a shorthand for wrapping the value in [`Bits`] and calling `to_string()`.
/// The output scales from bits through bytes up to exabytes using SI units
/// (1 kB = 1000 B), with at most three decimal places.
///
/// # Examples
///
/// ```
/// use bitfmt::traits::FormatBits;
///
/// assert_eq!(0_i64.format_bits(), "0");
/// assert_eq!(7_i64.format_bits(), "7Bit");
/// assert_eq!(8_000_i64.format_bits(), "1kB");
/// assert_eq!((-12_i64).format_bits(), "-1.5B");
/// ```
pub trait FormatBits {
    /// Formats the number of bits with the largest unit that keeps a
    /// positive integral part.
    ///
    /// The output uses one of the following units based on the magnitude:
    /// - bits (1 Bit to 7 Bit), printed without decimals
    /// - bytes (1 B to 999.999 B)
    /// - kilobytes, megabytes, gigabytes, terabytes, petabytes
    /// - exabytes (1 EB and above)
    ///
    /// # Returns
    ///
    /// A `String` with the number directly followed by the unit suffix.
    fn format_bits(&self) -> String;
}

impl FormatBits for i64 {
    fn format_bits(&self) -> String {
        Bits(*self).to_string()
    }
}

impl FormatBits for Bits {
    fn format_bits(&self) -> String {
        self.to_string()
    }
}
