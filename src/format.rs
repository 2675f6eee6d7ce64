use std::fmt;

use crate::bits::{Bits, BYTE, EB, GB, KB, MB, PB, TB};

// Largest rendering is "-999.999kB" (or any other two-letter unit).
const BUF_LEN: usize = 10;

// Digits kept after the decimal point.
const PRECISION: u32 = 3;

/// The unit a [`Bits`] value is displayed in.
///
/// Variants are ordered from smallest to largest, so tiers can be compared
/// directly. `Exabyte` is the top tier and catches every magnitude from one
/// exabyte upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
}

impl Unit {
    const LADDER: [Unit; 8] = [
        Unit::Bit,
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
    ];

    /// Selects the tier for an unsigned magnitude in bits: the first tier,
    /// in ascending order, whose upper limit lies above the magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfmt::Unit;
    ///
    /// assert_eq!(Unit::for_magnitude(7), Unit::Bit);
    /// assert_eq!(Unit::for_magnitude(8), Unit::Byte);
    /// assert_eq!(Unit::for_magnitude(u64::MAX), Unit::Exabyte);
    /// ```
    pub fn for_magnitude(magnitude: u64) -> Unit {
        Unit::LADDER
            .into_iter()
            .find(|unit| unit.limit().map_or(true, |limit| magnitude < limit))
            .unwrap_or(Unit::Exabyte)
    }

    /// The suffix appended to a rendered value, e.g. `"kB"`.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Bit => "Bit",
            Unit::Byte => "B",
            Unit::Kilobyte => "kB",
            Unit::Megabyte => "MB",
            Unit::Gigabyte => "GB",
            Unit::Terabyte => "TB",
            Unit::Petabyte => "PB",
            Unit::Exabyte => "EB",
        }
    }

    // Exclusive upper bound in bits, i.e. the next tier's threshold.
    fn limit(self) -> Option<u64> {
        let next = match self {
            Unit::Bit => BYTE,
            Unit::Byte => KB,
            Unit::Kilobyte => MB,
            Unit::Megabyte => GB,
            Unit::Gigabyte => TB,
            Unit::Terabyte => PB,
            Unit::Petabyte => EB,
            Unit::Exabyte => return None,
        };
        Some(next.get() as u64)
    }

    // Bytes per unit.
    fn scale(self) -> u64 {
        match self {
            Unit::Bit | Unit::Byte => 1,
            Unit::Kilobyte => 1_000,
            Unit::Megabyte => 1_000_000,
            Unit::Gigabyte => 1_000_000_000,
            Unit::Terabyte => 1_000_000_000_000,
            Unit::Petabyte => 1_000_000_000_000_000,
            Unit::Exabyte => 1_000_000_000_000_000_000,
        }
    }
}

impl Bits {
    /// Returns the unit this value is displayed in. Zero maps to [`Unit::Bit`].
    pub fn unit(self) -> Unit {
        Unit::for_magnitude(self.get().unsigned_abs())
    }
}

impl fmt::Display for Bits {
    /// Formats the quantity using the largest unit that has a positive number
    /// before the decimal. At most three decimal places are printed, trailing
    /// zeros are dropped and digits beyond the third are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitfmt::{Bits, BIT, BYTE, KB, MB};
    ///
    /// assert_eq!(Bits::new(0).to_string(), "0");
    /// assert_eq!(Bits::new(5).to_string(), "5Bit");
    /// assert_eq!((BYTE + 4 * BIT).to_string(), "1.5B");
    /// assert_eq!((KB - BIT).to_string(), "999.875B");
    /// assert_eq!((-2 * MB).to_string(), "-2MB");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.get() == 0 {
            return f.pad("0");
        }

        let mut buf = [0u8; BUF_LEN];
        let magnitude = self.get().unsigned_abs();
        let unit = Unit::for_magnitude(magnitude);

        let suffix = unit.suffix().as_bytes();
        let mut w = buf.len() - suffix.len();
        buf[w..].copy_from_slice(suffix);

        w = if unit == Unit::Bit {
            fmt_int(&mut buf[..w], magnitude)
        } else {
            let fixed = fixed_point(magnitude, unit.scale());
            let (nw, whole) = fmt_frac(&mut buf[..w], fixed, PRECISION);
            fmt_int(&mut buf[..nw], whole)
        };

        if self.get() < 0 {
            w -= 1;
            buf[w] = b'-';
        }

        let text = std::str::from_utf8(&buf[w..]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

/// Converts a magnitude in bits into `scale`-byte units, keeping `PRECISION`
/// fractional digits in the low decimal places. The remainder is truncated.
fn fixed_point(magnitude: u64, scale: u64) -> u64 {
    let bits_per_byte = BYTE.get() as u128;
    let value = u128::from(magnitude) * 10u128.pow(PRECISION)
        / (bits_per_byte * u128::from(scale));
    // Byte tier: magnitude < 8000, so value < 1_000_000. Above it value <= magnitude / 8.
    value as u64
}

/// Writes the fractional part of `v` into the tail of `buf`, omitting
/// trailing zeros and the decimal point itself when every digit is zero.
/// Returns the index of the first written byte and `v` with the fractional
/// digits removed.
fn fmt_frac(buf: &mut [u8], mut v: u64, prec: u32) -> (usize, u64) {
    let mut w = buf.len();
    let mut print = false;
    for _ in 0..prec {
        let digit = v % 10;
        print = print || digit != 0;
        if print {
            w -= 1;
            buf[w] = b'0' + digit as u8;
        }
        v /= 10;
    }
    if print {
        w -= 1;
        buf[w] = b'.';
    }
    (w, v)
}

/// Writes `v` into the tail of `buf` and returns the index of its first digit.
fn fmt_int(buf: &mut [u8], mut v: u64) -> usize {
    let mut w = buf.len();
    loop {
        w -= 1;
        buf[w] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(v: u64) -> (String, u64) {
        let mut buf = [0u8; 8];
        let (w, rest) = fmt_frac(&mut buf, v, PRECISION);
        (String::from_utf8(buf[w..].to_vec()).unwrap(), rest)
    }

    fn int(v: u64) -> String {
        let mut buf = [0u8; 20];
        let w = fmt_int(&mut buf, v);
        String::from_utf8(buf[w..].to_vec()).unwrap()
    }

    #[test]
    fn test_fmt_frac_strips_trailing_zeros() {
        assert_eq!(frac(1500), (".5".to_string(), 1));
        assert_eq!(frac(999_875), (".875".to_string(), 999));
        assert_eq!(frac(3250), (".25".to_string(), 3));
        assert_eq!(frac(10_125), (".125".to_string(), 10));
    }

    #[test]
    fn test_fmt_frac_omits_point_when_all_zero() {
        assert_eq!(frac(2000), (String::new(), 2));
        assert_eq!(frac(0), (String::new(), 0));
    }

    #[test]
    fn test_fmt_frac_keeps_inner_zeros() {
        assert_eq!(frac(1001), (".001".to_string(), 1));
        assert_eq!(frac(1010), (".01".to_string(), 1));
    }

    #[test]
    fn test_fmt_int_writes_at_least_one_digit() {
        assert_eq!(int(0), "0");
        assert_eq!(int(7), "7");
        assert_eq!(int(1152), "1152");
        assert_eq!(int(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_fixed_point_truncates() {
        // 1234567 bytes plus half a byte, in megabytes.
        assert_eq!(fixed_point(1_234_567 * 8 + 4, 1_000_000), 1234);
        assert_eq!(fixed_point(7999, 1), 999_875);
        assert_eq!(fixed_point(u64::MAX, 1_000_000_000_000_000_000), 2305);
    }

    #[test]
    fn test_unit_thresholds() {
        let cases = [
            (BYTE, Unit::Byte),
            (KB, Unit::Kilobyte),
            (MB, Unit::Megabyte),
            (GB, Unit::Gigabyte),
            (TB, Unit::Terabyte),
            (PB, Unit::Petabyte),
            (EB, Unit::Exabyte),
        ];
        for (threshold, unit) in cases {
            let at = threshold.get() as u64;
            assert_eq!(Unit::for_magnitude(at), unit);
            assert!(Unit::for_magnitude(at - 1) < unit);
        }
    }

    #[test]
    fn test_unit_suffixes() {
        let suffixes: Vec<&str> = Unit::LADDER.iter().map(|u| u.suffix()).collect();
        assert_eq!(suffixes, ["Bit", "B", "kB", "MB", "GB", "TB", "PB", "EB"]);
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>8}", Bits::new(12)), "    1.5B");
        assert_eq!(format!("{:<4}|", Bits::new(0)), "0   |");
    }
}
