use std::ops::{Add, Mul, Neg, Sub};

/// A signed quantity of bits.
///
/// Sizes are formatted using the IEEE / SI convention, where a kilobyte is
/// 1000 bytes rather than 1024. Any `i64` is a valid quantity, including
/// negative values.
///
/// # Examples
///
/// ```
/// use bitfmt::{Bits, BYTE, GB};
///
/// let size = 5 * GB;
/// assert_eq!(size.gigabytes(), 5.0);
/// assert_eq!(Bits::new(12).bytes(), 1.5);
/// assert_eq!((BYTE * 3).to_string(), "3B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bits(pub i64);

pub const BIT: Bits = Bits(1);
pub const BYTE: Bits = Bits(8 * BIT.0);
// https://en.wikipedia.org/wiki/Orders_of_magnitude_(data)
pub const KB: Bits = Bits(1000 * BYTE.0);
pub const MB: Bits = Bits(1000 * KB.0);
pub const GB: Bits = Bits(1000 * MB.0);
pub const TB: Bits = Bits(1000 * GB.0);
pub const PB: Bits = Bits(1000 * TB.0);
pub const EB: Bits = Bits(1000 * PB.0);

impl Bits {
    pub const fn new(bits: i64) -> Self {
        Bits(bits)
    }

    /// Returns the raw number of bits.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the size as a floating point number of bytes.
    pub fn bytes(self) -> f64 {
        self.scaled(BYTE, 8.0)
    }

    /// Returns the size as a floating point number of kilobytes.
    pub fn kilobytes(self) -> f64 {
        self.scaled(KB, 8.0 * 1e3)
    }

    /// Returns the size as a floating point number of megabytes.
    pub fn megabytes(self) -> f64 {
        self.scaled(MB, 8.0 * 1e6)
    }

    /// Returns the size as a floating point number of gigabytes.
    pub fn gigabytes(self) -> f64 {
        self.scaled(GB, 8.0 * 1e9)
    }

    // Whole units first so large counts keep their integral precision;
    // `/` and `%` both truncate towards zero.
    fn scaled(self, unit: Bits, bits_per_unit: f64) -> f64 {
        let whole = self.0 / unit.0;
        let rest = self.0 % unit.0;
        whole as f64 + rest as f64 / bits_per_unit
    }
}

impl From<i64> for Bits {
    fn from(bits: i64) -> Self {
        Bits(bits)
    }
}

impl From<Bits> for i64 {
    fn from(bits: Bits) -> Self {
        bits.0
    }
}

impl Mul<Bits> for i64 {
    type Output = Bits;

    fn mul(self, unit: Bits) -> Bits {
        Bits(self * unit.0)
    }
}

impl Mul<i64> for Bits {
    type Output = Bits;

    fn mul(self, count: i64) -> Bits {
        Bits(self.0 * count)
    }
}

impl Add for Bits {
    type Output = Bits;

    fn add(self, rhs: Bits) -> Bits {
        Bits(self.0 + rhs.0)
    }
}

impl Sub for Bits {
    type Output = Bits;

    fn sub(self, rhs: Bits) -> Bits {
        Bits(self.0 - rhs.0)
    }
}

impl Neg for Bits {
    type Output = Bits;

    fn neg(self) -> Bits {
        Bits(-self.0)
    }
}
