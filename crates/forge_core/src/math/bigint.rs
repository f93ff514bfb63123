//! Fixed-width 128-bit unsigned arithmetic.
//!
//! Blum-Blum-Shub squares a state that can reach `n - 1` where `n` is a
//! product of two 64-bit primes. The square needs 256 bits before reduction,
//! so [`BigInt128`] carries a widening multiply and a shift-subtract
//! remainder over the 256-bit intermediate.

use std::fmt;

const LOW_MASK: u128 = u64::MAX as u128;

/// 128-bit unsigned integer with modular squaring.
///
/// A thin newtype over `u128`; ordinary arithmetic is delegated to the
/// primitive, the type exists to own the 256-bit modular operations.
///
/// # Examples
/// ```
/// use forge_core::math::BigInt128;
///
/// let n = BigInt128::from(97u64 * 89);
/// let x = BigInt128::from(1234u64);
/// assert_eq!(x.square_mod(n).value(), (1234u128 * 1234) % (97 * 89));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BigInt128(u128);

impl BigInt128 {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(1);

    /// Wraps a raw `u128`.
    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw value.
    #[inline]
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Low 64 bits.
    #[inline]
    pub const fn low_u64(self) -> u64 {
        self.0 as u64
    }

    /// Full 256-bit product as `(high, low)` halves.
    pub fn widening_mul(self, rhs: Self) -> (u128, u128) {
        let (a_hi, a_lo) = (self.0 >> 64, self.0 & LOW_MASK);
        let (b_hi, b_lo) = (rhs.0 >> 64, rhs.0 & LOW_MASK);

        let p00 = a_lo * b_lo;
        let p01 = a_lo * b_hi;
        let p10 = a_hi * b_lo;
        let p11 = a_hi * b_hi;

        // Middle column cannot overflow: three terms each below 2^64.
        let mid = (p00 >> 64) + (p01 & LOW_MASK) + (p10 & LOW_MASK);
        let low = (p00 & LOW_MASK) | ((mid & LOW_MASK) << 64);
        let high = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
        (high, low)
    }

    /// `(self * rhs) mod modulus`.
    ///
    /// Returns zero for a zero modulus.
    pub fn mul_mod(self, rhs: Self, modulus: Self) -> Self {
        if modulus.0 == 0 {
            return Self::ZERO;
        }
        let (high, low) = self.widening_mul(rhs);
        Self(reduce_wide(high, low, modulus.0))
    }

    /// `self^2 mod modulus`.
    #[inline]
    pub fn square_mod(self, modulus: Self) -> Self {
        self.mul_mod(self, modulus)
    }

    /// `(self + rhs) mod modulus` without intermediate overflow.
    pub fn add_mod(self, rhs: Self, modulus: Self) -> Self {
        if modulus.0 == 0 {
            return Self::ZERO;
        }
        let a = self.0 % modulus.0;
        let b = rhs.0 % modulus.0;
        let gap = modulus.0 - a;
        if b >= gap {
            Self(b - gap)
        } else {
            Self(a + b)
        }
    }

    /// `self mod modulus`, zero for a zero modulus.
    #[inline]
    pub fn rem(self, modulus: Self) -> Self {
        if modulus.0 == 0 {
            Self::ZERO
        } else {
            Self(self.0 % modulus.0)
        }
    }

    /// Greatest common divisor by Euclid's algorithm.
    pub fn gcd(self, other: Self) -> Self {
        let (mut a, mut b) = (self.0, other.0);
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        Self(a)
    }
}

/// Reduces the 256-bit value `high · 2^128 + low` modulo `m`.
///
/// Shift-subtract over the 128 bits of `low`, starting from `high mod m`.
/// The running remainder stays below `m` so one conditional subtraction per
/// step suffices; the bit shifted out of position 127 is tracked as a carry.
fn reduce_wide(high: u128, low: u128, m: u128) -> u128 {
    let mut r = high % m;
    for i in (0..128).rev() {
        let carry = r >> 127;
        r = (r << 1) | ((low >> i) & 1);
        if carry == 1 || r >= m {
            r = r.wrapping_sub(m);
        }
    }
    r
}

impl From<u64> for BigInt128 {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl From<u128> for BigInt128 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for BigInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for BigInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_widening_mul_max() {
        let max = BigInt128::new(u128::MAX);
        let (high, low) = max.widening_mul(max);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(high, u128::MAX - 1);
        assert_eq!(low, 1);
    }

    #[test]
    fn test_square_mod_near_full_width_modulus() {
        // n = (2^64 - 189)(2^64 - 257)
        let n = BigInt128::new(0xffff_ffff_ffff_fe42_0000_0000_0000_bdbd);
        let x = BigInt128::new(n.value() - 1);
        // (n - 1)^2 = 1 (mod n)
        assert_eq!(x.square_mod(n), BigInt128::ONE);
    }

    #[test]
    fn test_add_mod_no_overflow() {
        let m = BigInt128::new(u128::MAX - 10);
        let a = BigInt128::new(u128::MAX - 12);
        let b = BigInt128::new(5);
        assert_eq!(a.add_mod(b, m).value(), 3);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(BigInt128::from(84u64).gcd(BigInt128::from(36u64)).value(), 12);
        assert_eq!(BigInt128::from(17u64).gcd(BigInt128::ZERO).value(), 17);
    }

    #[test]
    fn test_zero_modulus() {
        let x = BigInt128::from(99u64);
        assert_eq!(x.mul_mod(x, BigInt128::ZERO), BigInt128::ZERO);
        assert_eq!(x.rem(BigInt128::ZERO), BigInt128::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_mul_mod_matches_native_for_64_bit_operands(
            a in any::<u64>(),
            b in any::<u64>(),
            m in 1u64..,
        ) {
            let expected = ((a as u128) * (b as u128)) % (m as u128);
            let got = BigInt128::from(a).mul_mod(BigInt128::from(b), BigInt128::from(m));
            prop_assert_eq!(got.value(), expected);
        }

        #[test]
        fn prop_mul_mod_below_modulus(a in any::<u128>(), b in any::<u128>(), m in 1u128..) {
            let r = BigInt128::new(a).mul_mod(BigInt128::new(b), BigInt128::new(m));
            prop_assert!(r.value() < m);
        }
    }
}
