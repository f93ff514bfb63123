//! Modular arithmetic over `u64` moduli.

/// Witness bases making Miller-Rabin deterministic for every `u64`.
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// `(a * b) mod m` through a `u128` intermediate.
#[inline]
pub fn mul_mod_u64(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exp mod m` by square-and-multiply.
///
/// Returns zero when `m <= 1`.
///
/// # Examples
/// ```
/// use forge_core::math::modular::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(7, 0, 13), 1);
/// ```
pub fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    if m <= 1 {
        return 0;
    }
    let mut result = 1u64;
    let mut b = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod_u64(result, b, m);
        }
        b = mul_mod_u64(b, b, m);
        exp >>= 1;
    }
    result
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Deterministic Miller-Rabin primality test for the full `u64` range.
///
/// # Examples
/// ```
/// use forge_core::math::modular::is_prime;
///
/// assert!(is_prime(4_279_969_613));
/// assert!(!is_prime(429_496_737));
/// assert!(is_prime(u64::MAX - 188));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MILLER_RABIN_BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &MILLER_RABIN_BASES {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod_u64(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_carmichael_numbers_rejected() {
        for n in [561u64, 1105, 1729, 2465, 2821, 6601, 8911] {
            assert!(!is_prime(n), "{} is composite", n);
        }
    }

    #[test]
    fn test_large_primes_congruent_three_mod_four() {
        let p = u64::MAX - 188;
        let q = u64::MAX - 256;
        assert!(is_prime(p));
        assert!(is_prime(q));
        assert_eq!(p % 4, 3);
        assert_eq!(q % 4, 3);
    }

    #[test]
    fn test_mod_pow_fermat() {
        let p = 4_279_969_613u64;
        assert_eq!(mod_pow(9_999_918, p - 1, p), 1);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(48, 18), 6);
    }
}
