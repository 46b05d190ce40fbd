//! Arithmetic primitives: gcd, lcm, modular exponentiation, and the
//! extended Euclidean algorithm with its modular inverse.

use num_integer::Integer;

use crate::error::NtError;

/// Greatest common divisor.
///
/// # Example
/// ```
/// assert_eq!(ntcalc_core::arithmetic::gcd(56, 98), 14);
/// ```
#[must_use]
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Least common multiple. `lcm(0, 0)` is 0.
#[must_use]
pub fn lcm(a: u64, b: u64) -> u64 {
    a.lcm(&b)
}

/// Modular exponentiation: `base^exp mod modulus`.
///
/// Binary square-and-multiply with u128 intermediates, so the squaring
/// step cannot overflow for any 64-bit modulus. A zero modulus is
/// rejected before any division.
///
/// # Example
/// ```
/// assert_eq!(ntcalc_core::arithmetic::modpow(4, 13, 497).unwrap(), 445);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn modpow(base: u64, exp: u64, modulus: u64) -> Result<u64, NtError> {
    if modulus == 0 {
        return Err(NtError::ZeroModulus);
    }
    if modulus == 1 {
        return Ok(0);
    }

    let m = u128::from(modulus);
    let mut result: u128 = 1;
    let mut base = u128::from(base) % m;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        exp >>= 1;
        base = base * base % m;
    }

    // result < m <= u64::MAX
    Ok(result as u64)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y == g` where `g = gcd(a, b)`.
#[must_use]
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let e = a.extended_gcd(&b);
    (e.gcd, e.x, e.y)
}

/// Modular multiplicative inverse of `a` modulo `m`, normalized to `[0, m)`.
///
/// `a` and `m` must be coprime; otherwise no inverse exists and
/// [`NtError::NotInvertible`] is returned.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mod_inverse(a: u64, m: u64) -> Result<u64, NtError> {
    if m == 0 {
        return Err(NtError::ZeroModulus);
    }

    let modulus = i128::from(m);
    let (g, x, _) = extended_gcd(i128::from(a) % modulus, modulus);
    if g != 1 {
        return Err(NtError::NotInvertible { a, modulus: m });
    }

    Ok(((x % modulus + modulus) % modulus) as u64)
}
