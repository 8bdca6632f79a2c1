//! Hash-code helpers backing the built-in [`HashKey`] implementations.
//!
//! The string hash is a single-seed polynomial hash evaluated with Horner's rule modulo a
//! Mersenne prime, which keeps the reduction cheap and the result non-negative and within
//! the signed 32-bit range that [`HashKey`] promises.
//!
//! [`HashKey`]: crate::core::HashKey

/// Mersenne prime `2^31 - 1`. Polynomial hash codes are reduced modulo this value, so they
/// always fit a non-negative `i32`.
pub const MERSENNE_31: u64 = (1 << 31) - 1;

/// Base of the polynomial string hash.
const POLYNOMIAL_BASE: u64 = 131;

/// Folds a 64-bit value into a signed 32-bit hash code.
///
/// XORs the high half into the low half before truncating so that both halves influence
/// the result; plain truncation would map e.g. `k` and `k + 2^32` to the same code.
#[inline]
pub const fn fold_u64(value: u64) -> i32 {
    (value ^ (value >> 32)) as u32 as i32
}

/// Hashes a byte string to a hash code in `[0, 2^31 - 1)`.
///
/// Treats the bytes as coefficients of a polynomial in [`POLYNOMIAL_BASE`] and evaluates it
/// with Horner's rule modulo [`MERSENNE_31`]. Each byte is offset by one so that trailing
/// zero bytes still change the code.
#[inline]
pub fn polynomial_mersenne(bytes: &[u8]) -> i32 {
    let mut acc: u64 = 0;
    for &byte in bytes {
        // acc < 2^31, so acc * base + byte + 1 < 2^39 and never overflows u64.
        acc = (acc * POLYNOMIAL_BASE + byte as u64 + 1) % MERSENNE_31;
    }
    acc as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_u64_mixes_high_half() {
        let low = 0x1234_5678_u64;
        assert_ne!(fold_u64(low), fold_u64(low | (1 << 40)));
    }

    #[test]
    fn test_polynomial_mersenne_is_deterministic_and_in_range() {
        let code = polynomial_mersenne(b"deterministic");
        assert_eq!(code, polynomial_mersenne(b"deterministic"));
        assert!(code >= 0);
    }

    #[test]
    fn test_polynomial_mersenne_distinguishes_trailing_zero_bytes() {
        assert_ne!(polynomial_mersenne(b"ab"), polynomial_mersenne(b"ab\0"));
    }

    #[test]
    fn test_polynomial_mersenne_empty_input() {
        assert_eq!(polynomial_mersenne(b""), 0);
    }
}
