//! Byte arithmetic over GF(2^8) with the RAID6 reduction polynomial.

#[cfg(test)]
mod gf_tests;

/// Low byte of the primitive polynomial `x^8 + x^4 + x^3 + x^2 + 1`.
pub const REDUCTION: u8 = 0x1D;

const EXP_LEN: usize = 512;

/// Tables holds antilog (`exp`) and log tables for generator `2`.
struct Tables {
    exp: [u8; EXP_LEN],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; EXP_LEN];
    let mut log = [0u8; 256];

    let mut x: u8 = 1;
    let mut i = 0usize;
    while i < 255 {
        exp[i] = x;
        log[x as usize] = i as u8;
        x = mul(x, 2);
        i += 1;
    }
    // exp repeats with period 255; the doubled table avoids a modulo in `mul_table`.
    while i < EXP_LEN {
        exp[i] = exp[i - 255];
        i += 1;
    }

    Tables { exp, log }
}

static TABLES: Tables = build_tables();

#[inline]
#[must_use]
/// `add` adds two field elements (XOR).
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

#[must_use]
/// `mul` multiplies two field elements with eight rounds of shift-and-XOR.
///
/// # Arguments
/// * `a` - Left operand.
/// * `b` - Right operand.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut round = 0;
    while round < 8 {
        if b & 1 == 1 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= REDUCTION;
        }
        b >>= 1;
        round += 1;
    }
    product
}

#[inline]
#[must_use]
/// `mul_table` multiplies through the log/antilog tables.
pub fn mul_table(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    TABLES.exp[TABLES.log[a as usize] as usize + TABLES.log[b as usize] as usize]
}

#[inline]
#[must_use]
/// `inverse` returns the multiplicative inverse, or `None` for zero.
pub fn inverse(a: u8) -> Option<u8> {
    if a == 0 {
        return None;
    }
    Some(TABLES.exp[255 - TABLES.log[a as usize] as usize])
}

#[inline]
#[must_use]
/// `div` divides `a` by `b`, or returns `None` when `b` is zero.
pub fn div(a: u8, b: u8) -> Option<u8> {
    let inv = inverse(b)?;
    Some(mul_table(a, inv))
}

#[must_use]
/// `inverse_search` finds the inverse by trying every nonzero element.
///
/// Kept as the reference the table-driven [`inverse`] is checked against.
pub fn inverse_search(a: u8) -> Option<u8> {
    (1..=255u8).find(|&b| mul(a, b) == 1)
}
