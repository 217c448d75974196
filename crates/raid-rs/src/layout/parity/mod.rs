//! Parity codecs: single XOR parity (P) and GF(2^8)-weighted dual parity (P+Q).
//!
//! Q weights each data byte by the 1-based index of the disk that holds it.

#[cfg(test)]
mod parity_tests;

use crate::error::{RaidError, Result};
use crate::layout::block::Block;
use crate::layout::gf;

/// `xor_parity` folds every data block of a row into one P byte.
///
/// Padding, failed and parity blocks contribute nothing.
#[must_use]
pub fn xor_parity<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> u8 {
    blocks.into_iter().fold(0, |p, b| p ^ b.xor_term())
}

/// `coefficient` returns the Q weight of a disk.
///
/// # Panics
/// Panics if `disk` is 255 or more; array configuration caps RAID6 below that.
#[must_use]
pub fn coefficient(disk: usize) -> u8 {
    u8::try_from(disk + 1).expect("RAID6 disk index exceeds the Q coefficient range")
}

/// DualParity holds the P and Q bytes of one stripe row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DualParity {
    pub p: u8,
    pub q: u8,
}

impl DualParity {
    /// `accumulate` folds one data byte held on `disk` into both sums.
    pub fn accumulate(&mut self, disk: usize, byte: u8) {
        self.p ^= byte;
        self.q ^= gf::mul(byte, coefficient(disk));
    }

    /// `compute` builds P and Q from `(disk_index, byte)` pairs.
    #[must_use]
    pub fn compute(data: impl IntoIterator<Item = (usize, u8)>) -> Self {
        let mut parity = Self::default();
        for (disk, byte) in data {
            parity.accumulate(disk, byte);
        }
        parity
    }

    /// `residual` strips the contribution of known bytes from stored parity,
    /// leaving the sums of the missing bytes.
    #[must_use]
    pub const fn residual(&self, known: &Self) -> Self {
        Self {
            p: self.p ^ known.p,
            q: self.q ^ known.q,
        }
    }
}

/// `solve_from_q` recovers one data byte from the Q residual alone.
///
/// # Errors
/// Returns [`RaidError::DegenerateSolve`] if the coefficient is zero.
pub fn solve_from_q(q_residual: u8, coeff: u8) -> Result<u8> {
    gf::div(q_residual, coeff).ok_or(RaidError::DegenerateSolve { a: coeff, b: coeff })
}

/// `solve_two_data` recovers two data bytes with coefficients `a` and `b`
/// from the P and Q residuals:
///
/// ```text
///   x ^ y         = residual.p
///   a*x ^ b*y     = residual.q
/// ```
///
/// Dividing the second row by `b` gives a unit-diagonal system with
/// determinant `1 ^ a/b`, which Cramer's rule solves.
///
/// # Errors
/// Returns [`RaidError::DegenerateSolve`] when `a == b` or either is zero.
pub fn solve_two_data(residual: DualParity, a: u8, b: u8) -> Result<(u8, u8)> {
    let degenerate = RaidError::DegenerateSolve { a, b };
    let b_inv = gf::inverse(b).ok_or_else(|| degenerate.clone())?;
    let ratio = gf::mul(a, b_inv);
    let det = 1 ^ ratio;
    let det_inv = gf::inverse(det).ok_or(degenerate)?;

    let q_scaled = gf::mul(residual.q, b_inv);
    let x = gf::mul(residual.p ^ q_scaled, det_inv);
    let y = gf::mul(q_scaled ^ gf::mul(ratio, residual.p), det_inv);
    Ok((x, y))
}
