use super::*;
use rand::Rng;

#[test]
fn xor_parity_of_ab_is_03() {
    let row = [Block::data(b'A'), Block::data(b'B')];
    assert_eq!(xor_parity(&row), 0x03);
}

#[test]
fn xor_parity_skips_padding_failed_and_parity() {
    let row = [
        Block::data(0x10),
        Block::Padding,
        Block::Failed,
        Block::ParityP(0xFF),
        Block::data(0x01),
    ];
    assert_eq!(xor_parity(&row), 0x11);
}

#[test]
fn q_weights_by_one_based_disk_index() {
    let parity = DualParity::compute([(0, 0x41), (3, 0x42)]);
    assert_eq!(parity.p, 0x41 ^ 0x42);
    assert_eq!(parity.q, gf::mul(0x41, 1) ^ gf::mul(0x42, 4));
}

#[test]
fn residual_removes_known_terms() {
    let full = DualParity::compute([(0, 7), (1, 9), (2, 11)]);
    let known = DualParity::compute([(0, 7), (2, 11)]);
    let r = full.residual(&known);
    assert_eq!(r.p, 9);
    assert_eq!(r.q, gf::mul(9, 2));
}

#[test]
fn solve_from_q_inverts_weighting() {
    for coeff in 1..=255u8 {
        for byte in [0u8, 1, 0x41, 0xFF] {
            assert_eq!(solve_from_q(gf::mul(byte, coeff), coeff), Ok(byte));
        }
    }
    assert!(matches!(
        solve_from_q(5, 0),
        Err(RaidError::DegenerateSolve { .. })
    ));
}

#[test]
fn solve_two_data_recovers_random_pairs() {
    let mut rng = rand::rng();
    for _ in 0..5_000 {
        let a: u8 = rng.random_range(1..=255);
        let mut b: u8 = rng.random_range(1..=255);
        if a == b {
            b = if b == 255 { 1 } else { b + 1 };
        }
        let (x, y): (u8, u8) = (rng.random(), rng.random());
        let residual = DualParity {
            p: x ^ y,
            q: gf::mul(a, x) ^ gf::mul(b, y),
        };
        assert_eq!(solve_two_data(residual, a, b), Ok((x, y)), "a={a} b={b}");
    }
}

#[test]
fn solve_two_data_rejects_equal_coefficients() {
    let residual = DualParity { p: 1, q: 2 };
    assert_eq!(
        solve_two_data(residual, 3, 3),
        Err(RaidError::DegenerateSolve { a: 3, b: 3 })
    );
    assert!(solve_two_data(residual, 3, 0).is_err());
}

#[test]
fn coefficient_is_disk_plus_one() {
    assert_eq!(coefficient(0), 1);
    assert_eq!(coefficient(254), 255);
}
