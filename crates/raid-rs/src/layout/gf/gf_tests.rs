use super::*;
use rand::Rng;

#[test]
fn mul_is_commutative_for_all_pairs() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(mul(a, b), mul(b, a), "a={a:#04X} b={b:#04X}");
        }
    }
}

#[test]
fn table_mul_agrees_with_shift_and_xor() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(mul_table(a, b), mul(a, b), "a={a:#04X} b={b:#04X}");
        }
    }
}

#[test]
fn one_is_identity_and_zero_annihilates() {
    for a in 0..=255u8 {
        assert_eq!(mul(a, 1), a);
        assert_eq!(mul(a, 0), 0);
    }
}

#[test]
fn every_nonzero_element_has_an_inverse() {
    for a in 1..=255u8 {
        let inv = inverse(a).expect("nonzero has inverse");
        assert_eq!(mul(a, inv), 1, "a={a:#04X}");
        assert_eq!(Some(inv), inverse_search(a), "table and search disagree");
    }
    assert_eq!(inverse(0), None);
    assert_eq!(inverse_search(0), None);
}

#[test]
fn inverses_are_unique() {
    let mut seen = [false; 256];
    for a in 1..=255u8 {
        let inv = inverse(a).unwrap() as usize;
        assert!(!seen[inv], "{inv:#04X} is the inverse of two elements");
        seen[inv] = true;
    }
}

#[test]
fn mul_distributes_over_xor() {
    let mut rng = rand::rng();
    for _ in 0..20_000 {
        let (a, b, c): (u8, u8, u8) = (rng.random(), rng.random(), rng.random());
        assert_eq!(mul(a, add(b, c)), add(mul(a, b), mul(a, c)));
    }
}

#[test]
fn known_products_match_polynomial_0x11d() {
    assert_eq!(mul(0x80, 2), 0x1D);
    assert_eq!(mul(2, 2), 4);
    assert_eq!(mul(0x53, 0xCA), mul_table(0x53, 0xCA));
}

#[test]
fn div_inverts_mul() {
    for a in 0..=255u8 {
        for b in 1..=255u8 {
            assert_eq!(div(mul(a, b), b), Some(a));
        }
    }
    assert_eq!(div(7, 0), None);
}
