use super::*;

#[test]
fn display_uses_canonical_tokens() {
    assert_eq!(Block::data(b'A').to_string(), "A");
    assert_eq!(Block::recovered(b'A').to_string(), "41");
    assert_eq!(Block::ParityP(0x03).to_string(), "P(03)");
    assert_eq!(Block::ParityQ(0xAB).to_string(), "Q(AB)");
    assert_eq!(Block::Failed.to_string(), "X");
    assert_eq!(Block::Padding.to_string(), "_");
}

#[test]
fn placeholder_lookalike_bytes_render_as_hex() {
    assert_eq!(Block::data(b'X').to_string(), "58");
    assert_eq!(Block::data(b'_').to_string(), "5F");
    assert_eq!(Block::data(b'X').data_byte(), Some(b'X'));
}

#[test]
fn parse_inverts_display() {
    let blocks = [
        Block::data(b'A'),
        Block::data(b'P'),
        Block::data(b'Q'),
        Block::data(b'7'),
        Block::data(b' '),
        Block::data(0x00),
        Block::data(0xE9),
        Block::data(b'X'),
        Block::data(b'_'),
        Block::recovered(0x00),
        Block::recovered(0xFF),
        Block::ParityP(0x00),
        Block::ParityQ(0xFE),
        Block::Failed,
        Block::Padding,
    ];
    for block in blocks {
        let text = block.to_string();
        let back: Block = text.parse().expect("parse");
        assert_eq!(back, block, "token {text:?}");
    }
}

#[test]
fn parity_tag_is_not_confused_with_data() {
    let p: Block = "P".parse().unwrap();
    assert_eq!(p, Block::data(b'P'));
    let tagged: Block = "P(50)".parse().unwrap();
    assert_eq!(tagged, Block::ParityP(0x50));
    assert!(tagged.is_parity());
    assert!(!p.is_parity());
}

#[test]
fn parse_rejects_malformed_tokens() {
    for bad in ["", "P(0)", "P(GG)", "Q(123)", "R(00)", "ABC", "4G", "\u{100}"] {
        assert!(
            matches!(bad.parse::<Block>(), Err(RaidError::Document(_))),
            "{bad:?} must be rejected"
        );
    }
}

#[test]
fn xor_term_ignores_non_data() {
    assert_eq!(Block::data(0x41).xor_term(), 0x41);
    assert_eq!(Block::ParityP(0x41).xor_term(), 0);
    assert_eq!(Block::Padding.xor_term(), 0);
    assert_eq!(Block::Failed.xor_term(), 0);
}

#[test]
fn serde_uses_text_tokens() {
    let blocks = vec![Block::ParityP(0x03), Block::data(b'A'), Block::Padding];
    let json = serde_json::to_string(&blocks).unwrap();
    assert_eq!(json, r#"["P(03)","A","_"]"#);
    let back: Vec<Block> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, blocks);
}

#[test]
fn recovered_bytes_use_two_uppercase_digits() {
    assert_eq!(Block::recovered(0x03).to_string(), "03");
    assert_eq!(Block::recovered(0xAB).to_string(), "AB");
}
