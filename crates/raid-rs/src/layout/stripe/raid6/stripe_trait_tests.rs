use crate::config::{ArrayConfig, RaidLevel};
use crate::layout::block::Block;
use crate::layout::gf;
use crate::layout::stripe::raid6::RAID6;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

fn layout(disks: usize) -> RAID6 {
    RAID6::new(ArrayConfig::new(RaidLevel::Raid6, disks).unwrap())
}

fn write(l: &RAID6, data: &[u8]) -> Vec<Disk> {
    let mut disks = vec![Disk::new(); l.config().num_disks()];
    l.write(&mut disks, data);
    disks
}

#[test]
fn stripe_write_places_p_then_q() {
    let disks = write(&layout(4), b"AB");
    let q = gf::mul(b'A', 3) ^ gf::mul(b'B', 4);
    let row: Vec<Block> = disks.iter().map(|d| d.blocks()[0]).collect();
    assert_eq!(
        row,
        vec![
            Block::ParityP(b'A' ^ b'B'),
            Block::ParityQ(q),
            Block::data(b'A'),
            Block::data(b'B'),
        ]
    );
}

#[test]
fn q_follows_p_and_wraps() {
    let l = layout(4);
    assert_eq!(l.parity_slots(0), (0, 1));
    assert_eq!(l.parity_slots(3), (3, 0));
    assert_eq!(l.parity_slots(5), (1, 2));

    let disks = write(&l, b"ABCDEFGH");
    assert_eq!(disks[3].blocks()[3].to_string().chars().next(), Some('P'));
    assert_eq!(disks[0].blocks()[3].to_string().chars().next(), Some('Q'));
}

#[test]
fn every_row_has_exactly_one_p_and_one_q() {
    let data: Vec<u8> = (0..41u8).collect();
    for n in 4..=8 {
        let disks = write(&layout(n), &data);
        for r in 0..disks[0].len() {
            let ps = disks.iter().filter(|d| matches!(d.blocks()[r], Block::ParityP(_))).count();
            let qs = disks.iter().filter(|d| matches!(d.blocks()[r], Block::ParityQ(_))).count();
            assert_eq!((ps, qs), (1, 1), "row {r} of {n} disks");
        }
    }
}

#[test]
fn padding_contributes_nothing_to_q() {
    let disks = write(&layout(5), b"Z");
    let row: Vec<Block> = disks.iter().map(|d| d.blocks()[0]).collect();
    // P on 0, Q on 1, data on 2 then pads on 3 and 4
    assert_eq!(row[1], Block::ParityQ(gf::mul(b'Z', 3)));
    assert_eq!(row[3], Block::Padding);
    assert_eq!(row[4], Block::Padding);
}

#[test]
fn stripe_as_restore_returns_some() {
    assert!(layout(4).as_restore().is_some());
}
