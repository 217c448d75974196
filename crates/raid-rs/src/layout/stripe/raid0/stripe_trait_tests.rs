use crate::config::{ArrayConfig, RaidLevel};
use crate::layout::stripe::raid0::RAID0;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

fn layout(disks: usize) -> RAID0 {
    RAID0::new(ArrayConfig::new(RaidLevel::Raid0, disks).unwrap())
}

fn write(layout: &RAID0, data: &[u8]) -> Vec<Disk> {
    let mut disks = vec![Disk::new(); layout.config().num_disks()];
    layout.write(&mut disks, data);
    disks
}

#[test]
fn stripe_write_places_abcde_round_robin() {
    let disks = write(&layout(4), b"ABCDE");
    let rendered: Vec<Vec<String>> = disks.iter().map(Disk::render).collect();
    assert_eq!(rendered, vec![vec!["A", "E"], vec!["B"], vec!["C"], vec!["D"]]);
}

#[test]
fn disk_receives_positions_congruent_to_its_index() {
    let data: Vec<u8> = (0..37u8).map(|i| b'!' + i).collect();
    for n in 2..=6 {
        let disks = write(&layout(n), &data);
        for (d, disk) in disks.iter().enumerate() {
            let expected: Vec<u8> = data.iter().copied().skip(d).step_by(n).collect();
            let got: Vec<u8> = disk.blocks().iter().filter_map(|b| b.data_byte()).collect();
            assert_eq!(got, expected, "disk {d} of {n}");
        }
    }
}

#[test]
fn growth_matches_written_lengths() {
    let l = layout(3);
    for symbols in 0..10 {
        let data = vec![b'a'; symbols];
        let lens: Vec<usize> = write(&l, &data).iter().map(Disk::len).collect();
        assert_eq!(l.growth(symbols), lens);
    }
}

#[test]
fn stripe_as_restore_returns_none() {
    assert!(layout(2).as_restore().is_none());
}
