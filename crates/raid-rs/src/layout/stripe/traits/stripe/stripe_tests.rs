use crate::config::{ArrayConfig, RaidLevel};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

struct DummyStripe(ArrayConfig);

impl Stripe for DummyStripe {
    fn config(&self) -> &ArrayConfig {
        &self.0
    }
    fn growth(&self, _symbols: usize) -> Vec<usize> {
        vec![0; self.0.num_disks()]
    }
    fn write(&self, _disks: &mut [Disk], _data: &[u8]) {}
    fn validate(&self, _disks: &[Disk]) -> crate::error::Result<()> {
        Ok(())
    }
}

#[test]
fn default_as_restore_is_none_for_concrete_type() {
    let s = DummyStripe(ArrayConfig::new(RaidLevel::Raid0, 3).unwrap());
    assert!(s.as_restore().is_none());
}
