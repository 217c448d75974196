use crate::error::{RaidError, Result};
use crate::layout::stripe::raid1::RAID1;
use crate::layout::stripe::traits::restore::{Rebuilt, Restore};
use crate::retention::disk::Disk;
use crate::retention::failure::FailureSet;

impl Restore for RAID1 {
    fn check(&self, failed: &FailureSet) -> Result<()> {
        for i in failed.iter() {
            let mirror = self.mirror_of(i);
            if failed.contains(mirror) {
                return Err(RaidError::tolerance(
                    self.config.level(),
                    &failed.to_vec(),
                    format!("disk {i} and its mirror disk {mirror} are both failed"),
                ));
            }
        }
        Ok(())
    }

    fn restore(&self, disks: &[Disk], failed: &FailureSet) -> Result<Vec<Rebuilt>> {
        Ok(failed
            .iter()
            .map(|i| Rebuilt {
                disk: i,
                blocks: disks[self.mirror_of(i)].blocks().to_vec(),
            })
            .collect())
    }
}
