#![no_main]

use libfuzzer_sys::fuzz_target;
use strand_core::types::{ActiveBundle, Cid, Sid};
use strand_custody::ActiveTable;

// Drive the active table with an arbitrary operation tape and assert the
// cheap cross-structure coherence checks after every step: the entry count
// always matches the age-list walk, and the two walk directions agree.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let cap = (data[0] as usize % 64) + 1;
    let mut table = match ActiveTable::new(cap) {
        Ok(t) => t,
        Err(_) => return,
    };

    let mut i = 1;
    while i + 1 < data.len() {
        let op = data[i];
        let v = data[i + 1] as u64;
        i += 2;
        match op % 4 {
            0 => {
                let _ = table.add(ActiveBundle::new(Cid(v), Sid(v + 1), v), false);
            }
            1 => {
                let _ = table.add(ActiveBundle::new(Cid(v), Sid(v + 1), v), true);
            }
            2 => {
                let _ = table.remove(Cid(v));
            }
            _ => {
                let _ = table.oldest();
            }
        }
        assert_eq!(table.len(), table.iter().count());
    }

    let forward: Vec<ActiveBundle> = table.iter().copied().collect();
    let mut backward: Vec<ActiveBundle> = table.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward);
});
