//! Custody tracker: the agent-facing layer over the active table.
//!
//! Assigns custody ids from a monotonic counter when bundles go out, frees
//! table slots as acknowledgements (single or aggregate ranges) come back,
//! and feeds the retransmission scanner with due entries oldest-first.

use crate::active_table::ActiveTable;
use crate::errors::{Error, Result};
use strand_core::config::CustodyConfig;
use strand_core::types::{ActiveBundle, Cid, Sid};
use tracing::{debug, trace, warn};

#[derive(Debug)]
pub struct CustodyTracker {
    table: ActiveTable,
    next_cid: u64,
    retx_timeout: u64,
}

impl CustodyTracker {
    pub fn new(config: &CustodyConfig) -> Result<Self> {
        if config.retx_timeout_secs == 0 {
            return Err(Error::param("retx_timeout_secs must be greater than 0"));
        }
        let table = ActiveTable::new(config.active_table_size)?;
        Ok(Self { table, next_cid: 0, retx_timeout: config.retx_timeout_secs })
    }

    /// Assign the next custody id to `sid` and start tracking it. The
    /// retransmission deadline is `now` plus the configured timeout.
    ///
    /// Fullness is probed before a custody id is consumed, so a deferred
    /// send never burns a number out of the sequence.
    pub fn track(&mut self, sid: Sid, now: u64) -> Result<Cid> {
        let cid = Cid(self.next_cid);
        if self.table.available(cid).is_err() {
            warn!(tracked = self.table.len(), "active table full, deferring send");
            return Err(Error::TableFull);
        }
        self.table.add(ActiveBundle::new(cid, sid, now.saturating_add(self.retx_timeout)), false)?;
        self.next_cid = self.next_cid.wrapping_add(1);
        debug!(%cid, %sid, "tracking bundle");
        Ok(cid)
    }

    /// Process a custody acknowledgement: stop tracking `cid` and hand the
    /// bundle back so the caller can release its storage.
    pub fn acknowledge(&mut self, cid: Cid) -> Result<ActiveBundle> {
        let bundle = self.table.remove(cid)?;
        debug!(%cid, sid = %bundle.sid, "custody acknowledged");
        Ok(bundle)
    }

    /// Process an aggregate custody signal fill: acknowledge the contiguous
    /// run of `count` custody ids starting at `first`. Ids no longer
    /// tracked are skipped. Returns how many entries were freed.
    pub fn acknowledge_range(&mut self, first: Cid, count: u64) -> usize {
        let mut freed = 0;
        for off in 0..count {
            let cid = Cid(first.0.wrapping_add(off));
            match self.table.remove(cid) {
                Ok(_) => freed += 1,
                Err(_) => trace!(%cid, "range acknowledgement skipped untracked cid"),
            }
        }
        if freed > 0 {
            debug!(first = %first, count, freed, "range acknowledged");
        }
        freed
    }

    /// The oldest tracked bundle, if its retransmission deadline has passed.
    /// Non-mutating; the scanner decides what to do with it.
    pub fn due(&self, now: u64) -> Option<ActiveBundle> {
        let bundle = self.table.oldest().ok()?;
        (bundle.retx_time <= now).then(|| *bundle)
    }

    /// Re-arm a bundle the scanner just retransmitted: fresh deadline, and
    /// the entry moves to the newest end of the age order so the scanner
    /// sees the next-oldest candidate first.
    pub fn retransmitted(&mut self, bundle: ActiveBundle, now: u64) -> Result<()> {
        let rearmed = ActiveBundle { retx_time: now.saturating_add(self.retx_timeout), ..bundle };
        self.table.add(rearmed, true)?;
        debug!(cid = %bundle.cid, "re-armed after retransmit");
        Ok(())
    }

    /// Whether another bundle can be tracked right now.
    pub fn available(&self) -> bool {
        self.table.available(Cid(self.next_cid)).is_ok()
    }

    /// Number of bundles currently awaiting acknowledgement.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Age-ordered view of everything in flight, oldest first.
    pub fn iter(&self) -> crate::active_table::Iter<'_> {
        self.table.iter()
    }
}
