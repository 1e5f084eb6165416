#![forbid(unsafe_code)]

//! Conformance support for the Strand custody subsystem.
//!
//! Provides [`ModelTable`], an obviously-correct reference model of the
//! active table (a flat age-ordered vector), used by the property suites to
//! cross-check the real implementation over arbitrary operation sequences.

use strand_core::types::{ActiveBundle, Cid};
use strand_custody::{Error, Result};

/// Reference model: the same observable semantics as `ActiveTable`, with no
/// hashing, chaining or displacement. Entries sit in one vector ordered
/// oldest-first.
#[derive(Debug, Clone)]
pub struct ModelTable {
    capacity: usize,
    entries: Vec<ActiveBundle>,
}

impl ModelTable {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: Vec::new() }
    }

    pub fn add(&mut self, bundle: ActiveBundle, overwrite: bool) -> Result<()> {
        if bundle.sid.is_vacant() {
            return Err(Error::param("bundle sid is the reserved vacant sentinel"));
        }
        if let Some(pos) = self.entries.iter().position(|b| b.cid == bundle.cid) {
            if !overwrite {
                return Err(Error::DuplicateCid(bundle.cid));
            }
            self.entries.remove(pos);
            self.entries.push(bundle);
            return Ok(());
        }
        if self.entries.len() == self.capacity {
            return Err(Error::TableFull);
        }
        self.entries.push(bundle);
        Ok(())
    }

    pub fn remove(&mut self, cid: Cid) -> Result<ActiveBundle> {
        match self.entries.iter().position(|b| b.cid == cid) {
            Some(pos) => Ok(self.entries.remove(pos)),
            None => Err(Error::CidNotFound),
        }
    }

    pub fn oldest(&self) -> Result<&ActiveBundle> {
        self.entries.first().ok_or(Error::CidNotFound)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Age order, oldest first.
    pub fn entries(&self) -> &[ActiveBundle] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_core::types::Sid;

    #[test]
    fn model_behaves_like_a_fifo_map() {
        let mut m = ModelTable::new(2);
        m.add(ActiveBundle::new(Cid(1), Sid(10), 0), false).unwrap();
        m.add(ActiveBundle::new(Cid(2), Sid(20), 0), false).unwrap();
        assert_eq!(m.add(ActiveBundle::new(Cid(3), Sid(30), 0), false), Err(Error::TableFull));
        assert_eq!(m.oldest().unwrap().cid, Cid(1));
        m.add(ActiveBundle::new(Cid(1), Sid(99), 0), true).unwrap();
        assert_eq!(m.oldest().unwrap().cid, Cid(2));
        assert_eq!(m.remove(Cid(1)).unwrap().sid, Sid(99));
    }
}
