use serde::{Deserialize, Serialize};
use std::fmt;

/// Custody identifier: a sequence number assigned by the local custodian to
/// each bundle it takes custody of. Monotonically increasing, so values are
/// already well distributed when used as hash keys.
///
/// ```
/// use strand_core::types::Cid;
/// let c: Cid = 42u64.into();
/// assert_eq!(u64::from(c), 42);
/// assert_eq!(c.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid(pub u64);

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Cid {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
impl From<Cid> for u64 {
    fn from(v: Cid) -> Self {
        v.0
    }
}

/// Storage identifier: opaque handle into the storage service holding the
/// persisted bundle body. `Sid::VACANT` (the null handle) is reserved to mark
/// empty table slots and must never be attached to a live bundle.
///
/// ```
/// use strand_core::types::Sid;
/// assert!(Sid::VACANT.is_vacant());
/// assert!(!Sid(7).is_vacant());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid(pub u64);

impl Sid {
    /// Reserved handle marking an empty slot.
    pub const VACANT: Sid = Sid(0);

    pub fn is_vacant(self) -> bool {
        self == Self::VACANT
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Sid {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
impl From<Sid> for u64 {
    fn from(v: Sid) -> Self {
        v.0
    }
}

/// An in-flight bundle awaiting custody acknowledgement. The agent treats the
/// bundle body as opaque; only this triple is tracked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveBundle {
    /// Custody id the acknowledgement will refer to.
    pub cid: Cid,
    /// Handle to the persisted bundle body.
    pub sid: Sid,
    /// Seconds-since-epoch deadline after which the bundle is due for
    /// retransmission. Owned by the caller; the table never interprets it.
    pub retx_time: u64,
}

impl ActiveBundle {
    pub fn new(cid: Cid, sid: Sid, retx_time: u64) -> Self {
        Self { cid, sid, retx_time }
    }
}
