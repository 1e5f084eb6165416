use strand_core::types::Cid;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    Param(String),
    #[error("allocation failed")]
    Alloc,
    #[error("active table full")]
    TableFull,
    #[error("duplicate custody id: {0}")]
    DuplicateCid(Cid),
    #[error("custody id not found")]
    CidNotFound,
}

impl Error {
    pub fn param(msg: impl Into<String>) -> Self {
        Self::Param(msg.into())
    }
}
