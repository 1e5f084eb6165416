#![forbid(unsafe_code)]

//! Shared building blocks for the Strand bundle agent: custody value types,
//! the core error domain and TOML/environment configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CustodyConfig, CustodyConfigBuilder};
pub use error::{Error, Result};
pub use types::{ActiveBundle, Cid, Sid};
