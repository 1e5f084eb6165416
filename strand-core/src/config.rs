use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Configuration for the custody subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustodyConfig {
    /// Capacity of the active-bundle table. Fixed for the table's lifetime.
    pub active_table_size: usize,
    /// Seconds an unacknowledged bundle waits before it becomes due for
    /// retransmission.
    pub retx_timeout_secs: u64,
}

impl Default for CustodyConfig {
    fn default() -> Self {
        Self { active_table_size: 16384, retx_timeout_secs: 10 }
    }
}

impl CustodyConfig {
    /// Load configuration from a TOML file and validate.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build a config from environment variables and validate.
    /// Recognized variables:
    /// - STRAND_ACTIVE_TABLE_SIZE
    /// - STRAND_RETX_TIMEOUT_SECS
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(v) = std::env::var("STRAND_ACTIVE_TABLE_SIZE") {
            cfg.active_table_size = v
                .parse()
                .map_err(|e| Error::config(format!("invalid STRAND_ACTIVE_TABLE_SIZE: {e}")))?;
        }
        if let Ok(v) = std::env::var("STRAND_RETX_TIMEOUT_SECS") {
            cfg.retx_timeout_secs = v
                .parse()
                .map_err(|e| Error::config(format!("invalid STRAND_RETX_TIMEOUT_SECS: {e}")))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate logical consistency of fields. The table itself additionally
    /// enforces its index-range bound at construction.
    pub fn validate(&self) -> Result<()> {
        if self.active_table_size == 0 {
            return Err(Error::config("active_table_size must be greater than 0"));
        }
        if self.retx_timeout_secs == 0 {
            return Err(Error::config("retx_timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Write this configuration to a TOML file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml serialize error: {e}")))?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Create a builder for programmatic construction.
    pub fn builder() -> CustodyConfigBuilder {
        CustodyConfigBuilder::default()
    }
}

/// Builder for `CustodyConfig`.
#[derive(Debug, Default)]
pub struct CustodyConfigBuilder {
    active_table_size: Option<usize>,
    retx_timeout_secs: Option<u64>,
}

impl CustodyConfigBuilder {
    pub fn active_table_size(mut self, size: usize) -> Self {
        self.active_table_size = Some(size);
        self
    }
    pub fn retx_timeout_secs(mut self, secs: u64) -> Self {
        self.retx_timeout_secs = Some(secs);
        self
    }
    pub fn build(self) -> Result<CustodyConfig> {
        let mut cfg = CustodyConfig::default();
        if let Some(v) = self.active_table_size {
            cfg.active_table_size = v;
        }
        if let Some(v) = self.retx_timeout_secs {
            cfg.retx_timeout_secs = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CustodyConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let cfg = CustodyConfig { active_table_size: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = CustodyConfig::builder().retx_timeout_secs(0).build();
        assert!(err.is_err());
    }

    #[test]
    fn file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir().map_err(Error::Io)?;
        let path = dir.path().join("custody.toml");
        let cfg = CustodyConfig::builder().active_table_size(64).retx_timeout_secs(5).build()?;
        cfg.write_to_file(&path)?;
        let loaded = CustodyConfig::load_from_file(&path)?;
        assert_eq!(cfg, loaded);
        Ok(())
    }
}
