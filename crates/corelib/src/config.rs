//! Ring configuration.
//!
//! `RingConfig` is passed through unmodified by the weighted layer. It is a
//! serde type so host services can embed it in their own config files; every
//! field has a default, so `{}` is a valid document.

use crate::error::{Error, Result};
use crate::partitioner::PartitionerKind;
use serde::{Deserialize, Serialize};

const DEFAULT_REPLICATION_FACTOR: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Hash function used for identifiers and keys.
    pub partitioner: PartitionerKind,
    /// Number of distinct owners returned for a replica-set lookup.
    pub replication_factor: usize,
    /// Whether a ring may be built with no identifiers.
    pub allow_empty: bool,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            partitioner: PartitionerKind::default(),
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            allow_empty: true,
        }
    }
}

impl RingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partitioner(mut self, partitioner: PartitionerKind) -> Self {
        self.partitioner = partitioner;
        self
    }

    pub fn with_replication_factor(mut self, replication_factor: usize) -> Self {
        self.replication_factor = replication_factor;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Reject settings no ring can honor.
    pub fn validate(&self) -> Result<()> {
        if self.replication_factor == 0 {
            return Err(Error::InvalidConfig(
                "replication_factor must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RingConfig::default();
        assert_eq!(config.partitioner, PartitionerKind::SipHash);
        assert_eq!(config.replication_factor, 1);
        assert!(config.allow_empty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: RingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RingConfig::default());
    }

    #[test]
    fn test_load_from_document() {
        let config: RingConfig = serde_json::from_str(
            r#"{ "partitioner": "xxh3", "replication_factor": 3, "allow_empty": false }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            RingConfig::new()
                .with_partitioner(PartitionerKind::Xxh3)
                .with_replication_factor(3)
                .with_allow_empty(false)
        );
    }

    #[test]
    fn test_unknown_partitioner_rejected() {
        let parsed: std::result::Result<RingConfig, _> =
            serde_json::from_str(r#"{ "partitioner": "md5" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zero_replication_factor_invalid() {
        let config = RingConfig::new().with_replication_factor(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
