//! Partitioner abstraction for consistent hashing.
//!
//! Partitioners are responsible for converting keys into tokens
//! that can be placed on the hash ring.

pub mod blake;
pub mod sip;
pub mod traits;
pub mod xxh3;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use blake::Blake3Partitioner;
pub use sip::SipHashPartitioner;
pub use traits::Partitioner;
pub use xxh3::Xxh3Partitioner;

/// Serializable selector for the hash function a ring uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionerKind {
    #[default]
    #[serde(rename = "siphash")]
    SipHash,
    #[serde(rename = "xxh3")]
    Xxh3,
    #[serde(rename = "blake3")]
    Blake3,
}

impl PartitionerKind {
    /// Instantiate the partitioner this kind names.
    pub fn build(self) -> Arc<dyn Partitioner> {
        match self {
            PartitionerKind::SipHash => Arc::new(SipHashPartitioner),
            PartitionerKind::Xxh3 => Arc::new(Xxh3Partitioner),
            PartitionerKind::Blake3 => Arc::new(Blake3Partitioner),
        }
    }
}
