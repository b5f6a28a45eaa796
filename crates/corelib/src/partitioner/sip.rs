//! SipHash partitioner implementation.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// SipHash-1-3 partitioner with fixed zero keys, so tokens are stable across
/// processes. This is the default hash function of the ring.
#[derive(Clone, Debug, Default)]
pub struct SipHashPartitioner;

impl Partitioner for SipHashPartitioner {
    fn partition(&self, key: &[u8]) -> Token {
        let mut hasher = SipHasher13::new();
        hasher.write(key);
        Token(hasher.finish())
    }

    fn name(&self) -> &'static str {
        "SipHashPartitioner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_deterministic() {
        let p = SipHashPartitioner;
        assert_eq!(p.partition(b"node1"), p.partition(b"node1"));
        assert_ne!(p.partition(b"node1"), p.partition(b"node2"));
    }
}
