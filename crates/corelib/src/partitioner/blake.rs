//! BLAKE3 partitioner implementation.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;

/// Partitioner taking the first 8 bytes (little endian) of the BLAKE3 digest.
///
/// Slower than the other partitioners, but the output is a cryptographic
/// hash, which makes token placement hard to steer with chosen keys.
#[derive(Clone, Debug, Default)]
pub struct Blake3Partitioner;

impl Partitioner for Blake3Partitioner {
    fn partition(&self, key: &[u8]) -> Token {
        let digest = ::blake3::hash(key);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        Token(u64::from_le_bytes(head))
    }

    fn name(&self) -> &'static str {
        "Blake3Partitioner"
    }
}
