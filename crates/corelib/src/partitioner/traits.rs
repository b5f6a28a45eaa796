//! Core partitioner trait definitions.

use crate::token::Token;
use std::fmt::Debug;

/// A partitioner converts keys into tokens for placement on the hash ring.
///
/// Partitioners are stateless and thread-safe, allowing concurrent
/// token generation without synchronization overhead.
pub trait Partitioner: Send + Sync + Debug + 'static {
    /// Converts a key into a token.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to partition
    ///
    /// # Returns
    ///
    /// A token representing the position on the ring
    fn partition(&self, key: &[u8]) -> Token;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
