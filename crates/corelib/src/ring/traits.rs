//! The contract a weighted layer consumes from a hash ring.

use crate::config::RingConfig;
use crate::error::Result;

/// A sorted ring of string identifiers answering "who owns this key".
///
/// Implementations hash identifiers onto the ring with the partitioner named
/// in their [`RingConfig`] and route a key to the identifier whose token is
/// the clockwise successor of the key's token.
pub trait Ring: Sized {
    /// Bulk-load `identifiers` into a new ring.
    ///
    /// Fails if the config is invalid, or if `identifiers` is empty and the
    /// config does not allow an empty ring.
    fn with_identifiers(identifiers: Vec<String>, config: RingConfig) -> Result<Self>;

    /// Insert one identifier. Idempotent.
    fn add(&mut self, identifier: &str);

    /// Remove one identifier. No-op if absent.
    fn remove(&mut self, identifier: &str);

    /// Identifier owning `key`, or `None` on an empty ring.
    fn locate_key(&self, key: &[u8]) -> Option<&str>;

    /// Every identifier once, clockwise, starting at the owner of `key`.
    fn successors<'a>(&'a self, key: &[u8]) -> Box<dyn Iterator<Item = &'a str> + 'a>;

    fn contains(&self, identifier: &str) -> bool;

    /// All identifiers in ring order.
    fn identifiers(&self) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replication factor the ring was configured with.
    fn replication_factor(&self) -> usize;
}
