//! Weighted consistent hash ring.
//!
//! `WeightedRing` plants `weight` virtual identifiers per member on an
//! underlying [`Ring`] and maps whatever the ring locates back to the
//! physical member name. The weight table and the ring are kept behind one
//! lock, so every add/remove is observed whole or not at all.
//!
//! # Example
//!
//! ```
//! use weighted::{RingConfig, WeightedMember, WeightedRing};
//!
//! let ring = WeightedRing::new(
//!     vec![WeightedMember::new("A", 1), WeightedMember::new("B", 3)],
//!     RingConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(ring.total_weight(), 4);
//! let owner = ring.locate_key(b"user:42").unwrap();
//! assert!(owner == "A" || owner == "B");
//! ```

use std::collections::HashMap;

use corelib::{Error, HashRing, Result, Ring, RingConfig};
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::member::{effective_weight, Member};
use crate::table::WeightTable;
use crate::vnode::{self, VirtualId, DELIMITER};

#[derive(Debug)]
struct Inner<R> {
    ring: R,
    table: WeightTable,
}

impl<R: Ring> Inner<R> {
    fn plant(&mut self, name: &str, weight: u32) {
        for id in VirtualId::expand(name, weight) {
            self.ring.add(&id.to_string());
        }
        self.table.insert(name, weight);
    }

    fn uproot(&mut self, name: &str) -> Option<u32> {
        let weight = self.table.remove(name)?;
        for id in VirtualId::expand(name, weight) {
            self.ring.remove(&id.to_string());
        }
        Some(weight)
    }

    fn replicas(&self, key: &[u8], n: usize) -> Result<Vec<String>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let available = self.table.len();
        if n > available {
            return Err(Error::InsufficientMembers {
                requested: n,
                available,
            });
        }

        let mut replicas: Vec<String> = Vec::with_capacity(n);
        for identifier in self.ring.successors(key) {
            let owner = self.resolve(identifier);
            if replicas.iter().any(|r| r == owner) {
                continue;
            }
            replicas.push(owner.to_string());
            if replicas.len() == n {
                break;
            }
        }
        Ok(replicas)
    }

    /// Physical member owning a located identifier.
    ///
    /// Checked against the table rather than stripped blindly, so a weight-1
    /// member whose name looks like `x#1` still resolves to itself.
    fn resolve<'a>(&self, identifier: &'a str) -> &'a str {
        if self.table.get(identifier) == Some(1) {
            return identifier;
        }
        let parsed = vnode::parse(identifier);
        if let Some((name, slot)) = parsed {
            if matches!(self.table.get(name), Some(w) if w > 1 && slot < w) {
                return name;
            }
        }
        // Not planted by this table: strip whatever suffix it carries.
        parsed.map_or(identifier, |(name, _)| name)
    }
}

/// Consistent hash ring distributing keys in proportion to member weight.
///
/// Safe to share between threads: mutations take an exclusive lock for the
/// whole remove-then-plant sequence, lookups take a shared one.
#[derive(Debug)]
pub struct WeightedRing<R = HashRing> {
    inner: RwLock<Inner<R>>,
}

impl WeightedRing {
    /// Build a ring over corelib's [`HashRing`].
    ///
    /// Non-positive weights count as 1. If a name appears more than once the
    /// last entry wins. Errors from the ring (invalid config, empty ring when
    /// the config forbids it) are returned unchanged.
    pub fn new<M, I>(members: I, config: RingConfig) -> Result<Self>
    where
        M: Member,
        I: IntoIterator<Item = M>,
    {
        Self::build(members, config)
    }
}

impl<R: Ring> WeightedRing<R> {
    /// Build a ring over any [`Ring`] implementation.
    ///
    /// All identifiers are handed to `R::with_identifiers` in one call.
    pub fn build<M, I>(members: I, config: RingConfig) -> Result<Self>
    where
        M: Member,
        I: IntoIterator<Item = M>,
    {
        let mut table = WeightTable::new();
        for member in members {
            let name = member.name();
            warn_reserved(name);
            let weight = effective_weight(member.weight());
            if let Some(previous) = table.insert(name, weight) {
                warn!(
                    member = name,
                    previous, weight, "duplicate member in constructor input, last entry wins"
                );
            }
        }

        // Expand after de-duplication so every planted identifier is owned
        // by exactly one table entry.
        let identifiers: Vec<String> = table
            .iter()
            .flat_map(|(name, weight)| VirtualId::expand(name, weight).map(|v| v.to_string()))
            .collect();
        let ring = R::with_identifiers(identifiers, config)?;

        debug!(
            members = table.len(),
            identifiers = ring.len(),
            total_weight = table.total(),
            "built weighted ring"
        );

        Ok(Self {
            inner: RwLock::new(Inner { ring, table }),
        })
    }

    /// Add `member`, replacing it if the name is already present.
    ///
    /// Afterwards the ring holds exactly `weight` identifiers for the name.
    pub fn add<M: Member>(&self, member: M) {
        let name = member.name();
        warn_reserved(name);
        let weight = effective_weight(member.weight());

        let mut inner = self.inner.write();
        if let Some(previous) = inner.uproot(name) {
            trace!(member = name, previous, "replacing member");
        }
        inner.plant(name, weight);
        debug!(
            member = name,
            weight,
            total_weight = inner.table.total(),
            "added member"
        );
    }

    /// Remove the member called `name`. Unknown names are ignored.
    pub fn remove(&self, name: &str) {
        let mut inner = self.inner.write();
        match inner.uproot(name) {
            Some(weight) => debug!(
                member = name,
                weight,
                total_weight = inner.table.total(),
                "removed member"
            ),
            None => trace!(member = name, "remove of unknown member ignored"),
        }
    }

    /// Name of the physical member owning `key`, or `None` if the ring is
    /// empty. Never returns a virtual identifier.
    pub fn locate_key(&self, key: &[u8]) -> Option<String> {
        let inner = self.inner.read();
        let identifier = inner.ring.locate_key(key)?;
        let owner = inner.resolve(identifier);
        trace!(identifier, owner, "located key");
        Some(owner.to_string())
    }

    /// The owner of `key` followed by the next `n - 1` distinct members
    /// clockwise.
    ///
    /// Fails with [`Error::InsufficientMembers`] if fewer than `n` members
    /// exist.
    pub fn locate_replicas(&self, key: &[u8], n: usize) -> Result<Vec<String>> {
        self.inner.read().replicas(key, n)
    }

    /// [`locate_replicas`](Self::locate_replicas) with the ring's configured
    /// replication factor, capped at the number of members.
    pub fn locate_replica_set(&self, key: &[u8]) -> Vec<String> {
        let inner = self.inner.read();
        let n = inner.ring.replication_factor().min(inner.table.len());
        inner.replicas(key, n).unwrap_or_default()
    }

    /// Copy of the weight table.
    pub fn weights(&self) -> HashMap<String, u32> {
        self.inner.read().table.snapshot()
    }

    /// Running sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.inner.read().table.total()
    }

    /// Effective weight of `name`.
    pub fn weight(&self, name: &str) -> Option<u32> {
        self.inner.read().table.get(name)
    }

    /// Member names, sorted.
    pub fn members(&self) -> Vec<String> {
        self.inner.read().table.names()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().table.contains(name)
    }

    /// Number of physical members.
    pub fn len(&self) -> usize {
        self.inner.read().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().table.is_empty()
    }

    /// Identifiers of `name` present in the underlying ring.
    pub fn virtual_ids(&self, name: &str) -> Vec<String> {
        let inner = self.inner.read();
        let Some(weight) = inner.table.get(name) else {
            return Vec::new();
        };
        VirtualId::expand(name, weight)
            .map(|v| v.to_string())
            .filter(|id| inner.ring.contains(id))
            .collect()
    }

    /// Total identifiers in the underlying ring.
    pub fn ring_len(&self) -> usize {
        self.inner.read().ring.len()
    }

    /// Every identifier in the underlying ring, in ring order.
    pub fn ring_identifiers(&self) -> Vec<String> {
        self.inner.read().ring.identifiers()
    }
}

fn warn_reserved(name: &str) {
    if name.contains(DELIMITER) {
        warn!(
            member = name,
            delimiter = %DELIMITER,
            "member name contains the virtual identifier delimiter"
        );
    }
}
