//! Hash ring data structure.
//!
//! Holds an ordered set of `(Token, identifier)` pairs. Keying the set on the
//! pair rather than on the token alone keeps two identifiers that hash to the
//! same token both present, ordered by identifier.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::RingConfig;
use crate::error::{Error, Result};
use crate::partitioner::Partitioner;
use crate::ring::traits::Ring;
use crate::token::Token;

#[derive(Clone, Debug)]
pub struct HashRing {
    partitioner: Arc<dyn Partitioner>,
    entries: BTreeSet<(Token, String)>,
    config: RingConfig,
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new()
    }
}

impl HashRing {
    /// Empty ring with the default config.
    pub fn new() -> Self {
        let config = RingConfig::default();
        Self {
            partitioner: config.partitioner.build(),
            entries: BTreeSet::new(),
            config,
        }
    }

    /// Token `identifier` is placed at.
    pub fn token_of(&self, identifier: &str) -> Token {
        self.partitioner.partition(identifier.as_bytes())
    }

    /// All `(token, identifier)` pairs in ring order (for debugging).
    pub fn tokens(&self) -> Vec<(Token, String)> {
        self.entries.iter().cloned().collect()
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    fn entry(&self, identifier: &str) -> (Token, String) {
        (self.token_of(identifier), identifier.to_string())
    }
}

impl Ring for HashRing {
    fn with_identifiers(identifiers: Vec<String>, config: RingConfig) -> Result<Self> {
        config.validate()?;
        if identifiers.is_empty() && !config.allow_empty {
            return Err(Error::EmptyRing);
        }

        let partitioner = config.partitioner.build();
        let entries = identifiers
            .into_iter()
            .map(|id| (partitioner.partition(id.as_bytes()), id))
            .collect();

        Ok(Self {
            partitioner,
            entries,
            config,
        })
    }

    fn add(&mut self, identifier: &str) {
        let entry = self.entry(identifier);
        self.entries.insert(entry);
    }

    fn remove(&mut self, identifier: &str) {
        let entry = self.entry(identifier);
        self.entries.remove(&entry);
    }

    fn locate_key(&self, key: &[u8]) -> Option<&str> {
        self.successors(key).next()
    }

    fn successors<'a>(&'a self, key: &[u8]) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        // An empty identifier sorts first among entries sharing the token.
        let start = (self.partitioner.partition(key), String::new());
        let clockwise = self.entries.range(start.clone()..);
        let wrapped = self.entries.range(..start);
        Box::new(clockwise.chain(wrapped).map(|(_, id)| id.as_str()))
    }

    fn contains(&self, identifier: &str) -> bool {
        self.entries.contains(&self.entry(identifier))
    }

    fn identifiers(&self) -> Vec<String> {
        self.entries.iter().map(|(_, id)| id.clone()).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn replication_factor(&self) -> usize {
        self.config.replication_factor
    }
}
