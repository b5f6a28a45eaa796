//! Core library for consistent hashing implementation.
//!
//! This crate provides the hash ring that weighted placement is layered on:
//! - Token type and clockwise distance
//! - Partitioner algorithms (the hash-function choice)
//! - Ring configuration
//! - The sorted identifier ring and the `Ring` trait it is consumed through

pub mod config;
pub mod error;
pub mod partitioner;
pub mod ring;
pub mod token;

pub use config::RingConfig;
pub use error::{Error, Result};
pub use partitioner::{Partitioner, PartitionerKind};
pub use ring::{HashRing, Ring};
pub use token::Token;
