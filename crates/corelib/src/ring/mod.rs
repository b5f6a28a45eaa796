//! Consistent hash ring implementation.
//!
//! The ring manages token positions and provides efficient lookup
//! operations for finding the identifier responsible for a key.

#[allow(clippy::module_inception)]
pub mod ring;
pub mod traits;

pub use ring::HashRing;
pub use traits::Ring;
