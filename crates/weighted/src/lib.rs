//! Weighted placement on a consistent hash ring.
//!
//! Each member carries a positive integer weight and receives a share of the
//! keyspace proportional to it. A member of weight `w` is planted on the
//! underlying [`corelib::Ring`] as `w` virtual identifiers; lookups map the
//! located identifier back to the physical member, so callers only ever see
//! member names.
//!
//! - [`member`]: the `Member` trait and weight coercion
//! - [`vnode`]: the virtual identifier naming rule
//! - [`table`]: weight table and running total
//! - [`ring`]: `WeightedRing`, tying the above to a ring

pub mod member;
pub mod ring;
pub mod table;
pub mod vnode;

pub use corelib::{Error, HashRing, PartitionerKind, Result, Ring, RingConfig};
pub use member::{effective_weight, Member, WeightedMember};
pub use ring::WeightedRing;
pub use table::WeightTable;
pub use vnode::VirtualId;
