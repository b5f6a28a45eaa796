//! Virtual identifiers.
//!
//! A member of weight `w` is planted on the ring as `w` identifiers. The
//! naming rule is a pure function of `(member, weight, slot)`:
//!
//! | weight | identifiers                      |
//! |--------|----------------------------------|
//! | 1      | `name`                           |
//! | w > 1  | `name#0`, `name#1`, ..., `name#{w-1}` |
//!
//! Removal regenerates the same identifiers from the weight table, so no
//! registry of planted identifiers is kept.

use std::fmt;

/// Separator between a member name and its slot index.
pub const DELIMITER: char = '#';

/// One ring entry standing in for a physical member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VirtualId<'a> {
    member: &'a str,
    slot: u32,
    weight: u32,
}

impl<'a> VirtualId<'a> {
    pub fn new(member: &'a str, slot: u32, weight: u32) -> Self {
        Self {
            member,
            slot,
            weight,
        }
    }

    /// All identifiers of `member` at `weight`, in slot order.
    pub fn expand(member: &'a str, weight: u32) -> impl Iterator<Item = VirtualId<'a>> {
        (0..weight).map(move |slot| Self::new(member, slot, weight))
    }

    /// Physical member this identifier belongs to.
    pub fn member(&self) -> &'a str {
        self.member
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Whether the rendered identifier carries a `#slot` suffix.
    pub fn is_suffixed(&self) -> bool {
        self.weight > 1
    }
}

impl fmt::Display for VirtualId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_suffixed() {
            write!(f, "{}{}{}", self.member, DELIMITER, self.slot)
        } else {
            f.write_str(self.member)
        }
    }
}

/// Split `identifier` into `(member, slot)` at its last delimiter.
///
/// Only canonical decimal slots are accepted (`b#3`, not `b#03` or `b#+3`),
/// since those are the only suffixes [`VirtualId`] renders.
pub fn parse(identifier: &str) -> Option<(&str, u32)> {
    let (member, suffix) = identifier.rsplit_once(DELIMITER)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if suffix.len() > 1 && suffix.starts_with('0') {
        return None;
    }
    let slot = suffix.parse().ok()?;
    Some((member, slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(member: &str, weight: u32) -> Vec<String> {
        VirtualId::expand(member, weight)
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn test_weight_one_is_bare_name() {
        assert_eq!(rendered("A", 1), vec!["A"]);
    }

    #[test]
    fn test_weight_many_is_suffixed() {
        assert_eq!(rendered("B", 3), vec!["B#0", "B#1", "B#2"]);
    }

    #[test]
    fn test_expand_is_deterministic() {
        assert_eq!(rendered("node", 16), rendered("node", 16));
    }

    #[test]
    fn test_parse_round_trips_suffixed() {
        for v in VirtualId::expand("B", 12) {
            assert_eq!(parse(&v.to_string()), Some(("B", v.slot())));
        }
    }

    #[test]
    fn test_parse_uses_last_delimiter() {
        assert_eq!(parse("a#b#7"), Some(("a#b", 7)));
    }

    #[test]
    fn test_parse_rejects_non_slots() {
        assert_eq!(parse("plain"), None);
        assert_eq!(parse("b#"), None);
        assert_eq!(parse("b#x1"), None);
        assert_eq!(parse("b#+3"), None);
        assert_eq!(parse("b#03"), None);
        assert_eq!(parse("b#99999999999"), None);
    }

    #[test]
    fn test_parse_accepts_slot_zero() {
        assert_eq!(parse("b#0"), Some(("b", 0)));
    }
}
