//! Token abstraction module for consistent hashing.
//!
//! Tokens represent positions on the hash ring and must be comparable,
//! hashable, and thread-safe.

use std::fmt;

/// A position on the ring, using u64 representation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Token(pub u64);

impl Token {
    /// Minimum token value (start of ring).
    pub const MIN: Token = Token(0);
    /// Maximum token value (end of ring).
    pub const MAX: Token = Token(u64::MAX);

    /// Clockwise distance from `self` to `other` on the ring.
    pub fn distance_to(&self, other: &Self) -> Self {
        Token(other.0.wrapping_sub(self.0))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_forward() {
        assert_eq!(Token(100).distance_to(&Token(200)), Token(100));
    }

    #[test]
    fn test_distance_wraps_around() {
        assert_eq!(Token::MAX.distance_to(&Token::MIN), Token(1));
        assert_eq!(Token(200).distance_to(&Token(100)), Token(u64::MAX - 99));
    }

    #[test]
    fn test_display_is_fixed_width_hex() {
        assert_eq!(Token(255).to_string(), "00000000000000ff");
    }
}
