//! Member abstractions.
//!
//! A member is anything with a unique, stable name and an integer weight.
//! The name is the primary key: two members with the same name are the same
//! member.

use serde::{Deserialize, Serialize};

/// A weighted participant in the ring.
pub trait Member {
    /// Unique, stable name.
    fn name(&self) -> &str;

    /// Raw weight. Non-positive values are treated as 1.
    fn weight(&self) -> i64;
}

impl<M: Member + ?Sized> Member for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

/// Owned member, loadable from a config document.
///
/// ```
/// use weighted::WeightedMember;
///
/// let members: Vec<WeightedMember> =
///     serde_json::from_str(r#"[{ "name": "a", "weight": 3 }, { "name": "b" }]"#).unwrap();
/// assert_eq!(members[1].weight, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedMember {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}

impl WeightedMember {
    pub fn new(name: impl Into<String>, weight: i64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

impl Member for WeightedMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> i64 {
        self.weight
    }
}

/// Weight actually used for placement: `raw` if positive, else 1.
pub fn effective_weight(raw: i64) -> u32 {
    if raw <= 0 {
        1
    } else {
        u32::try_from(raw).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_weight_coerces_non_positive() {
        assert_eq!(effective_weight(0), 1);
        assert_eq!(effective_weight(-7), 1);
        assert_eq!(effective_weight(1), 1);
        assert_eq!(effective_weight(5), 5);
    }

    #[test]
    fn test_effective_weight_saturates() {
        assert_eq!(effective_weight(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_member_through_reference() {
        let m = WeightedMember::new("node1", 4);
        let r = &m;
        assert_eq!(Member::name(&r), "node1");
        assert_eq!(Member::weight(&r), 4);
    }
}
