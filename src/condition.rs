use crate::error::{OfferError, Result};
use std::fmt;

/// Physical condition of a card, ranked from best (`M`) to worst (`D`).
///
/// The numeric rank matches the condition code LigaMagic uses in its store
/// listings. Older listings only ever show `NM` to `D`, which is simply the
/// same table without rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionTier {
    Mint,
    NearMint,
    SlightlyPlayed,
    ModeratelyPlayed,
    HeavilyPlayed,
    Damaged,
}

impl ConditionTier {
    /// Returns the short label shown on the site (e.g., "NM", "SP")
    pub fn label(&self) -> &'static str {
        match self {
            ConditionTier::Mint => "M",
            ConditionTier::NearMint => "NM",
            ConditionTier::SlightlyPlayed => "SP",
            ConditionTier::ModeratelyPlayed => "MP",
            ConditionTier::HeavilyPlayed => "HP",
            ConditionTier::Damaged => "D",
        }
    }

    /// Returns the rank, 1 (best) to 6 (worst)
    pub fn rank(&self) -> u8 {
        match self {
            ConditionTier::Mint => 1,
            ConditionTier::NearMint => 2,
            ConditionTier::SlightlyPlayed => 3,
            ConditionTier::ModeratelyPlayed => 4,
            ConditionTier::HeavilyPlayed => 5,
            ConditionTier::Damaged => 6,
        }
    }

    /// Parse a label, ignoring surrounding whitespace and case
    pub fn from_label(label: &str) -> Result<Self> {
        let wanted = label.trim().to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.label() == wanted)
            .ok_or_else(|| OfferError::InvalidCondition {
                value: label.to_string(),
                accepted: Self::all().iter().map(|t| t.label().to_string()).collect(),
            })
    }

    pub fn from_rank(rank: u8) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.rank() == rank)
            .ok_or_else(|| OfferError::InvalidCondition {
                value: rank.to_string(),
                accepted: Self::all().iter().map(|t| t.rank().to_string()).collect(),
            })
    }

    /// True when this tier is at least as good as `worst_accepted`
    pub fn is_at_least(&self, worst_accepted: ConditionTier) -> bool {
        is_acceptable(self.rank(), worst_accepted.rank())
    }

    /// Returns all tiers, best first
    pub fn all() -> &'static [ConditionTier] {
        &[
            ConditionTier::Mint,
            ConditionTier::NearMint,
            ConditionTier::SlightlyPlayed,
            ConditionTier::ModeratelyPlayed,
            ConditionTier::HeavilyPlayed,
            ConditionTier::Damaged,
        ]
    }
}

impl fmt::Display for ConditionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rank for a condition label (e.g., "NM" -> 2)
pub fn rank_of(label: &str) -> Result<u8> {
    ConditionTier::from_label(label).map(|tier| tier.rank())
}

/// Label for a condition rank (e.g., 2 -> "NM")
pub fn label_of(rank: u8) -> Result<&'static str> {
    ConditionTier::from_rank(rank).map(|tier| tier.label())
}

/// A lower rank is a better condition, so the configured minimum quality is a
/// rank ceiling.
pub fn is_acceptable(candidate_rank: u8, max_rank: u8) -> bool {
    candidate_rank <= max_rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_of_known_labels() {
        assert_eq!(rank_of("M").unwrap(), 1);
        assert_eq!(rank_of("NM").unwrap(), 2);
        assert_eq!(rank_of("SP").unwrap(), 3);
        assert_eq!(rank_of("MP").unwrap(), 4);
        assert_eq!(rank_of("HP").unwrap(), 5);
        assert_eq!(rank_of("D").unwrap(), 6);
    }

    #[test]
    fn test_label_of_known_ranks() {
        assert_eq!(label_of(1).unwrap(), "M");
        assert_eq!(label_of(2).unwrap(), "NM");
        assert_eq!(label_of(3).unwrap(), "SP");
        assert_eq!(label_of(4).unwrap(), "MP");
        assert_eq!(label_of(5).unwrap(), "HP");
        assert_eq!(label_of(6).unwrap(), "D");
    }

    #[test]
    fn test_round_trip_over_whole_scale() {
        for tier in ConditionTier::all() {
            assert_eq!(rank_of(label_of(tier.rank()).unwrap()).unwrap(), tier.rank());
            assert_eq!(label_of(rank_of(tier.label()).unwrap()).unwrap(), tier.label());
        }
    }

    #[test]
    fn test_legacy_five_tier_labels_still_parse() {
        for label in ["NM", "SP", "MP", "HP", "D"] {
            assert!(rank_of(label).is_ok());
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(ConditionTier::from_label(" nm ").unwrap(), ConditionTier::NearMint);
    }

    #[test]
    fn test_unknown_label_fails() {
        match rank_of("FF") {
            Err(OfferError::InvalidCondition { value, accepted }) => {
                assert_eq!(value, "FF");
                assert_eq!(accepted, vec!["M", "NM", "SP", "MP", "HP", "D"]);
            }
            other => panic!("expected InvalidCondition, got {other:?}"),
        }
        assert!(rank_of("").is_err());
    }

    #[test]
    fn test_unknown_rank_fails() {
        assert!(label_of(0).is_err());
        match label_of(7) {
            Err(OfferError::InvalidCondition { value, accepted }) => {
                assert_eq!(value, "7");
                assert_eq!(accepted.len(), 6);
            }
            other => panic!("expected InvalidCondition, got {other:?}"),
        }
    }

    #[test]
    fn test_is_acceptable_boundary() {
        assert!(is_acceptable(2, 4));
        assert!(is_acceptable(4, 4));
        assert!(!is_acceptable(5, 4));
    }

    #[test]
    fn test_is_at_least() {
        assert!(ConditionTier::NearMint.is_at_least(ConditionTier::SlightlyPlayed));
        assert!(ConditionTier::SlightlyPlayed.is_at_least(ConditionTier::SlightlyPlayed));
        assert!(!ConditionTier::Damaged.is_at_least(ConditionTier::HeavilyPlayed));
    }
}
