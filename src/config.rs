use crate::condition::ConditionTier;
use crate::error::{OfferError, Result};
use crate::models::LanguageSet;

/// What the user is willing to buy
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Worst condition still accepted
    pub max_condition: ConditionTier,
    pub languages: LanguageSet,
    /// Cards whose market minimum exceeds this are reported as too expensive
    pub price_ceiling: Option<f64>,
}

impl SearchConfig {
    pub fn new(min_quality: &str, languages: &str, price_ceiling: Option<f64>) -> Result<Self> {
        let max_condition = ConditionTier::from_label(min_quality)?;

        let languages = LanguageSet::parse(languages);
        if languages.is_empty() {
            return Err(OfferError::Config(
                "at least one accepted language is required".to_string(),
            ));
        }

        if let Some(ceiling) = price_ceiling {
            if !ceiling.is_finite() || ceiling <= 0.0 {
                return Err(OfferError::Config(format!(
                    "price ceiling must be a positive number, got {ceiling}"
                )));
            }
        }

        Ok(Self {
            max_condition,
            languages,
            price_ceiling,
        })
    }

    /// True when the condition is at least as good as the configured minimum
    pub fn accepts_condition(&self, quality: ConditionTier) -> bool {
        quality.is_at_least(self.max_condition)
    }

    pub fn accepts_language(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    pub fn exceeds_ceiling(&self, minimum_price: f64) -> bool {
        self.price_ceiling
            .is_some_and(|ceiling| minimum_price > ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_config() {
        let config = SearchConfig::new("sp", "EN,PT", Some(50.0)).unwrap();
        assert_eq!(config.max_condition, ConditionTier::SlightlyPlayed);
        assert!(config.accepts_language("pt"));
        assert!(config.accepts_condition(ConditionTier::NearMint));
        assert!(config.accepts_condition(ConditionTier::SlightlyPlayed));
        assert!(!config.accepts_condition(ConditionTier::ModeratelyPlayed));
    }

    #[test]
    fn test_new_rejects_unknown_quality() {
        assert!(matches!(
            SearchConfig::new("EX", "EN", None),
            Err(OfferError::InvalidCondition { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_languages() {
        assert!(matches!(
            SearchConfig::new("NM", " , ", None),
            Err(OfferError::Config(_))
        ));
    }

    #[test]
    fn test_new_rejects_bad_ceiling() {
        assert!(SearchConfig::new("NM", "EN", Some(0.0)).is_err());
        assert!(SearchConfig::new("NM", "EN", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_exceeds_ceiling() {
        let config = SearchConfig::new("NM", "EN", Some(100.0)).unwrap();
        assert!(config.exceeds_ceiling(100.01));
        assert!(!config.exceeds_ceiling(100.0));

        let unbounded = SearchConfig::new("NM", "EN", None).unwrap();
        assert!(!unbounded.exceeds_ceiling(1_000_000.0));
    }
}
