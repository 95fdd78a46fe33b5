use thiserror::Error;
use crate::models::{ExchangeMatch, Resident, ScoringRules};
use crate::core::{filters::check_eligibility, scoring::calculate_exchange_score};

/// Errors surfaced by a match query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Resident not found: {0}")]
    SubjectNotFound(String),
}

/// Exchange matcher - scans residents for mutually compatible swaps
///
/// # Pipeline Stages
/// 1. Resolve the subject in the registry snapshot
/// 2. Mutual eligibility (floor and direction, both ways)
/// 3. Scoring
/// 4. Stable ranking by score
#[derive(Debug, Clone)]
pub struct ExchangeMatcher {
    rules: ScoringRules,
}

impl ExchangeMatcher {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: ScoringRules::default(),
        }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Find exchange partners for a resident
    ///
    /// # Arguments
    /// * `subject_id` - National ID of the resident asking for matches
    /// * `residents` - Registry contents, in registry order
    ///
    /// # Returns
    /// Eligible residents ranked by descending score; equal scores keep
    /// registry order. An empty list is a normal result.
    pub fn find_matches(
        &self,
        subject_id: &str,
        residents: &[Resident],
    ) -> Result<Vec<ExchangeMatch>, MatchError> {
        let subject = residents
            .iter()
            .find(|r| r.national_id == subject_id)
            .ok_or_else(|| MatchError::SubjectNotFound(subject_id.to_string()))?;

        tracing::info!(
            "Searching matches for {} (floor {}, wants {} / {})",
            subject.national_id,
            subject.floor,
            subject.wish_floor,
            subject.wish_direction
        );

        let mut matches: Vec<ExchangeMatch> = residents
            .iter()
            .filter(|candidate| candidate.national_id != subject.national_id)
            .filter(|candidate| {
                let eligibility = check_eligibility(subject, candidate);
                tracing::debug!("Checking {}: {:?}", candidate.national_id, eligibility);
                eligibility.is_eligible()
            })
            .map(|candidate| ExchangeMatch {
                score: calculate_exchange_score(subject, candidate, &self.rules),
                resident: candidate.clone(),
            })
            .collect();

        // sort_by is stable: ties stay in scan order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::info!(
            "Found {} matches for {} among {} residents",
            matches.len(),
            subject.national_id,
            residents.len()
        );

        Ok(matches)
    }
}

impl Default for ExchangeMatcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, WishDirection, WishFloor};

    fn create_resident(
        id: &str,
        floor: i32,
        direction: Direction,
        wish_floor: WishFloor,
        wish_direction: WishDirection,
    ) -> Resident {
        Resident {
            national_id: id.to_string(),
            name: format!("Resident {}", id),
            building: "3".to_string(),
            floor,
            direction,
            phone: String::new(),
            wish_floor,
            wish_direction,
        }
    }

    fn open_resident(id: &str, floor: i32) -> Resident {
        create_resident(id, floor, Direction::North, WishFloor::Any, WishDirection::Any)
    }

    #[test]
    fn test_unknown_subject() {
        let matcher = ExchangeMatcher::with_default_rules();
        let residents = vec![open_resident("a", 1)];

        let result = matcher.find_matches("missing", &residents);
        assert_eq!(result, Err(MatchError::SubjectNotFound("missing".to_string())));
    }

    #[test]
    fn test_empty_registry_is_not_found() {
        let matcher = ExchangeMatcher::with_default_rules();
        assert!(matcher.find_matches("a", &[]).is_err());
    }

    #[test]
    fn test_subject_alone_has_no_matches() {
        let matcher = ExchangeMatcher::with_default_rules();
        let residents = vec![open_resident("a", 1)];

        assert!(matcher.find_matches("a", &residents).unwrap().is_empty());
    }

    #[test]
    fn test_ineligible_candidates_dropped() {
        let matcher = ExchangeMatcher::with_default_rules();
        let residents = vec![
            create_resident("s", 3, Direction::North, WishFloor::Higher, WishDirection::Any),
            create_resident("low", 1, Direction::South, WishFloor::Any, WishDirection::Any),
            create_resident("high", 6, Direction::South, WishFloor::Lower, WishDirection::Any),
        ];

        let matches = matcher.find_matches("s", &residents).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].resident.national_id, "high");
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = ExchangeMatcher::with_default_rules();
        let residents = vec![
            open_resident("s", 5),
            open_resident("far", 12),  // 80
            open_resident("near", 6),  // 90
            open_resident("same", 5),  // 100
        ];

        let matches = matcher.find_matches("s", &residents).unwrap();
        let scores: Vec<u8> = matches.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![100, 90, 80]);
        assert_eq!(matches[0].resident.national_id, "same");
    }

    #[test]
    fn test_custom_rules_applied() {
        let matcher = ExchangeMatcher::new(ScoringRules {
            base: 10,
            direction_bonus: 0,
            ..ScoringRules::default()
        });
        let residents = vec![open_resident("s", 5), open_resident("c", 9)];

        let matches = matcher.find_matches("s", &residents).unwrap();
        assert_eq!(matches[0].score, 10);
        assert_eq!(matcher.rules().base, 10);
    }
}
