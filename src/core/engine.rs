use std::cmp::Ordering;

use thiserror::Error;

use crate::core::scoring::score_candidate;
use crate::models::{CandidateScore, Profile, ScoringWeights};

/// Errors raised at the engine boundary
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User {0} has no completed profile")]
    IncompleteProfile(String),
}

/// Result of one ranking run
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<CandidateScore>,
    pub total_candidates: usize,
}

/// Match-scoring and ranking engine.
///
/// Pure and deterministic: scores a pre-filtered candidate pool against the
/// requester, sorts descending and truncates. Candidates are expected to
/// already be the opposite role and to exclude the requester (see
/// [`crate::core::filters::build_candidate_pool`]); the engine does not
/// re-filter.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Guard for the caller layer: a user without a stored profile must be
    /// rejected before the engine is ever invoked.
    pub fn require_profile(
        profile: Option<Profile>,
        user_id: &str,
    ) -> Result<Profile, EngineError> {
        profile.ok_or_else(|| EngineError::IncompleteProfile(user_id.to_string()))
    }

    /// Rank candidates against the requester.
    ///
    /// Returns at most `limit` candidates, best score first. Non-matching
    /// candidates score 0 and are still ranked; cutting them off is the
    /// caller's display decision.
    ///
    /// Ties are broken explicitly: higher aggregate rating first (unrated
    /// last), then ascending user id. Output order is therefore a total
    /// order independent of the incoming candidate order.
    pub fn rank(
        &self,
        requester: &Profile,
        candidates: Vec<Profile>,
        limit: usize,
    ) -> Result<RankResult, EngineError> {
        if limit == 0 {
            return Err(EngineError::InvalidArgument(
                "limit must be positive".to_string(),
            ));
        }

        let total_candidates = candidates.len();

        let mut matches: Vec<CandidateScore> = candidates
            .into_iter()
            .map(|candidate| {
                let (score, reasons) = score_candidate(requester, &candidate, &self.weights);
                CandidateScore {
                    profile: candidate,
                    score,
                    reasons,
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    // Option<f64> orders None first, so descending puts
                    // unrated candidates last
                    b.profile
                        .rating
                        .partial_cmp(&a.profile.rating)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.profile.user_id.cmp(&b.profile.user_id))
        });

        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for user {}",
            matches.len(),
            total_candidates,
            requester.user_id
        );

        Ok(RankResult {
            matches,
            total_candidates,
        })
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn candidate(id: &str, interests: &[&str], rating: Option<f64>) -> Profile {
        Profile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            title: None,
            bio: None,
            role: Role::Mentee,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            industries: vec![],
            experience: None,
            available_hours_per_week: None,
            frequency: None,
            city: None,
            rating,
        }
    }

    fn requester() -> Profile {
        Profile {
            user_id: "mentor".to_string(),
            name: "Mentor".to_string(),
            title: None,
            bio: None,
            role: Role::Mentor,
            interests: vec!["rust".into(), "leadership".into(), "ml".into()],
            industries: vec![],
            experience: None,
            available_hours_per_week: None,
            frequency: None,
            city: None,
            rating: None,
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        let engine = MatchEngine::with_default_weights();
        let result = engine.rank(&requester(), vec![candidate("1", &["rust"], None)], 0);

        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let engine = MatchEngine::with_default_weights();
        let candidates = vec![
            candidate("low", &[], None),
            candidate("high", &["rust", "leadership"], None),
            candidate("mid", &["rust"], None),
        ];

        let result = engine.rank(&requester(), candidates, 2).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].profile.user_id, "high");
        assert_eq!(result.matches[0].score, 40);
        assert_eq!(result.matches[1].profile.user_id, "mid");
        assert_eq!(result.matches[1].score, 20);
    }

    #[test]
    fn test_non_matching_candidate_still_ranked() {
        let engine = MatchEngine::with_default_weights();
        let result = engine
            .rank(&requester(), vec![candidate("stranger", &[], None)], 10)
            .unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].score, 0);
        assert!(result.matches[0].reasons.is_empty());
    }

    #[test]
    fn test_tie_broken_by_rating_then_id() {
        let engine = MatchEngine::with_default_weights();
        let candidates = vec![
            candidate("b", &["rust"], None),
            candidate("c", &["rust"], Some(4.0)),
            candidate("a", &["rust"], None),
        ];

        let result = engine.rank(&requester(), candidates, 10).unwrap();

        // All score 20; rated candidate wins, then ids ascending
        assert_eq!(result.matches[0].profile.user_id, "c");
        assert_eq!(result.matches[1].profile.user_id, "a");
        assert_eq!(result.matches[2].profile.user_id, "b");
    }

    #[test]
    fn test_limit_larger_than_pool() {
        let engine = MatchEngine::with_default_weights();
        let result = engine
            .rank(&requester(), vec![candidate("1", &["rust"], None)], 50)
            .unwrap();

        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_require_profile() {
        assert!(MatchEngine::require_profile(Some(requester()), "mentor").is_ok());

        let err = MatchEngine::require_profile(None, "ghost").unwrap_err();
        assert!(matches!(err, EngineError::IncompleteProfile(ref id) if id == "ghost"));
    }
}
