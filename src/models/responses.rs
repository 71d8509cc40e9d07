use serde::{Deserialize, Serialize};

use crate::models::domain::CandidateScore;

/// One entry of the ranked recommendation list, shaped for the API caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub title: Option<String>,
    pub city: Option<String>,
    pub bio: Option<String>,
    pub score: u32,
    pub reasons: Vec<String>,
}

impl From<CandidateScore> for RankedMatch {
    fn from(scored: CandidateScore) -> Self {
        Self {
            user_id: scored.profile.user_id,
            name: scored.profile.name,
            title: scored.profile.title,
            city: scored.profile.city,
            bio: scored.profile.bio,
            score: scored.score,
            reasons: scored.reasons,
        }
    }
}

/// Response envelope for a ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
