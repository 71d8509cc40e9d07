//! MentorMatch Algo - match-scoring and ranking engine for the MentorMatch
//! mentorship platform.
//!
//! This library computes compatibility between a mentor and a mentee using
//! additive weighted rules and produces a ranked recommendation list with
//! human-readable match reasons. Data loading, HTTP routing and persistence
//! live in the calling service; the engine is a pure function over profiles.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{build_candidate_pool, score_candidate, EngineError, MatchEngine, RankResult};
pub use crate::models::{
    CandidateScore, ExperienceTier, MeetingFrequency, Profile, RankRequest, RankedMatch,
    RankingResponse, Role, ScoringWeights,
};
