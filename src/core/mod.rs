// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod scoring;

pub use engine::{EngineError, MatchEngine, RankResult};
pub use filters::{build_candidate_pool, is_eligible_candidate};
pub use scoring::{score_candidate, AVAILABILITY_WINDOW_HOURS, HIGH_RATING_THRESHOLD};
