// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    aggregate_rating, CandidateScore, ExperienceTier, MeetingFrequency, Profile, Review, Role,
    ScoringWeights,
};
pub use requests::RankRequest;
pub use responses::{ErrorResponse, RankedMatch, RankingResponse};
