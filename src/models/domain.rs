use serde::{Deserialize, Serialize};

/// Which side of a mentorship a user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    /// The role a user of this role is matched against
    pub fn opposite(&self) -> Role {
        match self {
            Role::Mentor => Role::Mentee,
            Role::Mentee => Role::Mentor,
        }
    }
}

/// Career experience tier, ordered from junior to senior.
///
/// The derived `Ord` follows declaration order (ENTRY < MID < SENIOR < EXECUTIVE),
/// which is what experience-complementarity scoring compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceTier {
    Entry,
    Mid,
    Senior,
    Executive,
}

/// Preferred meeting cadence; compared by equality only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingFrequency {
    Weekly,
    Biweekly,
    Monthly,
    AsNeeded,
}

/// User profile as the scoring engine reads it.
///
/// Interests and industries are sets of identifiers and may be empty.
/// Every other attribute a scoring rule inspects is optional: a missing
/// value skips the rule rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(rename = "experienceTier", default)]
    pub experience: Option<ExperienceTier>,
    #[serde(rename = "availableHoursPerWeek", default)]
    pub available_hours_per_week: Option<u8>,
    #[serde(rename = "meetingFrequency", default)]
    pub frequency: Option<MeetingFrequency>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One received review, as resolved by the caller's data layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewerId")]
    pub reviewer_id: String,
    pub rating: u8,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Mean of all received review ratings, or `None` when no reviews exist
pub fn aggregate_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

/// One scored candidate, produced fresh on every ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub profile: Profile,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Per-rule score contributions.
///
/// Shared-interest and shared-industry weights apply per shared identifier
/// (unbounded linear scaling); the rest are flat bonuses.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub shared_interest: u32,
    pub shared_industry: u32,
    pub experience: u32,
    pub availability: u32,
    pub frequency: u32,
    pub high_rating: u32,
    pub same_city: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            shared_interest: 20,
            shared_industry: 15,
            experience: 10,
            availability: 8,
            frequency: 5,
            high_rating: 5,
            same_city: 10,
        }
    }
}
