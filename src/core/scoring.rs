use crate::models::{ExperienceTier, Profile, Role, ScoringWeights};

/// Availability values within this many hours of each other count as similar
pub const AVAILABILITY_WINDOW_HOURS: u8 = 5;

/// Minimum aggregate rating for the highly-rated bonus
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

/// Score one candidate against the requester.
///
/// Rules are evaluated in a fixed order so the reasons list is deterministic:
/// interests, industries, experience, availability, frequency, rating, city.
/// Each rule contributes independently; a missing attribute on either side
/// skips that rule (no data, no points). The total is a plain sum and is
/// never negative.
pub fn score_candidate(
    requester: &Profile,
    candidate: &Profile,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    // Shared interests: linear per shared identifier
    let shared_interests = shared_id_count(&requester.interests, &candidate.interests);
    if shared_interests > 0 {
        score += weights.shared_interest * shared_interests as u32;
        reasons.push(if shared_interests == 1 {
            "1 shared interest".to_string()
        } else {
            format!("{} shared interests", shared_interests)
        });
    }

    // Shared industries: linear per shared identifier
    let shared_industries = shared_id_count(&requester.industries, &candidate.industries);
    if shared_industries > 0 {
        score += weights.shared_industry * shared_industries as u32;
        reasons.push(if shared_industries == 1 {
            "1 shared industry".to_string()
        } else {
            format!("{} shared industries", shared_industries)
        });
    }

    // Experience complementarity: mentors want less-experienced mentees and
    // mentees want more-experienced mentors
    if let (Some(req_tier), Some(cand_tier)) = (requester.experience, candidate.experience) {
        if experience_complementary(requester.role, req_tier, cand_tier) {
            score += weights.experience;
            reasons.push("Experience level match".to_string());
        }
    }

    // Availability similarity
    if let (Some(req_hours), Some(cand_hours)) = (
        requester.available_hours_per_week,
        candidate.available_hours_per_week,
    ) {
        if req_hours.abs_diff(cand_hours) <= AVAILABILITY_WINDOW_HOURS {
            score += weights.availability;
            reasons.push("Similar availability".to_string());
        }
    }

    // Meeting frequency preference
    if let (Some(req_freq), Some(cand_freq)) = (requester.frequency, candidate.frequency) {
        if req_freq == cand_freq {
            score += weights.frequency;
            reasons.push("Same meeting frequency preference".to_string());
        }
    }

    // High rating bonus (candidate side only; None means no reviews yet)
    if let Some(rating) = candidate.rating {
        if rating >= HIGH_RATING_THRESHOLD {
            score += weights.high_rating;
            reasons.push("Highly rated".to_string());
        }
    }

    // Same city, case-insensitive
    if let (Some(req_city), Some(cand_city)) = (&requester.city, &candidate.city) {
        if same_city(req_city, cand_city) {
            score += weights.same_city;
            reasons.push("Same city".to_string());
        }
    }

    (score, reasons)
}

/// Count identifiers present in both sets
#[inline]
fn shared_id_count(a: &[String], b: &[String]) -> usize {
    a.iter().filter(|id| b.contains(*id)).count()
}

/// A mentor is complemented by a strictly less experienced candidate,
/// a mentee by a strictly more experienced one
#[inline]
fn experience_complementary(
    requester_role: Role,
    requester_tier: ExperienceTier,
    candidate_tier: ExperienceTier,
) -> bool {
    match requester_role {
        Role::Mentor => candidate_tier < requester_tier,
        Role::Mentee => candidate_tier > requester_tier,
    }
}

/// City comparison is trimmed and case-insensitive; city is free text
#[inline]
fn same_city(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
