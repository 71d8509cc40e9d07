use crate::models::Profile;

/// Check whether a profile is eligible to be scored against the requester:
/// opposite role, and never the requester itself.
#[inline]
pub fn is_eligible_candidate(requester: &Profile, profile: &Profile) -> bool {
    profile.role == requester.role.opposite() && profile.user_id != requester.user_id
}

/// Build the candidate pool the engine expects.
///
/// The engine contract says candidates are already filtered to the opposite
/// role with the requester excluded; this is that filter, for callers that
/// load profiles in bulk. Incoming order is irrelevant to the final ranking,
/// which uses an explicit tie-break.
pub fn build_candidate_pool(requester: &Profile, profiles: Vec<Profile>) -> Vec<Profile> {
    profiles
        .into_iter()
        .filter(|profile| is_eligible_candidate(requester, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn profile(id: &str, role: Role) -> Profile {
        Profile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            title: None,
            bio: None,
            role,
            interests: vec![],
            industries: vec![],
            experience: None,
            available_hours_per_week: None,
            frequency: None,
            city: None,
            rating: None,
        }
    }

    #[test]
    fn test_same_role_filtered_out() {
        let requester = profile("mentor", Role::Mentor);
        let pool = build_candidate_pool(
            &requester,
            vec![
                profile("other_mentor", Role::Mentor),
                profile("mentee", Role::Mentee),
            ],
        );

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].user_id, "mentee");
    }

    #[test]
    fn test_requester_never_in_own_pool() {
        // A stale row could carry the requester's id with the wrong role;
        // the id check must still drop it
        let requester = profile("me", Role::Mentor);
        let mut same_id = profile("me", Role::Mentee);
        same_id.name = "Stale copy".to_string();

        let pool = build_candidate_pool(&requester, vec![same_id, profile("ok", Role::Mentee)]);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].user_id, "ok");
    }

    #[test]
    fn test_mentee_requester_gets_mentors() {
        let requester = profile("mentee", Role::Mentee);
        let pool = build_candidate_pool(
            &requester,
            vec![
                profile("mentor_a", Role::Mentor),
                profile("mentee_b", Role::Mentee),
                profile("mentor_c", Role::Mentor),
            ],
        );

        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|p| p.role == Role::Mentor));
    }
}
