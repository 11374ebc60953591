use crate::models::{ParticipantProfile, ProfileFragment};

/// Merge a freshly extracted fragment into a stored profile
///
/// Skills and interests become the case-insensitive union of both sides.
/// Existing entries come first and keep their casing; new entries follow in
/// fragment order.
pub fn merge_profile(existing: &ParticipantProfile, fragment: &ProfileFragment) -> ParticipantProfile {
    ParticipantProfile {
        user_id: existing.user_id.clone(),
        name: existing.name.clone(),
        skills: union(&existing.skills, &fragment.skills),
        interests: union(&existing.interests, &fragment.interests),
    }
}

fn union(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    let mut seen: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());

    for item in existing.iter().chain(incoming) {
        let key = item.trim().to_lowercase();
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        merged.push(item.trim().to_string());
    }

    merged
}
