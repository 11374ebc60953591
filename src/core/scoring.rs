use crate::models::{MatchResult, ParticipantProfile, ScoringWeights};

/// Calculate a compatibility score (0-100) of `other` from the point of view of `me`
///
/// Scoring formula:
/// score = round(100 * (
///     skills * |common skills| / max(|my skills|, |their skills|) +
///     interests * |common interests| / max(|my interests|, |their interests|)
/// ))
///
/// A term whose denominator is zero contributes nothing.
///
/// NOTE: interests match by substring containment and are counted on the
/// candidate's side, and both denominators take the larger set, so
/// `score(a, b)` and `score(b, a)` can differ. This is possibly a bug in the
/// ranking rules; it is kept as-is so existing rankings stay comparable.
pub fn calculate_match_score(
    me: &ParticipantProfile,
    other: &ParticipantProfile,
    weights: &ScoringWeights,
) -> MatchResult {
    let my_skills = normalize(&me.skills);
    let their_skills = normalize(&other.skills);
    let my_interests = normalize(&me.interests);
    let their_interests = normalize(&other.interests);

    let common_skills = common_skills(&my_skills, &their_skills);
    let common_interests = common_interests(&my_interests, &their_interests);

    let skills_score = overlap_ratio(common_skills.len(), my_skills.len(), their_skills.len());
    let interests_score =
        overlap_ratio(common_interests.len(), my_interests.len(), their_interests.len());

    let total = (skills_score * weights.skills + interests_score * weights.interests) * 100.0;

    MatchResult {
        candidate_id: other.user_id.clone(),
        common_skills,
        common_interests,
        score: total.round().clamp(0.0, 100.0),
    }
}

/// Score with the default 60/40 skills/interests weighting
pub fn score(me: &ParticipantProfile, other: &ParticipantProfile) -> MatchResult {
    calculate_match_score(me, other, &ScoringWeights::default())
}

/// Lowercased, trimmed, deduplicated items paired with their original text
fn normalize(items: &[String]) -> Vec<(String, &str)> {
    let mut normalized: Vec<(String, &str)> = Vec::with_capacity(items.len());

    for item in items {
        let key = item.trim().to_lowercase();
        if key.is_empty() || normalized.iter().any(|(existing, _)| *existing == key) {
            continue;
        }
        normalized.push((key, item.trim()));
    }

    normalized
}

/// Exact intersection, reported in the candidate's casing
fn common_skills(mine: &[(String, &str)], theirs: &[(String, &str)]) -> Vec<String> {
    mine.iter()
        .filter_map(|(key, _)| {
            theirs
                .iter()
                .find(|(other_key, _)| other_key == key)
                .map(|(_, original)| original.to_string())
        })
        .collect()
}

/// Distinct candidate interests that contain, or are contained in, one of mine
fn common_interests(mine: &[(String, &str)], theirs: &[(String, &str)]) -> Vec<String> {
    let mut common: Vec<String> = Vec::new();

    for (my_key, _) in mine {
        for (their_key, original) in theirs {
            let matched = my_key.contains(their_key.as_str()) || their_key.contains(my_key.as_str());
            if matched && !common.iter().any(|c| c == original) {
                common.push(original.to_string());
            }
        }
    }

    common
}

#[inline]
fn overlap_ratio(common: usize, mine: usize, theirs: usize) -> f64 {
    let denominator = mine.max(theirs);
    if denominator == 0 {
        return 0.0;
    }

    common as f64 / denominator as f64
}
