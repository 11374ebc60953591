use crate::models::{MatchResult, ParticipantProfile, ScoringWeights};
use crate::core::scoring::calculate_match_score;

/// Result of ranking a batch of candidates
#[derive(Debug)]
pub struct TeammateResult {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Ranks candidate teammates for a participant
///
/// # Pipeline Stages
/// 1. Exclusion (self and caller-supplied ids)
/// 2. Scoring
/// 3. Minimum score cut-off
/// 4. Stable ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), 0.0)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate against `me`
    pub fn score(&self, me: &ParticipantProfile, candidate: &ParticipantProfile) -> MatchResult {
        calculate_match_score(me, candidate, &self.weights)
    }

    /// Find the best teammates for `me` among `candidates`
    ///
    /// # Arguments
    /// * `me` - The participant asking for teammates
    /// * `candidates` - Profiles supplied by the profile store
    /// * `exclude_ids` - Additional user ids to leave out
    /// * `limit` - Maximum number of matches to return
    ///
    /// Candidates with equal scores keep their input order.
    pub fn find_teammates(
        &self,
        me: &ParticipantProfile,
        candidates: &[ParticipantProfile],
        exclude_ids: &[String],
        limit: usize,
    ) -> TeammateResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<MatchResult> = candidates
            .iter()
            .filter(|candidate| candidate.user_id != me.user_id)
            .filter(|candidate| !exclude_ids.contains(&candidate.user_id))
            .map(|candidate| self.score(me, candidate))
            .filter(|result| {
                let keep = result.score >= self.min_score;
                if !keep {
                    tracing::trace!("Dropping {} with score {}", result.candidate_id, result.score);
                }
                keep
            })
            .collect();

        // sort_by is stable, so ties stay in input order
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(limit);

        TeammateResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
