use serde::{Deserialize, Serialize};
use validator::Validate;

/// Participant profile as stored by the profile store
///
/// Only the fields the matcher needs are modelled; contact and identity
/// data beyond `userId`/`name` stays with the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ParticipantProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl ParticipantProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }
}

/// Structured data pulled out of a single transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFragment {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    #[serde(rename = "projectExperience", default, skip_serializing_if = "Option::is_none")]
    pub project_experience: Option<Vec<ProjectExperience>>,
    #[serde(rename = "teamPreferences", default, skip_serializing_if = "Option::is_none")]
    pub team_preferences: Option<TeamPreferences>,
}

/// A project the participant mentioned by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectExperience {
    pub name: String,
    pub technologies: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPreferences {
    #[serde(rename = "desiredTeamSize", default, skip_serializing_if = "Option::is_none")]
    pub desired_team_size: Option<u32>,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    pub flexibility: Flexibility,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Flexible,
    #[default]
    Specific,
}

/// Compatibility of one candidate against the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "commonSkills")]
    pub common_skills: Vec<String>,
    #[serde(rename = "commonInterests")]
    pub common_interests: Vec<String>,
    pub score: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub interests: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.6,
            interests: 0.4,
        }
    }
}

/// Which optional parts of a fragment the extractor fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub projects: bool,
    pub team_preferences: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            projects: true,
            team_preferences: true,
        }
    }
}
