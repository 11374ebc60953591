use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::ParticipantProfile;

/// Request to extract a profile fragment from raw transcript text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub transcription: String,
}

/// Event posted by the voice-call provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallWebhookEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub call: CallData,
    #[serde(alias = "existing_profile", rename = "existingProfile", default)]
    pub existing_profile: Option<ParticipantProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub transcript: Option<CallTranscript>,
    #[serde(default)]
    pub custom_data: Option<CallCustomData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallTranscript {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Identifiers attached when the call was placed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallCustomData {
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(alias = "hackathon_id", rename = "hackathonId", default)]
    pub hackathon_id: Option<String>,
}

/// Request to score a single candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub profile: ParticipantProfile,
    pub candidate: ParticipantProfile,
}

/// Request to rank candidate teammates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindTeammatesRequest {
    #[validate(nested)]
    pub profile: ParticipantProfile,
    #[serde(default)]
    pub candidates: Vec<ParticipantProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds", default)]
    pub exclude_user_ids: Vec<String>,
}
