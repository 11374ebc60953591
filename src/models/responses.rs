use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, ParticipantProfile, ProfileFragment};

/// Response for the transcript extraction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    #[serde(rename = "extractionId")]
    pub extraction_id: uuid::Uuid,
    pub fragment: ProfileFragment,
}

/// Response for the call webhook
///
/// Events other than a completed call are acknowledged with only `success`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub success: bool,
    #[serde(rename = "callId", skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "hackathonId", skip_serializing_if = "Option::is_none")]
    pub hackathon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<ProfileFragment>,
    #[serde(rename = "mergedProfile", skip_serializing_if = "Option::is_none")]
    pub merged_profile: Option<ParticipantProfile>,
}

/// Response for the find teammates endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindTeammatesResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
