// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ParticipantProfile, ProfileFragment, ProjectExperience, TeamPreferences, Flexibility, MatchResult, ScoringWeights, ExtractionOptions};
pub use requests::{ExtractRequest, CallWebhookEvent, CallData, CallTranscript, CallCustomData, ScoreRequest, FindTeammatesRequest};
pub use responses::{ExtractResponse, WebhookResponse, FindTeammatesResponse, HealthResponse, ErrorResponse};
