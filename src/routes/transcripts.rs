use actix_web::{web, HttpResponse, Responder};
use crate::core::merge_profile;
use crate::models::{CallWebhookEvent, ErrorResponse, ExtractRequest, ExtractResponse, WebhookResponse};
use crate::routes::AppState;

const CALL_COMPLETED: &str = "call.completed";

/// Configure transcript-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/transcripts/extract", web::post().to(extract_transcript))
        .route("/webhooks/call", web::post().to(call_webhook));
}

fn bad_request(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: 400,
    })
}

/// Extract a profile fragment from a transcript
///
/// POST /api/v1/transcripts/extract
///
/// Request body:
/// ```json
/// { "transcription": "string" }
/// ```
async fn extract_transcript(
    state: web::Data<AppState>,
    req: web::Json<ExtractRequest>,
) -> impl Responder {
    let fragment = state.extractor.extract(&req.transcription);

    tracing::info!(
        "Extracted {} skills and {} interests from {} chars of transcript",
        fragment.skills.len(),
        fragment.interests.len(),
        req.transcription.len()
    );

    HttpResponse::Ok().json(ExtractResponse {
        extraction_id: uuid::Uuid::new_v4(),
        fragment,
    })
}

/// Voice-call provider webhook
///
/// POST /api/v1/webhooks/call
///
/// Only `call.completed` events are processed; anything else is acknowledged.
/// Authenticity of the caller is checked upstream.
async fn call_webhook(
    state: web::Data<AppState>,
    req: web::Json<CallWebhookEvent>,
) -> impl Responder {
    let event = req.into_inner();

    if event.event_type != CALL_COMPLETED {
        tracing::info!("Acknowledging non-completed call event: {}", event.event_type);
        return HttpResponse::Ok().json(WebhookResponse {
            success: true,
            ..Default::default()
        });
    }

    let Some(transcript) = event.call.transcript else {
        tracing::warn!("Completed call {:?} has no transcript", event.call.id);
        return bad_request("missing_transcript", "No transcript in call data");
    };

    let custom_data = event.call.custom_data.unwrap_or_default();
    let Some(user_id) = custom_data.user_id.filter(|id| !id.is_empty()) else {
        tracing::warn!("Completed call {:?} has no user id in custom_data", event.call.id);
        return bad_request("missing_user_id", "Missing user_id in custom_data");
    };

    let fragment = state.extractor.extract(&transcript.text);

    let merged_profile = event.existing_profile.map(|mut existing| {
        if existing.user_id.is_empty() {
            existing.user_id = user_id.clone();
        }
        merge_profile(&existing, &fragment)
    });

    tracing::info!(
        "Processed call {:?} for user {}: {} skills, {} interests, confidence {:?}",
        event.call.id,
        user_id,
        fragment.skills.len(),
        fragment.interests.len(),
        transcript.confidence
    );

    HttpResponse::Ok().json(WebhookResponse {
        success: true,
        call_id: event.call.id,
        user_id: Some(user_id),
        hackathon_id: custom_data.hackathon_id,
        confidence: transcript.confidence,
        fragment: Some(fragment),
        merged_profile,
    })
}
