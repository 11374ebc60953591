use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FindTeammatesRequest, FindTeammatesResponse, HealthResponse, ScoreRequest};
use crate::routes::AppState;

/// Configure teammate matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/teammates/score", web::post().to(score_candidate))
        .route("/teammates/find", web::post().to(find_teammates));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one candidate against the caller's profile
///
/// POST /api/v1/teammates/score
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return validation_failed(errors);
    }

    let result = state.matcher.score(&req.profile, &req.candidate);

    tracing::debug!(
        "Scored {} against {}: {}",
        req.candidate.user_id,
        req.profile.user_id,
        result.score
    );

    HttpResponse::Ok().json(result)
}

/// Find teammates endpoint
///
/// POST /api/v1/teammates/find
///
/// Request body:
/// ```json
/// {
///   "profile": { "userId": "string", "skills": [], "interests": [] },
///   "candidates": [],
///   "limit": 20,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn find_teammates(
    state: web::Data<AppState>,
    req: web::Json<FindTeammatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_teammates request: {:?}", errors);
        return validation_failed(errors);
    }

    let limit = req
        .limit
        .unwrap_or_else(|| state.matching.default_limit())
        .min(state.matching.max_limit()) as usize;

    tracing::info!(
        "Finding teammates for user: {}, candidates: {}, limit: {}",
        req.profile.user_id,
        req.candidates.len(),
        limit
    );

    let result = state
        .matcher
        .find_teammates(&req.profile, &req.candidates, &req.exclude_user_ids, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        req.profile.user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindTeammatesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
