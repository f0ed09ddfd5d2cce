use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{HealthResponse, RecommendRequest, RecommendResponse, ScoreRequest};
use crate::routes::{resolve_profile, resolve_profile_fresh, store_error_response, validation_error_response, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/score", web::post().to(score_member))
        .route("/match/recommend", web::post().to(recommend_members));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.cache.stats();
    tracing::trace!("Health check, cache entries: {}", stats.l1_size);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one member against another
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// { "viewerId": "string", "otherId": "string" }
/// ```
async fn score_member(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let viewer = match resolve_profile(&state, &req.viewer_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch viewer profile", &e),
    };
    let other = match resolve_profile(&state, &req.other_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch member profile", &e),
    };

    let result = state.matcher.scorer().score_members(&viewer, &other);

    tracing::debug!(
        "Scored {} -> {}: {}",
        req.viewer_id,
        req.other_id,
        result.score
    );

    HttpResponse::Ok().json(result)
}

/// Recommend members for a viewer
///
/// POST /api/v1/match/recommend
///
/// Request body:
/// ```json
/// { "viewerId": "string", "limit": 20, "candidateIds": ["string"] }
/// ```
async fn recommend_members(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit);

    tracing::info!("Recommending for member: {}, limit: {}", req.viewer_id, limit);

    let viewer = match resolve_profile_fresh(&state, &req.viewer_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch viewer profile", &e),
    };

    let candidates = match &req.candidate_ids {
        Some(ids) => state.store.get_profiles(ids).await,
        None => state.store.list_profiles(state.limits.candidate_pool_size).await,
    };
    let candidates = match candidates {
        Ok(candidates) => candidates,
        Err(e) => return store_error_response("Failed to query candidates", &e),
    };

    let result = state.matcher.recommend(&viewer, candidates, limit);

    tracing::info!(
        "Returning {} matches for member {} (from {} candidates)",
        result.matches.len(),
        req.viewer_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
