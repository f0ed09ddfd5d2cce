// Route exports
pub mod matches;
pub mod visibility;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{ErrorResponse, MemberProfile};
use crate::services::{CacheError, CacheKey, CacheManager, DocumentStoreClient, StoreError};

/// Recommendation limits applied to incoming requests
#[derive(Debug, Clone, Copy)]
pub struct RecommendLimits {
    pub default_limit: i64,
    pub max_limit: i64,
    pub candidate_pool_size: usize,
}

impl Default for RecommendLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            candidate_pool_size: 500,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStoreClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub limits: RecommendLimits,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(visibility::configure),
    );
}

/// Cache-first profile lookup
///
/// Cache failures are logged and fall through to the store.
pub(crate) async fn resolve_profile(
    state: &AppState,
    member_id: &str,
) -> Result<MemberProfile, StoreError> {
    let key = CacheKey::profile(member_id);

    match state.cache.get::<MemberProfile>(&key).await {
        Ok(profile) => return Ok(profile),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed for {}: {}", key, e),
    }

    fetch_and_cache(state, &key, member_id).await
}

/// Store-first profile lookup for access decisions
///
/// Rank, venue unlocks and the admin flag can be revoked at any time, so
/// anything that decides what a viewer may see reads the store directly.
/// The fresh copy replaces whatever the cache held.
pub(crate) async fn resolve_profile_fresh(
    state: &AppState,
    member_id: &str,
) -> Result<MemberProfile, StoreError> {
    let key = CacheKey::profile(member_id);
    fetch_and_cache(state, &key, member_id).await
}

async fn fetch_and_cache(
    state: &AppState,
    key: &str,
    member_id: &str,
) -> Result<MemberProfile, StoreError> {
    let profile = state.store.get_profile(member_id).await?;

    if let Err(e) = state.cache.set(key, &profile).await {
        tracing::warn!("Failed to cache profile {}: {}", member_id, e);
    }

    Ok(profile)
}

pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Member not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        _ => {
            tracing::error!("{}: {}", context, err);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: context.to_string(),
                message: err.to_string(),
                status_code: 502,
            })
        }
    }
}

pub(crate) fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
