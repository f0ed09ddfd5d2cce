use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{VisibilityRequest, VisibilityResponse};
use crate::routes::{resolve_profile_fresh, store_error_response, validation_error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/visibility", web::post().to(check_visibility));
}

/// Check whether a viewer may open a member's detail page or message them,
/// along with how well the two match
///
/// POST /api/v1/visibility
///
/// Request body:
/// ```json
/// { "viewerId": "string", "targetId": "string" }
/// ```
async fn check_visibility(
    state: web::Data<AppState>,
    req: web::Json<VisibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let viewer = match resolve_profile_fresh(&state, &req.viewer_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch viewer profile", &e),
    };
    let target = match resolve_profile_fresh(&state, &req.target_id).await {
        Ok(profile) => profile,
        Err(e) => return store_error_response("Failed to fetch target profile", &e),
    };

    let insight = state.matcher.insight(&viewer, &target);

    tracing::debug!(
        "Visibility {} -> {}: grant={:?}",
        req.viewer_id,
        req.target_id,
        insight.grant
    );

    HttpResponse::Ok().json(VisibilityResponse {
        can_view_detail: insight.can_view_detail,
        can_message: insight.can_message,
        grant: insight.grant,
        result: insight.result,
    })
}
