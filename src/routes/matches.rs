use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ErrorResponse, EventMatchesRequest, EventMatchesResponse, GlobalMatchesRequest, GlobalMatchesResponse,
    HealthResponse,
};
use crate::services::{MatchError, MatchStore, MatchingService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchingService,
    /// Upper bound applied to caller-supplied limits
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/event", web::post().to(event_matches))
        .route("/matches/global", web::post().to(global_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.service.store().health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank volunteers for one event
///
/// POST /api/v1/matches/event
///
/// Request body:
/// ```json
/// {
///   "eventId": "string",
///   "limit": 10
/// }
/// ```
async fn event_matches(
    state: web::Data<AppState>,
    req: web::Json<EventMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for event matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let limit = req.limit.map(|l| (l as usize).min(state.max_limit));

    tracing::info!(
        "[{}] Ranking volunteers for event: {}, limit: {:?}",
        request_id,
        req.event_id,
        limit
    );

    match state.service.rank_volunteers_for_event(&req.event_id, limit).await {
        Ok(result) => {
            tracing::info!(
                "[{}] Returning {} matches for event {} (from {} candidates)",
                request_id,
                result.matches.len(),
                req.event_id,
                result.total_candidates
            );

            HttpResponse::Ok().json(EventMatchesResponse {
                request_id,
                event_id: req.event_id.clone(),
                matches: result.matches,
                total_candidates: result.total_candidates,
                eligible_candidates: result.eligible_candidates,
            })
        }
        Err(e) => error_response(&request_id, e),
    }
}

/// Rank the best volunteer/event pairs across all events
///
/// POST /api/v1/matches/global
///
/// Request body:
/// ```json
/// {
///   "limit": 1
/// }
/// ```
///
/// An empty body ranks with the default limit.
async fn global_matches(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let req = match parse_global_request(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::info!("Invalid global matches payload: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid JSON".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };
    let request_id = uuid::Uuid::new_v4().to_string();
    let limit = req.limit.map(|l| (l as usize).min(state.max_limit));

    tracing::info!("[{}] Ranking global pairs, limit: {:?}", request_id, limit);

    match state.service.rank_top_pairs_globally(limit).await {
        Ok(result) => {
            tracing::info!(
                "[{}] Returning {} global pairs (from {} eligible)",
                request_id,
                result.pairs.len(),
                result.pairs_considered
            );

            HttpResponse::Ok().json(GlobalMatchesResponse {
                request_id,
                pairs: result.pairs,
                pairs_considered: result.pairs_considered,
            })
        }
        Err(e) => error_response(&request_id, e),
    }
}

fn parse_global_request(body: &[u8]) -> Result<GlobalMatchesRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GlobalMatchesRequest::default());
    }
    serde_json::from_slice(body)
}

fn error_response(request_id: &str, err: MatchError) -> HttpResponse {
    match err {
        MatchError::InvalidInput(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid input".to_string(),
            message,
            status_code: 400,
        }),
        MatchError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message,
            status_code: 404,
        }),
        MatchError::Store(e) => {
            tracing::error!("[{}] Failed to load matching data: {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load matching data".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
