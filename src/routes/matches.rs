use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, FieldErrors, FindMatchesQuery, FindMatchesResponse, HealthResponse, SearchState};
use crate::routes::AppState;
use crate::services::MatchSearch;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/{national_id}", web::get().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let residents = state.registry.read().await.len();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        residents,
        timestamp: chrono::Utc::now(),
    })
}

/// Find exchange matches endpoint
///
/// GET /api/v1/matches/{national_id}?limit=20
///
/// Returns eligible residents ranked by compatibility score. An unknown
/// national ID answers 404 so the client can show "no results".
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FindMatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
            fields: Some(FieldErrors::from(&errors)),
        });
    }

    let subject_id = path.into_inner();
    let limit = state.matching.effective_limit(query.limit);

    tracing::info!("Finding matches for resident: {}, limit: {}", subject_id, limit);

    let mut search = MatchSearch::with_latency(state.matching.simulated_delay());
    search.run(&state.matcher, &state.registry, &subject_id).await;

    match search.into_state() {
        SearchState::Results(mut matches) => {
            let total_results = matches.len();
            matches.truncate(limit);

            tracing::info!(
                "Returning {} matches for resident {} (of {} eligible)",
                matches.len(),
                subject_id,
                total_results
            );

            HttpResponse::Ok().json(FindMatchesResponse {
                subject_id,
                matches,
                total_results,
            })
        }
        SearchState::NotFound => HttpResponse::NotFound().json(ErrorResponse {
            error: "Resident not found".to_string(),
            message: "No matching resident found, try again".to_string(),
            status_code: 404,
            fields: None,
        }),
        other => {
            tracing::error!("Match search for {} ended in non-terminal state {:?}", subject_id, other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Search failed".to_string(),
                message: "Match search did not complete".to_string(),
                status_code: 500,
                fields: None,
            })
        }
    }
}
