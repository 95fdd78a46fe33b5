use actix_web::{web, HttpResponse, Responder};
use crate::models::{
    Direction, ErrorResponse, OptionEntry, OptionsResponse, RegisterResidentRequest,
    RegisterResidentResponse, ResidentsResponse, WishDirection, WishFloor,
};
use crate::routes::AppState;

/// Configure resident registry routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/residents", web::post().to(register_resident))
        .route("/residents", web::get().to(list_residents))
        .route("/residents/{national_id}", web::get().to(get_resident))
        .route("/options", web::get().to(form_options));
}

/// Register or update a resident
///
/// POST /api/v1/residents
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "nationalId": "14 digits",
///   "building": "string",
///   "floor": "integer",
///   "direction": "north|south|east|west",
///   "phone": "01XXXXXXXXX (optional)",
///   "wishFloor": "higher|lower|any",
///   "wishDirection": "north|south|east|west|any"
/// }
/// ```
async fn register_resident(
    state: web::Data<AppState>,
    req: web::Json<RegisterResidentRequest>,
) -> impl Responder {
    let resident = match req.into_inner().into_resident() {
        Ok(resident) => resident,
        Err(fields) => {
            tracing::warn!("Rejected resident registration: {}", fields);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: "Please fix the highlighted fields".to_string(),
                status_code: 400,
                fields: Some(fields),
            });
        }
    };

    let mut registry = state.registry.write().await;
    let outcome = registry.upsert(resident.clone());
    let total_residents = registry.len();
    drop(registry);

    tracing::info!(
        "Resident {} saved ({:?}), total residents: {}",
        resident.national_id,
        outcome,
        total_residents
    );

    HttpResponse::Ok().json(RegisterResidentResponse {
        outcome,
        resident,
        total_residents,
    })
}

/// List residents in registration order
///
/// GET /api/v1/residents
async fn list_residents(state: web::Data<AppState>) -> impl Responder {
    let residents = state.registry.read().await.snapshot();

    HttpResponse::Ok().json(ResidentsResponse {
        count: residents.len(),
        residents,
    })
}

/// GET /api/v1/residents/{national_id}
async fn get_resident(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let national_id = path.into_inner();
    let registry = state.registry.read().await;

    match registry.find_by_id(&national_id) {
        Some(resident) => HttpResponse::Ok().json(resident),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Resident not found".to_string(),
            message: format!("No resident registered with national ID {}", national_id),
            status_code: 404,
            fields: None,
        }),
    }
}

/// Choices for the registration form selects
///
/// GET /api/v1/options
async fn form_options() -> impl Responder {
    HttpResponse::Ok().json(OptionsResponse {
        directions: Direction::ALL
            .into_iter()
            .map(|d| entry(d.as_str(), d.label()))
            .collect(),
        wish_floors: WishFloor::ALL
            .into_iter()
            .map(|w| entry(w.as_str(), w.label()))
            .collect(),
        wish_directions: WishDirection::options()
            .into_iter()
            .map(|w| entry(w.as_str(), w.label()))
            .collect(),
    })
}

fn entry(value: &str, label: &str) -> OptionEntry {
    OptionEntry {
        value: value.to_string(),
        label: label.to_string(),
    }
}
