use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::{compatible_donors, compatible_recipients, Matcher};
use crate::models::{
    BloodGroup, CompatibilityResponse, ErrorResponse, HealthResponse, MatchRequest, Pagination,
    SearchDonorsQuery, SearchDonorsResponse, UpdateAvailabilityRequest,
};
use crate::services::DonorStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DonorStore>,
    pub matcher: Matcher,
}

/// Configure all donor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/donors/search", web::get().to(search_donors))
        .route("/donors/{donor_id}/availability", web::patch().to(update_availability))
        .route("/compatibility/{blood_group}", web::get().to(get_compatibility));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Donor search endpoint
///
/// GET /api/v1/donors/search?bloodGroup=O-&region=Dhaka&subRegion=Dhaka&locality=Shahbag&page=1&limit=20
///
/// Returns compatible available donors ranked best-first. The pool is read
/// from the store and ranked on every call. An unknown blood group yields an
/// empty result rather than an error.
async fn search_donors(
    state: web::Data<AppState>,
    query: web::Query<SearchDonorsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for donor search: {:?}", errors.field_errors().keys());
        return ErrorResponse::new(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
            .into_response();
    }

    let (page, limit) = state.matcher.page_params(query.page, query.limit);

    let blood_group = match blood_group_from_query(&query.blood_group) {
        Ok(group) => group,
        Err(e) => {
            tracing::warn!("Donor search with {}, returning no donors", e);
            return HttpResponse::Ok().json(SearchDonorsResponse {
                donors: vec![],
                total: 0,
                pagination: Pagination::new(page, limit, 0),
            });
        }
    };

    let request = MatchRequest {
        blood_group,
        location: query.location(),
    };

    let pool = match state
        .store
        .fetch_available_donors(compatible_donors(blood_group))
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to fetch donor pool for {}: {}", blood_group, e);
            return ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch donors",
                e.to_string(),
            )
            .into_response();
        }
    };

    let result = state
        .matcher
        .search(pool, &request, Some(page), Some(limit));

    let response = SearchDonorsResponse {
        total: result.pagination.total,
        pagination: result.pagination,
        donors: result.donors,
    };

    tracing::info!(
        "Returning {} of {} donors for {} request (pool {}, page {})",
        response.donors.len(),
        response.total,
        blood_group,
        result.pool_size,
        page
    );

    HttpResponse::Ok().json(response)
}

/// Compatibility lookup endpoint
///
/// GET /api/v1/compatibility/{bloodGroup}
async fn get_compatibility(path: web::Path<String>) -> impl Responder {
    let label = path.into_inner();

    match label.parse::<BloodGroup>() {
        Ok(group) => HttpResponse::Ok().json(CompatibilityResponse {
            blood_group: group,
            donors: compatible_donors(group).to_vec(),
            recipients: compatible_recipients(group),
        }),
        Err(e) => ErrorResponse::new(StatusCode::NOT_FOUND, "Unknown blood group", e.to_string())
            .into_response(),
    }
}

/// Availability toggle endpoint
///
/// PATCH /api/v1/donors/{donorId}/availability
///
/// Request body:
/// ```json
/// { "available": true }
/// ```
async fn update_availability(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateAvailabilityRequest>,
) -> impl Responder {
    let donor_id = path.into_inner();

    match state.store.set_availability(donor_id, req.available).await {
        Ok(true) => {
            tracing::info!("Donor {} availability set to {}", donor_id, req.available);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "Donor not found",
            format!("No donor with id {}", donor_id),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to update availability of {}: {}", donor_id, e);
            ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update availability",
                e.to_string(),
            )
            .into_response()
        }
    }
}

/// Parse the blood group query parameter
///
/// An unencoded `+` reaches the server as a space, so a trailing space
/// after the group letters is read back as `+`.
fn blood_group_from_query(raw: &str) -> Result<BloodGroup, crate::models::UnknownBloodGroup> {
    let trimmed = raw.trim_start();
    if trimmed.len() > 1 && trimmed.ends_with(' ') && !trimmed.trim_end().ends_with(['+', '-']) {
        return format!("{}+", trimmed.trim_end()).parse();
    }
    raw.parse()
}
