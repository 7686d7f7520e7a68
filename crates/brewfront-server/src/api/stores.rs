use axum::{
    extract::{Query, State},
    Extension, Json,
};
use brewfront_core::{search_stores, StoreMatch, StoreQuery, StoreSearchRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StoreItem {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub hours: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    /// Great-circle distance from the query point; `null` for city/zip searches.
    pub distance_km: Option<f64>,
}

impl From<StoreMatch> for StoreItem {
    fn from(m: StoreMatch) -> Self {
        Self {
            id: m.store.id,
            name: m.store.name,
            address: m.store.address,
            city: m.store.city,
            state: m.store.state,
            zip_code: m.store.zip_code,
            phone: m.store.phone,
            latitude: m.store.latitude,
            longitude: m.store.longitude,
            hours: m.store.hours,
            is_active: m.store.is_active,
            created_at: m.store.created_at,
            distance_km: m.distance_km,
        }
    }
}

/// GET `/api/v1/stores/search`
///
/// Query params: `latitude`, `longitude`, `city`, `zip_code`, `radius`
/// (kilometers; defaults to the configured radius). Coordinates select
/// nearest-first ranking; otherwise city/zip filter the directory.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(request): Query<StoreSearchRequest>,
) -> Result<Json<ApiResponse<Vec<StoreItem>>>, ApiError> {
    let query = StoreQuery::from_request(request, state.default_search_radius_km)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let rows = brewfront_db::list_active_stores(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let snapshot = rows.into_iter().map(Into::into).collect();
    let data = search_stores(snapshot, &query)
        .into_iter()
        .map(StoreItem::from)
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
