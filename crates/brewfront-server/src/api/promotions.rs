use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct PromotionItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// GET `/api/v1/promotions/current`: active promotions whose window
/// contains the current instant, both boundaries inclusive.
pub(super) async fn list_current(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<PromotionItem>>>, ApiError> {
    let rows = brewfront_db::list_current_promotions(&state.pool, Utc::now())
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| PromotionItem {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            discount_percentage: row.discount_percentage,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
