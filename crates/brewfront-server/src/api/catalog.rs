use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductCategoryItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// `price` is NUMERIC in storage; the `serde-float` feature emits it as a
/// JSON number.
#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_recommended: bool,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}

impl From<brewfront_db::ProductRow> for ProductItem {
    fn from(row: brewfront_db::ProductRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            is_recommended: row.is_recommended,
            is_new: row.is_new,
            created_at: row.created_at,
        }
    }
}

/// GET `/api/v1/catalog/categories`: active categories in display order.
pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<ProductCategoryItem>>>, ApiError> {
    let rows = brewfront_db::list_active_categories(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| ProductCategoryItem {
            id: row.id,
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            display_order: row.display_order,
            created_at: row.created_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET `/api/v1/catalog/recommended`: active products flagged recommended.
pub(super) async fn list_recommended(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<ProductItem>>>, ApiError> {
    let rows = brewfront_db::list_recommended_products(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows.into_iter().map(ProductItem::from).collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET `/api/v1/catalog/new`: active products flagged new, newest first.
pub(super) async fn list_new(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<ProductItem>>>, ApiError> {
    let rows = brewfront_db::list_new_products(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows.into_iter().map(ProductItem::from).collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
