use axum::{Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

/// Static "About Us" record served to the front end.
#[derive(Debug, Clone, Serialize)]
pub(super) struct CompanyInfo {
    pub mission: &'static str,
    pub founded: &'static str,
    pub stores_worldwide: u32,
    pub description: &'static str,
    pub values: [&'static str; 4],
}

pub(super) fn company_info() -> CompanyInfo {
    CompanyInfo {
        mission: "Great coffee, roasted close to home and poured one cup at a time.",
        founded: "1998",
        stores_worldwide: 412,
        description: "Brewfront started as a single roastery stall at a Seattle \
                      farmers market and grew into a neighborhood coffee company \
                      that still sources every bean through direct trade.",
        values: [
            "Source directly and pay growers fairly",
            "Roast small and roast fresh",
            "Know the neighborhood by name",
            "Leave every space better than we found it",
        ],
    }
}

/// GET `/api/v1/company`: static descriptive record, no storage involved.
pub(super) async fn get_company(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CompanyInfo>> {
    Json(ApiResponse {
        data: company_info(),
        meta: ResponseMeta::new(req_id.0),
    })
}
