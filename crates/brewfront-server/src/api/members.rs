use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct MemberLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(super) struct MemberItem {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub rewards_points: i32,
    pub membership_level: String,
    pub created_at: DateTime<Utc>,
}

/// POST `/api/v1/members/login`
///
/// Looks up the member by exact, case-sensitive email. Unknown emails and
/// inactive members both answer `not_found` so the response does not reveal
/// which accounts exist.
///
/// The password is currently NOT verified; any value is accepted for an
/// active member.
// TODO: verify a password hash here once member credentials are stored.
pub(super) async fn login(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<MemberLoginRequest>,
) -> Result<Json<ApiResponse<MemberItem>>, ApiError> {
    let MemberLoginRequest { email, password: _ } = request;

    let member = brewfront_db::find_member_by_email(&state.pool, &email)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let Some(member) = member.filter(|m| m.is_active) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            "unknown email or inactive member",
        ));
    };

    Ok(Json(ApiResponse {
        data: MemberItem {
            id: member.id,
            email: member.email,
            first_name: member.first_name,
            last_name: member.last_name,
            phone: member.phone,
            rewards_points: member.rewards_points,
            membership_level: member.membership_level,
            created_at: member.created_at,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
