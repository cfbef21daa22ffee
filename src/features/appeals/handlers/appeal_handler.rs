use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::appeals::dtos::{AppealCreatedDto, CreateAppealDto};
use crate::features::appeals::services::AppealService;
use crate::shared::types::ApiResponse;

/// Submit a subscriber appeal
///
/// Every field is checked and all violations are returned together, so the
/// client can fix the whole form in one round trip.
#[utoipa::path(
    post,
    path = "/appeals",
    request_body = CreateAppealDto,
    responses(
        (status = 201, description = "Appeal accepted", body = ApiResponse<AppealCreatedDto>),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Validation failed; every violation is listed in `errors`")
    ),
    tag = "appeals"
)]
pub async fn create_appeal(
    State(service): State<Arc<AppealService>>,
    AppJson(dto): AppJson<CreateAppealDto>,
) -> Result<(StatusCode, Json<ApiResponse<AppealCreatedDto>>)> {
    let created = service.submit(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Обращение принято".to_string()),
            None,
        )),
    ))
}
