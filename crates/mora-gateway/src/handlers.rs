//! Request handlers.
//!
//! Each handler: authenticate, validate, call the subsystem port, map the
//! result. No business logic lives here.

use crate::auth::{constant_time_eq, SessionValidator as _, MANAGE_API_KEY_HEADER, SESSION_TOKEN_HEADER};
use crate::dto::{ActiveQuestionResponse, AggregateResponse, SubmitCommitmentResponse};
use crate::error::ApiError;
use crate::router::AppState;
use crate::validation::{
    AddQuestionRequest, AggregateRequest, EpochQuery, SubmitCommitmentRequest,
};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use mora_aggregate::{AggregationApi as _, CommitmentStore as _};
use mora_pool::PoolApi as _;
use serde::Deserialize;
use shared_types::{AggregateRecord, CommitmentRecord, Question};

fn require_session(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    if state.sessions.is_valid(token) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

fn require_operator(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let key = headers
        .get(MANAGE_API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;
    if constant_time_eq(key.as_bytes(), state.manage_api_key.as_bytes()) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

/// `?sample=1` switches to the anonymous preview path.
#[derive(Debug, Deserialize)]
pub struct ActiveQuestionParams {
    /// Any non-zero value selects the sample path.
    pub sample: Option<u8>,
}

/// `GET /api/game/active-question`
pub async fn active_question(
    State(state): State<AppState>,
    Query(params): Query<ActiveQuestionParams>,
    headers: HeaderMap,
) -> Result<Json<ActiveQuestionResponse>, ApiError> {
    if params.sample.unwrap_or(0) != 0 {
        // Anonymous, read-only preview of the most recently closed question.
        return match state.pool.sample_question().await? {
            Some(resolved) => Ok(Json(resolved.into())),
            None => Err(ApiError::NotFound("No active question found".into())),
        };
    }

    require_session(&state, &headers)?;
    let resolved = state.pool.resolve_active_question(Utc::now()).await?;
    Ok(Json(resolved.into()))
}

/// `POST /api/game/commitments`
pub async fn submit_commitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitCommitmentRequest>,
) -> Result<(StatusCode, Json<SubmitCommitmentResponse>), ApiError> {
    require_session(&state, &headers)?;
    let payload = request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = state.commitments.insert(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitCommitmentResponse {
            id: record.id,
            submitted_at: record.submitted_at.to_rfc3339(),
        }),
    ))
}

/// `GET /api/game/past-results`
pub async fn past_results(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AggregateRecord>>, ApiError> {
    require_session(&state, &headers)?;
    Ok(Json(state.aggregation.past_results().await?))
}

/// `POST /api/game/manage/aggregate`
pub async fn aggregate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, ApiError> {
    require_operator(&state, &headers)?;
    let epoch_id = request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state.aggregation.aggregate(&epoch_id).await?;
    Ok(Json(AggregateResponse { success: true }))
}

/// `POST /api/game/manage/questions`
pub async fn add_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AddQuestionRequest>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    require_operator(&state, &headers)?;
    let new = request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let question = state.pool.add_question(new).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// `GET /api/game/manage/commitments?epoch_id=HHDDMMYY`
pub async fn commitments_by_epoch(
    State(state): State<AppState>,
    Query(query): Query<EpochQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<CommitmentRecord>>, ApiError> {
    require_operator(&state, &headers)?;
    let epoch_id = query
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    Ok(Json(state.aggregation.commitments_for_epoch(&epoch_id).await?))
}
