use axum::{extract::State, Json};
use pulse_types::AnalyticsReport;

use crate::{api::ApiResult, state::AppState};

/// GET /api/analytics - Chart data for the trailing 7-day window
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<Json<AnalyticsReport>> {
    Ok(Json(state.store.analytics()))
}
