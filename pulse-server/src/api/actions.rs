use axum::{extract::State, Json};
use pulse_types::RefreshResponse;

use crate::{
    api::{ApiError, ApiResult},
    generator,
    state::AppState,
};

/// POST /api/refresh - Regenerate the dataset and swap it in atomically
pub async fn refresh_data(State(state): State<AppState>) -> ApiResult<Json<RefreshResponse>> {
    let dataset = generator::generate(&state.generator);
    let generated_at = dataset.generated_at;
    state.store.replace(dataset);
    tracing::info!("Dataset regenerated at {}", generated_at);

    Ok(Json(RefreshResponse {
        message: "Dataset regenerated".to_string(),
        generated_at,
    }))
}

/// POST /api/export - Report export is not implemented
pub async fn export_report() -> ApiResult<Json<()>> {
    Err(ApiError::NotImplemented(
        "Report export is not available".to_string(),
    ))
}

/// POST /api/schedule - Post scheduling is not implemented
pub async fn schedule_post() -> ApiResult<Json<()>> {
    Err(ApiError::NotImplemented(
        "Post scheduling is not available".to_string(),
    ))
}
