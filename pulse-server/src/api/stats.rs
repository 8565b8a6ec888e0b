use std::collections::BTreeMap;

use axum::{extract::State, Json};
use pulse_types::PlatformAccount;

use crate::{api::ApiResult, state::AppState};

/// GET /api/stats - Account summary for every tracked platform
pub async fn get_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, PlatformAccount>>> {
    let stats = state
        .store
        .account_summaries()
        .into_iter()
        .map(|account| (account.name.clone(), account))
        .collect();

    Ok(Json(stats))
}
