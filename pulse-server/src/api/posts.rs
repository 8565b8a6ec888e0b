use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use pulse_types::Post;

use crate::{api::ApiResult, state::AppState};

#[derive(Deserialize)]
pub struct RecentPostsQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    10
}

/// GET /api/posts - Most recent posts across all platforms, newest first
pub async fn get_recent_posts(
    State(state): State<AppState>,
    Query(query): Query<RecentPostsQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.store.recent_posts(query.limit)))
}
