use axum::response::Html;

/// GET / - Single-file dashboard page; charts are drawn client-side from
/// the three JSON endpoints.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/dashboard.html"))
}
